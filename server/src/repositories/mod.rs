//! Repositories module - Query executor over Postgres
//!
//! `PgQueries` implements every trait in `traits` against a shared
//! `PgPool`. The implementation for each entity lives in its own sub-module.

// ************************* NOTE ON SQLX ************************* //

/*
   Queries are built with the runtime API (`sqlx::query_as::<_, Row>` plus
   `#[derive(sqlx::FromRow)]` on the row structs) instead of `query_as!`:
   the checked macros need a live DATABASE_URL or a prepared `.sqlx` cache
   at compile time, and this crate has to build without either.

   Row count to method:
   exactly one      .fetch_one(...)    -> RowNotFound when nothing matched
   zero or more     .fetch_all(...)    -> empty Vec, never RowNotFound
   no rows back     .execute(...)      -> check rows_affected() by hand

   INSERT/UPDATE use `RETURNING` so the caller gets the stored row,
   including the id and the timestamps exactly as Postgres rounded them.
*/

pub mod account;
pub mod customer;
pub mod employee;
pub mod good;
pub mod goods_supplier;
pub mod role;
pub mod store;
pub mod supplier;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use traits::{
    AccountQueries, CustomerQueries, EmployeeQueries, GoodQueries, GoodsSupplierQueries, Queries,
    RoleQueries, StoreQueries, SupplierQueries,
};

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryQueries;

use sqlx::PgPool;
use sqlx::postgres::PgQueryResult;

/// Postgres-backed query executor
#[derive(Clone)]
pub struct PgQueries {
    connection_pool: PgPool,
}

impl PgQueries {
    pub fn new(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }
}

/// Turns a DELETE that touched nothing into the "no rows" sentinel
fn expect_affected(result: PgQueryResult) -> Result<(), sqlx::Error> {
    if result.rows_affected() == 0 {
        Err(sqlx::Error::RowNotFound)
    } else {
        Ok(())
    }
}
