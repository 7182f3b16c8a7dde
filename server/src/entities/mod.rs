//! Entities module - Row shapes persisted in the database
//!
//! Every struct here mirrors a table (or a joined SELECT) one to one. The
//! `*Params` structs are the bind parameters of the statements that write
//! them. Nothing in this module is ever serialized to a client: the DTOs in
//! `crate::dtos` are the public shape.

pub mod account;
pub mod customer;
pub mod employee;
pub mod good;
pub mod goods_supplier;
pub mod role;
pub mod store;
pub mod supplier;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

// Re-exports
pub use account::{Account, CreateAccountParams, UpdateAccountParams};
pub use customer::{CreateCustomerParams, Customer, CustomerAccountRow, UpdateCustomerParams};
pub use employee::{
    CreateEmployeeParams, Employee, EmployeeRow, GetEmployeeRow, ListEmployeesRow,
    UpdateEmployeeParams,
};
pub use good::{CreateGoodParams, Good, UpdateGoodParams};
pub use goods_supplier::{CreateGoodsSupplierParams, GoodsSupplier};
pub use role::{CreateRoleParams, Role, UpdateRoleParams};
pub use store::{CreateStoreParams, Store, UpdateStoreParams};
pub use supplier::{CreateSupplierParams, Supplier, SupplierAccountRow, UpdateSupplierParams};

/// Converts a NUMERIC amount into whole integer units.
///
/// The fractional part is truncated and values outside the `i64` range
/// saturate at the nearest bound.
pub fn units_from_decimal(amount: Decimal) -> i64 {
    amount.trunc().to_i64().unwrap_or(if amount.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Inverse of [`units_from_decimal`]: integer units as a NUMERIC value.
pub fn decimal_from_units(units: i64) -> Decimal {
    Decimal::from(units)
}
