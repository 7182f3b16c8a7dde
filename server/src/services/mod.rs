//! Services module - One service per entity
//!
//! A service turns request DTOs into statement parameters, stamps
//! `created_at`/`is_alive` on create, maps the executor's "no rows"
//! sentinel to a typed not-found and converts rows back into DTOs. Each holds
//! the query traits it needs as `Arc<dyn ...>`, all pointing at the same
//! executor.

pub mod account;
pub mod customer;
pub mod employee;
pub mod error;
pub mod good;
pub mod goods_supplier;
pub mod role;
pub mod store;
pub mod supplier;

pub use account::AccountService;
pub use customer::CustomerService;
pub use employee::EmployeeService;
pub use error::{EntityKind, ServiceError};
pub use good::GoodsService;
pub use goods_supplier::GoodsSupplierService;
pub use role::RoleService;
pub use store::StoreService;
pub use supplier::SupplierService;
