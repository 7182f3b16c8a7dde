//! DTOs module - Data Transfer Objects
//!
//! The shapes exchanged over HTTP, kept apart from the row shapes in
//! `crate::entities`. Response DTOs are built from rows with `From`; request
//! DTOs are decoded straight from the JSON body.

pub mod account;
pub mod customer;
pub mod employee;
pub mod good;
pub mod goods_supplier;
pub mod role;
pub mod store;
pub mod supplier;

pub use account::{AccountDTO, CreateAccountDTO, UpdateAccountDTO};
pub use customer::{CreateCustomerDTO, CustomerDTO, UpdateCustomerDTO};
pub use employee::{CreateEmployeeDTO, EmployeeDTO, UpdateEmployeeDTO};
pub use good::{CreateGoodDTO, GoodDTO, UpdateGoodDTO};
pub use goods_supplier::{CreateGoodsSupplierDTO, GoodsSupplierDTO};
pub use role::{CreateRoleDTO, RoleDTO, UpdateRoleDTO};
pub use store::{CreateStoreDTO, StoreDTO, UpdateStoreDTO};
pub use supplier::{CreateSupplierDTO, SupplierDTO, UpdateSupplierDTO};
