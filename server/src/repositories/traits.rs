//! Query executor traits
//!
//! One trait per entity, one method per SQL statement. Every method returns
//! the typed row(s) or a `sqlx::Error`; a statement that matched nothing
//! (single-row read, update or delete of a missing id) reports
//! `sqlx::Error::RowNotFound`. Services rely on that sentinel to raise their
//! own not-found errors.

use crate::entities::{
    Account, CreateAccountParams, CreateCustomerParams, CreateEmployeeParams, CreateGoodParams,
    CreateGoodsSupplierParams, CreateRoleParams, CreateStoreParams, CreateSupplierParams,
    Customer, CustomerAccountRow, Employee, GetEmployeeRow, Good, GoodsSupplier,
    ListEmployeesRow, Role, Store, Supplier, SupplierAccountRow, UpdateAccountParams,
    UpdateCustomerParams, UpdateEmployeeParams, UpdateGoodParams, UpdateRoleParams,
    UpdateStoreParams, UpdateSupplierParams,
};
use async_trait::async_trait;
use sqlx::Error;

#[async_trait]
pub trait AccountQueries: Send + Sync {
    async fn create_account(&self, params: &CreateAccountParams) -> Result<Account, Error>;
    async fn get_account(&self, id: i32) -> Result<Account, Error>;
    async fn list_accounts(&self) -> Result<Vec<Account>, Error>;
    async fn update_account(&self, params: &UpdateAccountParams) -> Result<Account, Error>;
    async fn delete_account(&self, id: i32) -> Result<(), Error>;
}

#[async_trait]
pub trait RoleQueries: Send + Sync {
    async fn create_role(&self, params: &CreateRoleParams) -> Result<Role, Error>;
    async fn get_role(&self, id: i32) -> Result<Role, Error>;
    async fn list_roles(&self) -> Result<Vec<Role>, Error>;
    async fn update_role(&self, params: &UpdateRoleParams) -> Result<Role, Error>;
    async fn delete_role(&self, id: i32) -> Result<(), Error>;
}

#[async_trait]
pub trait EmployeeQueries: Send + Sync {
    async fn create_employee(&self, params: &CreateEmployeeParams) -> Result<Employee, Error>;
    /// Employee joined with its account and role
    async fn get_employee(&self, id: i32) -> Result<GetEmployeeRow, Error>;
    async fn list_employees(&self) -> Result<Vec<ListEmployeesRow>, Error>;
    async fn update_employee(&self, params: &UpdateEmployeeParams) -> Result<Employee, Error>;
    async fn delete_employee(&self, id: i32) -> Result<(), Error>;
}

#[async_trait]
pub trait CustomerQueries: Send + Sync {
    async fn create_customer(&self, params: &CreateCustomerParams) -> Result<Customer, Error>;
    async fn get_customer(&self, id: i32) -> Result<CustomerAccountRow, Error>;
    async fn list_customers(&self) -> Result<Vec<CustomerAccountRow>, Error>;
    async fn update_customer(&self, params: &UpdateCustomerParams) -> Result<Customer, Error>;
    async fn delete_customer(&self, id: i32) -> Result<(), Error>;
}

#[async_trait]
pub trait GoodQueries: Send + Sync {
    async fn create_good(&self, params: &CreateGoodParams) -> Result<Good, Error>;
    async fn get_good(&self, id: i32) -> Result<Good, Error>;
    async fn list_goods(&self) -> Result<Vec<Good>, Error>;
    async fn update_good(&self, params: &UpdateGoodParams) -> Result<Good, Error>;
    async fn delete_good(&self, id: i32) -> Result<(), Error>;
}

#[async_trait]
pub trait StoreQueries: Send + Sync {
    async fn create_store(&self, params: &CreateStoreParams) -> Result<Store, Error>;
    async fn get_store(&self, id: i32) -> Result<Store, Error>;
    async fn list_stores(&self) -> Result<Vec<Store>, Error>;
    async fn update_store(&self, params: &UpdateStoreParams) -> Result<Store, Error>;
    async fn delete_store(&self, id: i32) -> Result<(), Error>;
}

#[async_trait]
pub trait SupplierQueries: Send + Sync {
    async fn create_supplier(&self, params: &CreateSupplierParams) -> Result<Supplier, Error>;
    async fn get_supplier(&self, id: i32) -> Result<SupplierAccountRow, Error>;
    async fn list_suppliers(&self) -> Result<Vec<SupplierAccountRow>, Error>;
    async fn update_supplier(&self, params: &UpdateSupplierParams) -> Result<Supplier, Error>;
    async fn delete_supplier(&self, id: i32) -> Result<(), Error>;
}

#[async_trait]
pub trait GoodsSupplierQueries: Send + Sync {
    async fn create_goods_supplier(
        &self,
        params: &CreateGoodsSupplierParams,
    ) -> Result<GoodsSupplier, Error>;
    /// Goods linked to the supplier, one entry per link
    async fn list_goods_by_supplier(&self, supplier_id: i32) -> Result<Vec<Good>, Error>;
    /// Suppliers linked to the good, one entry per link
    async fn list_suppliers_by_good(&self, good_id: i32)
    -> Result<Vec<SupplierAccountRow>, Error>;
    async fn delete_goods_supplier(&self, id: i32) -> Result<(), Error>;
}

/// Every statement of the schema behind a single handle.
///
/// `AppState` takes one `Arc` of an implementor and hands it to each service
/// as the narrower per-entity trait object.
pub trait Queries:
    AccountQueries
    + RoleQueries
    + EmployeeQueries
    + CustomerQueries
    + GoodQueries
    + StoreQueries
    + SupplierQueries
    + GoodsSupplierQueries
    + 'static
{
}

impl<T> Queries for T where
    T: AccountQueries
        + RoleQueries
        + EmployeeQueries
        + CustomerQueries
        + GoodQueries
        + StoreQueries
        + SupplierQueries
        + GoodsSupplierQueries
        + 'static
{
}
