//! In-memory query executor
//!
//! Keeps every table in a `BTreeMap` keyed by id behind one async mutex and
//! answers with the same contract as `PgQueries`: `RowNotFound` when a
//! single-row statement matches nothing, inner-join semantics for the joined
//! reads, and foreign keys checked on write the way the schema in
//! `migrations/` declares them (violations come back as
//! `sqlx::Error::Protocol`, which the HTTP layer reports as a 500).

use super::{
    AccountQueries, CustomerQueries, EmployeeQueries, GoodQueries, GoodsSupplierQueries,
    RoleQueries, StoreQueries, SupplierQueries,
};
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
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// One table: rows by id plus the next value of its serial column
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        self.next_id += 1;
        let row = build(self.next_id);
        self.rows.insert(self.next_id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Result<&T, Error> {
        self.rows.get(&id).ok_or(Error::RowNotFound)
    }

    fn get_mut(&mut self, id: i32) -> Result<&mut T, Error> {
        self.rows.get_mut(&id).ok_or(Error::RowNotFound)
    }

    fn remove(&mut self, id: i32) -> Result<(), Error> {
        self.rows.remove(&id).map(|_| ()).ok_or(Error::RowNotFound)
    }

    fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    accounts: Table<Account>,
    roles: Table<Role>,
    employees: Table<Employee>,
    customers: Table<Customer>,
    goods: Table<Good>,
    stores: Table<Store>,
    suppliers: Table<Supplier>,
    goods_suppliers: Table<GoodsSupplier>,
}

fn foreign_key_violation(table: &str, column: &str) -> Error {
    Error::Protocol(format!(
        "insert or update on table \"{table}\" violates foreign key constraint on \"{column}\""
    ))
}

fn still_referenced(table: &str, by: &str) -> Error {
    Error::Protocol(format!(
        "update or delete on table \"{table}\" violates foreign key constraint on table \"{by}\""
    ))
}

impl Tables {
    fn require_account(&self, table: &str, account_id: i32) -> Result<(), Error> {
        if self.accounts.contains(account_id) {
            Ok(())
        } else {
            Err(foreign_key_violation(table, "account_id"))
        }
    }

    fn require_role(&self, role_id: i32) -> Result<(), Error> {
        if self.roles.contains(role_id) {
            Ok(())
        } else {
            Err(foreign_key_violation("employees", "role_id"))
        }
    }

    fn customer_row(&self, customer: &Customer) -> Option<CustomerAccountRow> {
        let account = self.accounts.rows.get(&customer.account_id)?;
        Some(CustomerAccountRow {
            id: customer.id,
            account_id: account.id,
            account_login: account.login.clone(),
            account_created_at: account.created_at,
            account_is_alive: account.is_alive,
            balance: customer.balance,
            created_at: customer.created_at,
            is_alive: customer.is_alive,
        })
    }

    fn supplier_row(&self, supplier: &Supplier) -> Option<SupplierAccountRow> {
        let account = self.accounts.rows.get(&supplier.account_id)?;
        Some(SupplierAccountRow {
            id: supplier.id,
            account_id: account.id,
            account_login: account.login.clone(),
            account_created_at: account.created_at,
            account_is_alive: account.is_alive,
            created_at: supplier.created_at,
            is_alive: supplier.is_alive,
        })
    }

    fn employee_row(&self, employee: &Employee) -> Option<GetEmployeeRow> {
        let account = self.accounts.rows.get(&employee.account_id)?;
        let role = self.roles.rows.get(&employee.role_id)?;
        Some(GetEmployeeRow {
            id: employee.id,
            account_id: account.id,
            account_login: account.login.clone(),
            account_created_at: account.created_at,
            account_is_alive: account.is_alive,
            role_id: role.id,
            role_name: role.name.clone(),
            role_created_at: role.created_at,
            created_at: employee.created_at,
            is_alive: employee.is_alive,
        })
    }
}

/// Executor over process memory, for tests
#[derive(Debug, Default)]
pub struct MemoryQueries {
    tables: Mutex<Tables>,
}

impl MemoryQueries {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountQueries for MemoryQueries {
    async fn create_account(&self, params: &CreateAccountParams) -> Result<Account, Error> {
        let mut tables = self.tables.lock().await;
        Ok(tables.accounts.insert_with(|id| Account {
            id,
            login: params.login.clone(),
            password: params.password.clone(),
            created_at: params.created_at,
            is_alive: params.is_alive,
        }))
    }

    async fn get_account(&self, id: i32) -> Result<Account, Error> {
        let tables = self.tables.lock().await;
        tables.accounts.get(id).cloned()
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables.accounts.rows.values().cloned().collect())
    }

    async fn update_account(&self, params: &UpdateAccountParams) -> Result<Account, Error> {
        let mut tables = self.tables.lock().await;
        let account = tables.accounts.get_mut(params.id)?;
        account.login = params.login.clone();
        if let Some(password) = &params.password {
            account.password = password.clone();
        }
        account.is_alive = params.is_alive;
        Ok(account.clone())
    }

    async fn delete_account(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.accounts.get(id)?;
        if tables.employees.rows.values().any(|e| e.account_id == id) {
            return Err(still_referenced("accounts", "employees"));
        }
        if tables.customers.rows.values().any(|c| c.account_id == id) {
            return Err(still_referenced("accounts", "customers"));
        }
        if tables.suppliers.rows.values().any(|s| s.account_id == id) {
            return Err(still_referenced("accounts", "suppliers"));
        }
        tables.accounts.remove(id)
    }
}

#[async_trait]
impl RoleQueries for MemoryQueries {
    async fn create_role(&self, params: &CreateRoleParams) -> Result<Role, Error> {
        let mut tables = self.tables.lock().await;
        Ok(tables.roles.insert_with(|id| Role {
            id,
            name: params.name.clone(),
            created_at: params.created_at,
        }))
    }

    async fn get_role(&self, id: i32) -> Result<Role, Error> {
        let tables = self.tables.lock().await;
        tables.roles.get(id).cloned()
    }

    async fn list_roles(&self) -> Result<Vec<Role>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables.roles.rows.values().cloned().collect())
    }

    async fn update_role(&self, params: &UpdateRoleParams) -> Result<Role, Error> {
        let mut tables = self.tables.lock().await;
        let role = tables.roles.get_mut(params.id)?;
        role.name = params.name.clone();
        Ok(role.clone())
    }

    async fn delete_role(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.roles.get(id)?;
        if tables.employees.rows.values().any(|e| e.role_id == id) {
            return Err(still_referenced("roles", "employees"));
        }
        tables.roles.remove(id)
    }
}

#[async_trait]
impl EmployeeQueries for MemoryQueries {
    async fn create_employee(&self, params: &CreateEmployeeParams) -> Result<Employee, Error> {
        let mut tables = self.tables.lock().await;
        tables.require_account("employees", params.account_id)?;
        tables.require_role(params.role_id)?;
        Ok(tables.employees.insert_with(|id| Employee {
            id,
            account_id: params.account_id,
            role_id: params.role_id,
            created_at: params.created_at,
            is_alive: params.is_alive,
        }))
    }

    async fn get_employee(&self, id: i32) -> Result<GetEmployeeRow, Error> {
        let tables = self.tables.lock().await;
        let employee = tables.employees.get(id)?;
        tables.employee_row(employee).ok_or(Error::RowNotFound)
    }

    async fn list_employees(&self) -> Result<Vec<ListEmployeesRow>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .employees
            .rows
            .values()
            .filter_map(|employee| tables.employee_row(employee))
            .map(|row| ListEmployeesRow {
                id: row.id,
                account_id: row.account_id,
                account_login: row.account_login,
                account_created_at: row.account_created_at,
                account_is_alive: row.account_is_alive,
                role_id: row.role_id,
                role_name: row.role_name,
                role_created_at: row.role_created_at,
                created_at: row.created_at,
                is_alive: row.is_alive,
            })
            .collect())
    }

    async fn update_employee(&self, params: &UpdateEmployeeParams) -> Result<Employee, Error> {
        let mut tables = self.tables.lock().await;
        tables.employees.get(params.id)?;
        tables.require_account("employees", params.account_id)?;
        tables.require_role(params.role_id)?;
        let employee = tables.employees.get_mut(params.id)?;
        employee.account_id = params.account_id;
        employee.role_id = params.role_id;
        employee.is_alive = params.is_alive;
        Ok(employee.clone())
    }

    async fn delete_employee(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.employees.remove(id)
    }
}

#[async_trait]
impl CustomerQueries for MemoryQueries {
    async fn create_customer(&self, params: &CreateCustomerParams) -> Result<Customer, Error> {
        let mut tables = self.tables.lock().await;
        tables.require_account("customers", params.account_id)?;
        Ok(tables.customers.insert_with(|id| Customer {
            id,
            account_id: params.account_id,
            balance: params.balance,
            created_at: params.created_at,
            is_alive: params.is_alive,
        }))
    }

    async fn get_customer(&self, id: i32) -> Result<CustomerAccountRow, Error> {
        let tables = self.tables.lock().await;
        let customer = tables.customers.get(id)?;
        tables.customer_row(customer).ok_or(Error::RowNotFound)
    }

    async fn list_customers(&self) -> Result<Vec<CustomerAccountRow>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .customers
            .rows
            .values()
            .filter_map(|customer| tables.customer_row(customer))
            .collect())
    }

    async fn update_customer(&self, params: &UpdateCustomerParams) -> Result<Customer, Error> {
        let mut tables = self.tables.lock().await;
        let customer = tables.customers.get_mut(params.id)?;
        customer.balance = params.balance;
        customer.is_alive = params.is_alive;
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.customers.remove(id)
    }
}

#[async_trait]
impl GoodQueries for MemoryQueries {
    async fn create_good(&self, params: &CreateGoodParams) -> Result<Good, Error> {
        let mut tables = self.tables.lock().await;
        Ok(tables.goods.insert_with(|id| Good {
            id,
            article: params.article.clone(),
            price: params.price,
            name: params.name.clone(),
            quantity: params.quantity,
            is_alive: params.is_alive,
        }))
    }

    async fn get_good(&self, id: i32) -> Result<Good, Error> {
        let tables = self.tables.lock().await;
        tables.goods.get(id).cloned()
    }

    async fn list_goods(&self) -> Result<Vec<Good>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables.goods.rows.values().cloned().collect())
    }

    async fn update_good(&self, params: &UpdateGoodParams) -> Result<Good, Error> {
        let mut tables = self.tables.lock().await;
        let good = tables.goods.get_mut(params.id)?;
        good.article = params.article.clone();
        good.price = params.price;
        good.name = params.name.clone();
        good.quantity = params.quantity;
        good.is_alive = params.is_alive;
        Ok(good.clone())
    }

    async fn delete_good(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.goods.get(id)?;
        if tables.goods_suppliers.rows.values().any(|l| l.good_id == id) {
            return Err(still_referenced("goods", "goods_suppliers"));
        }
        tables.goods.remove(id)
    }
}

#[async_trait]
impl StoreQueries for MemoryQueries {
    async fn create_store(&self, params: &CreateStoreParams) -> Result<Store, Error> {
        let mut tables = self.tables.lock().await;
        Ok(tables.stores.insert_with(|id| Store {
            id,
            address: params.address.clone(),
            created_at: params.created_at,
            updated_at: params.created_at,
            is_alive: params.is_alive,
        }))
    }

    async fn get_store(&self, id: i32) -> Result<Store, Error> {
        let tables = self.tables.lock().await;
        tables.stores.get(id).cloned()
    }

    async fn list_stores(&self) -> Result<Vec<Store>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables.stores.rows.values().cloned().collect())
    }

    async fn update_store(&self, params: &UpdateStoreParams) -> Result<Store, Error> {
        let mut tables = self.tables.lock().await;
        let store = tables.stores.get_mut(params.id)?;
        store.address = params.address.clone();
        store.updated_at = params.updated_at;
        store.is_alive = params.is_alive;
        Ok(store.clone())
    }

    async fn delete_store(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.stores.remove(id)
    }
}

#[async_trait]
impl SupplierQueries for MemoryQueries {
    async fn create_supplier(&self, params: &CreateSupplierParams) -> Result<Supplier, Error> {
        let mut tables = self.tables.lock().await;
        tables.require_account("suppliers", params.account_id)?;
        Ok(tables.suppliers.insert_with(|id| Supplier {
            id,
            account_id: params.account_id,
            created_at: params.created_at,
            is_alive: params.is_alive,
        }))
    }

    async fn get_supplier(&self, id: i32) -> Result<SupplierAccountRow, Error> {
        let tables = self.tables.lock().await;
        let supplier = tables.suppliers.get(id)?;
        tables.supplier_row(supplier).ok_or(Error::RowNotFound)
    }

    async fn list_suppliers(&self) -> Result<Vec<SupplierAccountRow>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .suppliers
            .rows
            .values()
            .filter_map(|supplier| tables.supplier_row(supplier))
            .collect())
    }

    async fn update_supplier(&self, params: &UpdateSupplierParams) -> Result<Supplier, Error> {
        let mut tables = self.tables.lock().await;
        let supplier = tables.suppliers.get_mut(params.id)?;
        supplier.is_alive = params.is_alive;
        Ok(supplier.clone())
    }

    async fn delete_supplier(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.suppliers.get(id)?;
        if tables.goods_suppliers.rows.values().any(|l| l.supplier_id == id) {
            return Err(still_referenced("suppliers", "goods_suppliers"));
        }
        tables.suppliers.remove(id)
    }
}

#[async_trait]
impl GoodsSupplierQueries for MemoryQueries {
    async fn create_goods_supplier(
        &self,
        params: &CreateGoodsSupplierParams,
    ) -> Result<GoodsSupplier, Error> {
        let mut tables = self.tables.lock().await;
        if !tables.goods.contains(params.good_id) {
            return Err(foreign_key_violation("goods_suppliers", "good_id"));
        }
        if !tables.suppliers.contains(params.supplier_id) {
            return Err(foreign_key_violation("goods_suppliers", "supplier_id"));
        }
        Ok(tables.goods_suppliers.insert_with(|id| GoodsSupplier {
            id,
            good_id: params.good_id,
            supplier_id: params.supplier_id,
            created_at: params.created_at,
            is_alive: params.is_alive,
        }))
    }

    async fn list_goods_by_supplier(&self, supplier_id: i32) -> Result<Vec<Good>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .goods_suppliers
            .rows
            .values()
            .filter(|link| link.supplier_id == supplier_id)
            .filter_map(|link| tables.goods.rows.get(&link.good_id).cloned())
            .collect())
    }

    async fn list_suppliers_by_good(
        &self,
        good_id: i32,
    ) -> Result<Vec<SupplierAccountRow>, Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .goods_suppliers
            .rows
            .values()
            .filter(|link| link.good_id == good_id)
            .filter_map(|link| tables.suppliers.rows.get(&link.supplier_id))
            .filter_map(|supplier| tables.supplier_row(supplier))
            .collect())
    }

    async fn delete_goods_supplier(&self, id: i32) -> Result<(), Error> {
        let mut tables = self.tables.lock().await;
        tables.goods_suppliers.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account_params(login: &str) -> CreateAccountParams {
        CreateAccountParams {
            login: login.to_string(),
            password: "hash".to_string(),
            created_at: Utc::now(),
            is_alive: true,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially_and_never_reused() {
        let queries = MemoryQueries::new();
        let first = queries.create_account(&account_params("a")).await.unwrap();
        let second = queries.create_account(&account_params("b")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        queries.delete_account(second.id).await.unwrap();
        let third = queries.create_account(&account_params("c")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn missing_rows_report_row_not_found() {
        let queries = MemoryQueries::new();
        assert!(matches!(
            queries.get_account(7).await,
            Err(Error::RowNotFound)
        ));
        assert!(matches!(
            queries.delete_store(7).await,
            Err(Error::RowNotFound)
        ));
        assert!(matches!(
            queries
                .update_role(&UpdateRoleParams {
                    id: 7,
                    name: "x".to_string()
                })
                .await,
            Err(Error::RowNotFound)
        ));
    }

    #[tokio::test]
    async fn customer_insert_requires_existing_account() {
        let queries = MemoryQueries::new();
        let result = queries
            .create_customer(&CreateCustomerParams {
                account_id: 42,
                balance: Default::default(),
                created_at: Utc::now(),
                is_alive: true,
            })
            .await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn referenced_account_cannot_be_deleted() {
        let queries = MemoryQueries::new();
        let account = queries.create_account(&account_params("s")).await.unwrap();
        queries
            .create_supplier(&CreateSupplierParams {
                account_id: account.id,
                created_at: Utc::now(),
                is_alive: true,
            })
            .await
            .unwrap();

        assert!(matches!(
            queries.delete_account(account.id).await,
            Err(Error::Protocol(_))
        ));
    }
}
