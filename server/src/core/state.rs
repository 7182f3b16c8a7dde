//! Application State - Services shared by every handler

use crate::repositories::Queries;
use crate::services::{
    AccountService, CustomerService, EmployeeService, GoodsService, GoodsSupplierService,
    RoleService, StoreService, SupplierService,
};
use std::sync::Arc;

/// One service per entity, all backed by the same executor
pub struct AppState {
    pub account: AccountService,
    pub employee: EmployeeService,
    pub role: RoleService,
    pub customer: CustomerService,
    pub good: GoodsService,
    pub store: StoreService,
    pub supplier: SupplierService,
    pub goods_supplier: GoodsSupplierService,
}

impl AppState {
    /// Builds every service around one shared executor handle.
    ///
    /// # Arguments
    /// * `queries` - Executor implementing all the query traits
    /// * `password_hash_cost` - bcrypt work factor for account passwords
    pub fn new<Q: Queries>(queries: Arc<Q>, password_hash_cost: u32) -> Self {
        Self {
            account: AccountService::new(queries.clone(), password_hash_cost),
            employee: EmployeeService::new(queries.clone()),
            role: RoleService::new(queries.clone()),
            customer: CustomerService::new(queries.clone(), queries.clone()),
            good: GoodsService::new(queries.clone()),
            store: StoreService::new(queries.clone()),
            supplier: SupplierService::new(queries.clone(), queries.clone()),
            goods_supplier: GoodsSupplierService::new(queries),
        }
    }
}
