//! Customer service
//!
//! Writes return the bare customer row; the embedded account is read
//! separately afterwards so the DTO always carries the current snapshot.

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{CreateCustomerDTO, CustomerDTO, UpdateCustomerDTO};
use crate::entities::{CreateCustomerParams, Customer, UpdateCustomerParams, decimal_from_units};
use crate::repositories::{AccountQueries, CustomerQueries};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct CustomerService {
    queries: Arc<dyn CustomerQueries>,
    accounts: Arc<dyn AccountQueries>,
}

impl CustomerService {
    pub fn new(queries: Arc<dyn CustomerQueries>, accounts: Arc<dyn AccountQueries>) -> Self {
        Self { queries, accounts }
    }

    async fn with_account(&self, customer: Customer) -> Result<CustomerDTO, ServiceError> {
        let account = self
            .accounts
            .get_account(customer.account_id)
            .await
            .or_not_found(EntityKind::Account)?;
        Ok(CustomerDTO::from((customer, account)))
    }

    #[instrument(skip(self, body), fields(account_id = %body.account_id))]
    pub async fn create(&self, body: CreateCustomerDTO) -> Result<CustomerDTO, ServiceError> {
        let params = CreateCustomerParams {
            account_id: body.account_id,
            balance: decimal_from_units(body.balance),
            created_at: Utc::now(),
            is_alive: true,
        };
        let customer = self.queries.create_customer(&params).await?;
        info!(customer_id = customer.id, "Customer created");
        self.with_account(customer).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<CustomerDTO, ServiceError> {
        let row = self
            .queries
            .get_customer(id)
            .await
            .or_not_found(EntityKind::Customer)?;
        Ok(CustomerDTO::from(row))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CustomerDTO>, ServiceError> {
        let rows = self.queries.list_customers().await?;
        Ok(rows.into_iter().map(CustomerDTO::from).collect())
    }

    #[instrument(skip(self, body))]
    pub async fn update(
        &self,
        id: i32,
        body: UpdateCustomerDTO,
    ) -> Result<CustomerDTO, ServiceError> {
        let params = UpdateCustomerParams {
            id,
            balance: decimal_from_units(body.balance),
            is_alive: body.is_alive,
        };
        let customer = self
            .queries
            .update_customer(&params)
            .await
            .or_not_found(EntityKind::Customer)?;
        info!("Customer updated");
        self.with_account(customer).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_customer(id)
            .await
            .or_not_found(EntityKind::Customer)?;
        info!("Customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CreateAccountParams;
    use crate::repositories::MemoryQueries;

    async fn setup() -> (CustomerService, i32) {
        let queries = Arc::new(MemoryQueries::new());
        let account = queries
            .create_account(&CreateAccountParams {
                login: "dana".to_string(),
                password: "hash".to_string(),
                created_at: Utc::now(),
                is_alive: true,
            })
            .await
            .unwrap();
        (CustomerService::new(queries.clone(), queries), account.id)
    }

    #[tokio::test]
    async fn create_embeds_the_account_and_matches_get() {
        let (service, account_id) = setup().await;
        let created = service
            .create(CreateCustomerDTO {
                account_id,
                balance: 500,
            })
            .await
            .unwrap();
        assert_eq!(created.account.id, account_id);
        assert_eq!(created.account.login, "dana");
        assert_eq!(created.balance, 500);

        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_changes_balance_and_liveness() {
        let (service, account_id) = setup().await;
        let created = service
            .create(CreateCustomerDTO {
                account_id,
                balance: 0,
            })
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                UpdateCustomerDTO {
                    balance: -20,
                    is_alive: false,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.balance, -20);
        assert!(!updated.is_alive);
        assert_eq!(updated.account, created.account);
    }

    #[tokio::test]
    async fn create_with_unknown_account_is_a_data_error() {
        let (service, _) = setup().await;
        let result = service
            .create(CreateCustomerDTO {
                account_id: 404,
                balance: 0,
            })
            .await;
        assert!(matches!(result, Err(ServiceError::Data(_))));
    }

    #[tokio::test]
    async fn deleted_customer_is_not_found() {
        let (service, account_id) = setup().await;
        let created = service
            .create(CreateCustomerDTO {
                account_id,
                balance: 1,
            })
            .await
            .unwrap();
        service.delete(created.id).await.unwrap();
        assert!(matches!(
            service.get(created.id).await,
            Err(ServiceError::NotFound(EntityKind::Customer))
        ));
    }
}
