//! Service errors
//!
//! One not-found variant tagged by the entity that was missing, plus a
//! passthrough for every other data-access failure.

use std::fmt;
use thiserror::Error;

/// The entities a service can fail to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Employee,
    Role,
    Customer,
    Product,
    Store,
    Supplier,
    GoodsSupplierLink,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Account => "Account",
            Self::Employee => "Employee",
            Self::Role => "Role",
            Self::Customer => "Customer",
            Self::Product => "Product",
            Self::Store => "Store",
            Self::Supplier => "Supplier",
            Self::GoodsSupplierLink => "Goods supplier",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error(transparent)]
    Data(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed: {0}")]
    HashTask(#[from] tokio::task::JoinError),
}

/// Maps the executor's "no rows" sentinel onto a typed not-found
pub trait OrNotFound<T> {
    fn or_not_found(self, kind: EntityKind) -> Result<T, ServiceError>;
}

impl<T> OrNotFound<T> for Result<T, sqlx::Error> {
    fn or_not_found(self, kind: EntityKind) -> Result<T, ServiceError> {
        self.map_err(|err| match err {
            sqlx::Error::RowNotFound => ServiceError::NotFound(kind),
            other => ServiceError::Data(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_entity() {
        assert_eq!(
            ServiceError::NotFound(EntityKind::Product).to_string(),
            "Product not found"
        );
        assert_eq!(
            ServiceError::NotFound(EntityKind::GoodsSupplierLink).to_string(),
            "Goods supplier not found"
        );
    }

    #[test]
    fn only_row_not_found_becomes_not_found() {
        let missing: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
        assert!(matches!(
            missing.or_not_found(EntityKind::Store),
            Err(ServiceError::NotFound(EntityKind::Store))
        ));

        let broken: Result<(), sqlx::Error> = Err(sqlx::Error::PoolClosed);
        assert!(matches!(
            broken.or_not_found(EntityKind::Store),
            Err(ServiceError::Data(sqlx::Error::PoolClosed))
        ));
    }
}
