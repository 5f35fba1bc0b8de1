use async_trait::async_trait;
use models::cafe::{self, NewCafe};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Storage seam for café records. Each call is a single atomic statement.
#[async_trait]
pub trait CafeRepository: Send + Sync {
    async fn create(&self, cafe: NewCafe) -> Result<cafe::Model, ServiceError>;
    async fn list_all(&self) -> Result<Vec<cafe::Model>, ServiceError>;
    async fn fetch(&self, id: i32) -> Result<cafe::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCafeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCafeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CafeRepository for SeaOrmCafeRepository {
    async fn create(&self, new_cafe: NewCafe) -> Result<cafe::Model, ServiceError> {
        Ok(cafe::create(&self.db, new_cafe).await?)
    }

    async fn list_all(&self) -> Result<Vec<cafe::Model>, ServiceError> {
        Ok(cafe::list_all(&self.db).await?)
    }

    async fn fetch(&self, id: i32) -> Result<cafe::Model, ServiceError> {
        Ok(cafe::fetch(&self.db, id).await?)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(cafe::delete(&self.db, id).await?)
    }
}
