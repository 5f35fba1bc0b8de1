use std::sync::Arc;

use models::cafe::{self, CafeSubmission};
use tracing::{info, instrument, warn};

use crate::cafe::repository::CafeRepository;
use crate::errors::ServiceError;

/// Application service for the café lifecycle: submission -> row -> listing -> deletion.
pub struct CafeService<R: CafeRepository> {
    repo: Arc<R>,
}

impl<R: CafeRepository> Clone for CafeService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CafeRepository> CafeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<cafe::Model>, ServiceError> {
        self.repo.list_all().await
    }

    pub async fn fetch(&self, id: i32) -> Result<cafe::Model, ServiceError> { self.repo.fetch(id).await }

    /// Validates the raw form and, only if it passes, inserts the café.
    #[instrument(skip_all, fields(name = sub.name.as_deref().unwrap_or_default()))]
    pub async fn submit(&self, sub: &CafeSubmission) -> Result<cafe::Model, ServiceError> {
        let new_cafe = cafe::validate(sub).map_err(|errors| {
            info!(event = "cafe_rejected", %errors, "submission failed validation");
            ServiceError::Validation(errors)
        })?;
        match self.repo.create(new_cafe).await {
            Ok(created) => {
                info!(event = "cafe_created", cafe_id = created.id, "cafe created");
                Ok(created)
            }
            Err(ServiceError::DuplicateName(name)) => {
                info!(event = "cafe_rejected", %name, "duplicate cafe name");
                Err(ServiceError::DuplicateName(name))
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes by id. `NotFound` is returned to the caller, which decides whether it matters.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                info!(event = "cafe_deleted", cafe_id = id, "cafe deleted");
                Ok(())
            }
            Err(e @ ServiceError::NotFound(_)) => {
                warn!(event = "cafe_delete_missing", cafe_id = id, "delete of unknown cafe");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cafe::SeaOrmCafeRepository;
    use crate::test_support::get_db;

    fn submission(name: &str) -> CafeSubmission {
        CafeSubmission {
            name: Some(name.to_string()),
            map_url: Some("https://goo.gl/maps/x".into()),
            img_url: Some("https://example.com/x.jpg".into()),
            location: Some("Shoreditch".into()),
            seats: Some("4".into()),
            has_toilet: Some("y".into()),
            has_wifi: Some("y".into()),
            has_sockets: Some("y".into()),
            can_take_calls: Some("y".into()),
            coffee_price: Some("£2.50".into()),
        }
    }

    async fn service() -> Result<CafeService<SeaOrmCafeRepository>, anyhow::Error> {
        let db = get_db().await?;
        Ok(CafeService::new(Arc::new(SeaOrmCafeRepository::new(db))))
    }

    #[tokio::test]
    async fn submit_then_list_round_trips() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let created = svc.submit(&submission("Old Spike Roastery")).await?;

        let all = svc.list_all().await?;
        assert_eq!(all.len(), 1);
        let c = &all[0];
        assert_eq!(c.id, created.id);
        assert_eq!(c.seats, "4");
        assert_eq!(c.coffee_price.as_deref(), Some("£2.50"));
        assert!(c.has_toilet && c.has_wifi && c.has_sockets && c.can_take_calls);
        Ok(())
    }

    #[tokio::test]
    async fn omitted_flags_default_to_false() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let sub = CafeSubmission {
            has_toilet: None,
            has_wifi: None,
            has_sockets: None,
            can_take_calls: None,
            ..submission("Barely There")
        };
        let created = svc.submit(&sub).await?;
        let found = svc.fetch(created.id).await?;
        assert!(!found.has_toilet && !found.has_wifi && !found.has_sockets && !found.can_take_calls);
        Ok(())
    }

    #[tokio::test]
    async fn empty_name_never_reaches_store() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let sub = CafeSubmission { name: Some(String::new()), ..submission("ignored") };
        let err = svc.submit(&sub).await.unwrap_err();
        match err {
            ServiceError::Validation(v) => assert!(v.for_field("name").is_some()),
            other => panic!("unexpected error: {other}"),
        }
        assert!(svc.list_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        svc.submit(&submission("Fora Borough")).await?;
        let err = svc.submit(&submission("Fora Borough")).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)));
        assert_eq!(svc.list_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_existing_and_missing() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        let keep = svc.submit(&submission("Keep")).await?;
        let gone = svc.submit(&submission("Gone")).await?;

        svc.delete(gone.id).await?;
        assert!(matches!(svc.fetch(gone.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(gone.id).await, Err(ServiceError::NotFound(_))));

        let all = svc.list_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);
        Ok(())
    }
}
