//! Adoption application submission.
//!
//! Applications are validated before anything is read or written, then accepted
//! only for a cat that is currently listed in the catalog.

use std::sync::Arc;

use log::info;

use crate::{
    metrics::APPLICATIONS_SUBMITTED,
    models::{AdoptionApplicationRequest, AdoptionApplicationResponse, ApiError, RepositoryError},
    repositories::{ApplicationRepository, CatRepository},
    services::catalog::cat_not_found,
};

pub struct AdoptionService<C, A>
where
    C: CatRepository,
    A: ApplicationRepository,
{
    cat_repository: Arc<C>,
    application_repository: Arc<A>,
}

impl<C, A> AdoptionService<C, A>
where
    C: CatRepository,
    A: ApplicationRepository,
{
    pub fn new(cat_repository: Arc<C>, application_repository: Arc<A>) -> Self {
        Self {
            cat_repository,
            application_repository,
        }
    }

    pub async fn submit(
        &self,
        cat_id: &str,
        request: AdoptionApplicationRequest,
    ) -> Result<AdoptionApplicationResponse, ApiError> {
        let application = request.into_application(cat_id)?;

        let cat = match self.cat_repository.get_by_id(cat_id.to_string()).await {
            Ok(cat) if cat.is_available => cat,
            Ok(_) | Err(RepositoryError::NotFound(_)) => return Err(cat_not_found(cat_id)),
            Err(e) => return Err(e.into()),
        };

        let stored = self.application_repository.create(application).await?;
        APPLICATIONS_SUBMITTED.inc();
        info!(
            "Adoption application {} submitted for cat {}",
            stored.id, stored.cat_id
        );

        Ok(AdoptionApplicationResponse::new(&stored, &cat.name))
    }
}
