//! Admin record editor.
//!
//! Create, update and delete cat records on behalf of shelter staff. The HTTP
//! gate already checks roles; every operation checks them again against the
//! caller's [`RoleSet`] before touching storage.

use std::sync::Arc;

use chrono::Utc;
use log::info;
use uuid::Uuid;

use crate::{
    models::{ApiError, Cat, CatAttributes, CatRequest, RoleSet},
    repositories::{CatRepository, ShelterRepository},
};

/// Explicit acknowledgement required before a record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    Confirmed,
    Missing,
}

impl DeleteConfirmation {
    pub fn from_query(confirm: Option<bool>) -> Self {
        match confirm {
            Some(true) => Self::Confirmed,
            _ => Self::Missing,
        }
    }
}

pub struct AdminEditor<C, S>
where
    C: CatRepository,
    S: ShelterRepository,
{
    cat_repository: Arc<C>,
    shelter_repository: Arc<S>,
}

impl<C, S> AdminEditor<C, S>
where
    C: CatRepository,
    S: ShelterRepository,
{
    pub fn new(cat_repository: Arc<C>, shelter_repository: Arc<S>) -> Self {
        Self {
            cat_repository,
            shelter_repository,
        }
    }

    fn authorize(caller: &RoleSet) -> Result<(), ApiError> {
        if caller.can_manage_cats() {
            Ok(())
        } else {
            Err(ApiError::Forbidden(
                "Admin or shelter staff role required".to_string(),
            ))
        }
    }

    /// Every record, available or not, most recent first.
    pub async fn list(&self, caller: &RoleSet) -> Result<Vec<Cat>, ApiError> {
        Self::authorize(caller)?;
        Ok(self.cat_repository.list_recent().await?)
    }

    /// Validates the request and stores a new record attributed to the earliest shelter.
    pub async fn create(&self, caller: &RoleSet, request: CatRequest) -> Result<Cat, ApiError> {
        Self::authorize(caller)?;
        let attributes = CatAttributes::try_from(request)?;

        let shelter = self
            .shelter_repository
            .first_shelter()
            .await?
            .ok_or_else(|| ApiError::BadRequest("No shelter found".to_string()))?;

        let cat = Cat::new(
            Uuid::new_v4().to_string(),
            attributes,
            Some(shelter.id),
            Utc::now(),
        );
        let created = self.cat_repository.create(cat).await?;
        info!("Cat {} created by shelter staff", created.id);
        Ok(created)
    }

    /// Replaces the editable attributes of an existing record.
    pub async fn update(
        &self,
        caller: &RoleSet,
        cat_id: &str,
        request: CatRequest,
    ) -> Result<Cat, ApiError> {
        Self::authorize(caller)?;
        let attributes = CatAttributes::try_from(request)?;

        let existing = self.cat_repository.get_by_id(cat_id.to_string()).await?;
        let updated = self
            .cat_repository
            .update(cat_id.to_string(), existing.with_attributes(attributes))
            .await?;
        info!("Cat {} updated by shelter staff", updated.id);
        Ok(updated)
    }

    pub async fn delete(
        &self,
        caller: &RoleSet,
        cat_id: &str,
        confirmation: DeleteConfirmation,
    ) -> Result<(), ApiError> {
        Self::authorize(caller)?;
        if confirmation != DeleteConfirmation::Confirmed {
            return Err(ApiError::BadRequest(
                "Deleting a cat requires confirm=true".to_string(),
            ));
        }

        self.cat_repository.delete_by_id(cat_id.to_string()).await?;
        info!("Cat {} deleted by shelter staff", cat_id);
        Ok(())
    }
}
