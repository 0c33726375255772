//! Shared application state handed to every request handler.

use std::{sync::Arc, time::Duration};

use actix_web::web::ThinData;

use crate::{
    domain::FavoritesStore,
    repositories::{
        ApplicationRepositoryStorage, CatRepositoryStorage, KeyValueStorage,
        ShelterRepositoryStorage, UserRoleRepositoryStorage,
    },
    services::{AdminEditor, AdoptionService, AuthProviderStorage, AuthSession, CatalogService},
};

#[derive(Clone, Debug)]
pub struct AppState {
    pub cat_repository: Arc<CatRepositoryStorage>,
    pub application_repository: Arc<ApplicationRepositoryStorage>,
    pub shelter_repository: Arc<ShelterRepositoryStorage>,
    pub user_role_repository: Arc<UserRoleRepositoryStorage>,
    pub key_value_store: Arc<KeyValueStorage>,
    pub auth_provider: Arc<AuthProviderStorage>,
    /// Upper bound on waiting for a session's roles before the staff gate answers.
    pub role_resolution_timeout: Duration,
}

pub type DefaultAppState = AppState;
pub type ThinDataAppState = ThinData<DefaultAppState>;

impl AppState {
    pub fn cat_repository(&self) -> Arc<CatRepositoryStorage> {
        self.cat_repository.clone()
    }

    pub fn application_repository(&self) -> Arc<ApplicationRepositoryStorage> {
        self.application_repository.clone()
    }

    pub fn shelter_repository(&self) -> Arc<ShelterRepositoryStorage> {
        self.shelter_repository.clone()
    }

    pub fn user_role_repository(&self) -> Arc<UserRoleRepositoryStorage> {
        self.user_role_repository.clone()
    }

    pub fn auth_provider(&self) -> Arc<AuthProviderStorage> {
        self.auth_provider.clone()
    }

    pub fn favorites_store(&self) -> FavoritesStore<KeyValueStorage> {
        FavoritesStore::new(self.key_value_store.clone())
    }

    pub fn catalog_service(&self) -> CatalogService<CatRepositoryStorage, KeyValueStorage> {
        CatalogService::new(self.cat_repository(), self.favorites_store())
    }

    pub fn adoption_service(
        &self,
    ) -> AdoptionService<CatRepositoryStorage, ApplicationRepositoryStorage> {
        AdoptionService::new(self.cat_repository(), self.application_repository())
    }

    pub fn admin_editor(&self) -> AdminEditor<CatRepositoryStorage, ShelterRepositoryStorage> {
        AdminEditor::new(self.cat_repository(), self.shelter_repository())
    }

    /// Starts tracking the session behind `access_token`.
    pub fn auth_session(&self, access_token: String) -> AuthSession<AuthProviderStorage> {
        AuthSession::start(
            self.auth_provider(),
            self.user_role_repository(),
            access_token,
        )
    }
}
