//! This module defines the HTTP route for submitting adoption applications.

use crate::{
    api::controllers::application,
    models::{AdoptionApplicationRequest, DefaultAppState},
};
use actix_web::{post, web, Responder};

/// Submits an adoption application for the given cat.
#[post("/cats/{cat_id}/applications")]
async fn submit_application(
    cat_id: web::Path<String>,
    request: web::Json<AdoptionApplicationRequest>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    application::submit_application(cat_id.into_inner(), request.into_inner(), data).await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_application);
}
