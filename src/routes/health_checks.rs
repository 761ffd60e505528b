use crate::db::ChatLogStore;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
}

#[tracing::instrument(name = "Health check.", skip(store))]
#[get("")]
pub async fn health_check(store: web::Data<Arc<dyn ChatLogStore>>) -> Result<impl Responder> {
    store
        .ping()
        .await
        .map(|_| {
            JsonResponse::build()
                .set_item(HealthStatus {
                    status: "healthy",
                    version: env!("CARGO_PKG_VERSION"),
                    storage: "healthy",
                })
                .ok()
        })
        .map_err(|err| {
            tracing::warn!("Storage ping failed: {:?}", err);
            JsonResponse::service_unavailable("Storage unavailable")
        })
}
