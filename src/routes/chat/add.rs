use crate::db::ChatLogStore;
use crate::forms;
use crate::helpers::JsonResponse;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use std::sync::Arc;

/// POST /api/chat/logs
/// Appends one message to a session's log and returns the stored row.
#[tracing::instrument(
    name = "Save chat log.",
    skip(form, store),
    fields(session_id = %form.session_id, is_user = form.is_user)
)]
#[post("/logs")]
pub async fn item(
    form: web::Json<forms::ChatLogForm>,
    store: web::Data<Arc<dyn ChatLogStore>>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    store
        .insert(form.into_inner().into())
        .await
        .map(|entry| {
            tracing::info!("Chat log {} has been saved", entry.id);
            JsonResponse::build().set_item(entry).created()
        })
        .map_err(|err| {
            tracing::error!("Error saving chat log: {:?}", err);
            JsonResponse::internal_server_error("Failed to save chat log")
        })
}
