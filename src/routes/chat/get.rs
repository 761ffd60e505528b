use crate::db::ChatLogStore;
use crate::helpers::JsonResponse;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// GET /api/chat/logs/{session_id}
/// Returns the session's messages oldest first; an unknown session gives an empty list.
#[tracing::instrument(name = "Get chat logs.", skip(store))]
#[get("/logs/{session_id}")]
pub async fn list(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ChatLogStore>>,
) -> Result<impl Responder> {
    let session_id = path.into_inner().0;

    store
        .list_by_session(&session_id)
        .await
        .map(|entries| JsonResponse::build().set_item(entries).ok())
        .map_err(|err| {
            tracing::error!("Error fetching chat logs: {:?}", err);
            JsonResponse::internal_server_error("Failed to fetch chat logs")
        })
}
