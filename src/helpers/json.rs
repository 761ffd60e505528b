use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// Envelope shared by every endpoint:
/// `{"success": true, "data": ...}` or `{"success": false, "error": "..."}`.
#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct JsonResponseBuilder<T> {
    data: Option<T>,
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_item(mut self, item: T) -> Self {
        self.data = Some(item);
        self
    }

    fn to_response(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(JsonResponse {
            success: true,
            data: self.data,
            error: None,
        })
    }

    pub fn ok(self) -> HttpResponse {
        self.to_response(StatusCode::OK)
    }

    pub fn created(self) -> HttpResponse {
        self.to_response(StatusCode::CREATED)
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder { data: None }
    }
}

impl JsonResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        JsonResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
        HttpResponse::build(status).json(Self::failure(message))
    }

    fn to_error(status: StatusCode, message: impl Into<String>) -> actix_web::Error {
        let message = message.into();
        let response = Self::error_response(status, message.clone());
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request(message: impl Into<String>) -> actix_web::Error {
        Self::to_error(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> actix_web::Error {
        Self::to_error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> actix_web::Error {
        Self::to_error(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}
