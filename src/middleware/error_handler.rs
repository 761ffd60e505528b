use crate::helpers::JsonResponse;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{web, Result};
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

pub const GENERIC_ERROR: &str = "Something went wrong!";

/// Payload errors (malformed JSON, missing or mistyped fields) become a 400 envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {}", err);
        tracing::debug!("{}", message);
        JsonResponse::bad_request(message)
    })
}

/// Rewrites any 500 that did not already carry our JSON envelope.
pub fn last_resort<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_500)
}

fn render_500<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    if is_json(&res) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    match res.response().error() {
        Some(err) => tracing::error!(
            error = ?err,
            "Unhandled error while serving {} {}",
            res.request().method(),
            res.request().path()
        ),
        None => tracing::error!(
            "Unhandled 500 while serving {} {}",
            res.request().method(),
            res.request().path()
        ),
    }

    let body = serde_json::to_string(&JsonResponse::failure(GENERIC_ERROR))?;
    let (req, res) = res.into_parts();
    let mut res = res.set_body(body);
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}

/// Turns a panicking handler into the generic 500 envelope instead of a dropped connection.
/// Use with `App::wrap_fn`.
pub fn catch_panic<S, B>(
    req: ServiceRequest,
    srv: &S,
) -> impl Future<Output = Result<ServiceResponse<EitherBody<B>>>>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    let http_req = req.request().clone();
    let fut = srv.call(req);

    async move {
        match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(res) => res.map(ServiceResponse::map_into_left_body),
            Err(panic) => {
                tracing::error!(
                    panic = panic_message(&*panic),
                    "Handler panicked while serving {} {}",
                    http_req.method(),
                    http_req.path()
                );
                let res = JsonResponse::error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR,
                );
                Ok(ServiceResponse::new(http_req, res).map_into_right_body())
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

fn is_json<B>(res: &ServiceResponse<B>) -> bool {
    res.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{error, test, App, HttpResponse};

    async fn broken() -> Result<HttpResponse> {
        Err(error::ErrorInternalServerError("connection reset by peer"))
    }

    async fn handled() -> Result<HttpResponse> {
        Err(JsonResponse::internal_server_error("Failed to save chat log"))
    }

    #[actix_web::test]
    async fn unhandled_error_is_replaced_with_generic_envelope() {
        let app = test::init_service(
            App::new()
                .wrap(last_resort())
                .route("/broken", web::get().to(broken)),
        )
        .await;

        let req = test::TestRequest::get().uri("/broken").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], GENERIC_ERROR);
    }

    async fn panicking() -> Result<HttpResponse> {
        panic!("row decoder blew up");
    }

    #[actix_web::test]
    async fn panicking_handler_gets_generic_envelope() {
        let app = test::init_service(
            App::new()
                .wrap(last_resort())
                .wrap_fn(|req, srv| catch_panic(req, srv))
                .route("/panicking", web::get().to(panicking)),
        )
        .await;

        let req = test::TestRequest::get().uri("/panicking").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], GENERIC_ERROR);
    }

    #[actix_web::test]
    async fn handled_error_passes_through() {
        let app = test::init_service(
            App::new()
                .wrap(last_resort())
                .route("/handled", web::get().to(handled)),
        )
        .await;

        let req = test::TestRequest::get().uri("/handled").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Failed to save chat log");
    }
}
