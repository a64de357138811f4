use crate::model::HelloMessage;
use axum::{
    http::{Method, StatusCode, Uri},
    response::Json,
};
use tracing::debug;

// Method and path are only logged; the body is never extracted,
// so malformed payloads can't turn into a rejection.
pub async fn hello_world(method: Method, uri: Uri) -> (StatusCode, Json<HelloMessage>) {
    debug!(%method, path = uri.path(), "Serving hello function");

    (StatusCode::OK, Json(HelloMessage::greeting()))
}
