use std::sync::Arc;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::web::{log, Error, REQUEST_ID_HEADER};

/// Turns a `web::Error` stashed in the response extensions into the client error body
/// and logs every request.
pub async fn response_mapper(req_method: Method, uri: Uri, resp: Response) -> Response {
    let req_id_header = resp.headers().get(REQUEST_ID_HEADER).cloned();
    let req_id = req_id_header
        .as_ref()
        .and_then(|hv| hv.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let web_error: Option<&Error> = resp.extensions().get::<Arc<Error>>().map(|er| er.as_ref());
    let client_status_and_error = web_error.map(Error::status_code_and_client_error);

    let err_resp = client_status_and_error.as_ref().map(|(status, cl_err)| {
        let client_error_body = json!({
            "detail": cl_err.to_string(),
            "error": {
                "type": cl_err.as_ref(),
                "req_id": req_id,
            }
        });

        let mut err_resp = (*status, Json(client_error_body)).into_response();
        // The new response lost the propagated request id.
        if let Some(hv) = req_id_header.clone() {
            err_resp.headers_mut().insert(REQUEST_ID_HEADER, hv);
        }
        err_resp
    });

    log::log_request(
        &req_id,
        &req_method,
        &uri,
        resp.status(),
        web_error,
        client_status_and_error.as_ref(),
    );

    err_resp.unwrap_or(resp)
}
