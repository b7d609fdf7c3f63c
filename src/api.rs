//! Backend API Client
//!
//! Fetch wrappers for the product endpoints. Everything crossing this
//! boundary is typed: payloads as [`ItemInput`], failures as [`ApiError`].

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{Item, ItemInput};

/// Base URL of the product API
const API_BASE: &str = "http://localhost:8000/tienda/api/v1/tareas";

/// Failures reported by the data access boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no se pudo contactar al servidor: {0}")]
    Network(String),
    #[error("error del servidor (HTTP {0})")]
    Server(u16),
    #[error("el servidor rechazó la petición (HTTP {0})")]
    Validation(u16),
    #[error("el registro no existe")]
    NotFound,
    #[error("respuesta inválida del servidor: {0}")]
    Decode(String),
}

pub async fn list_items() -> Result<Vec<Item>, ApiError> {
    let resp = request("GET", &format!("{API_BASE}/"), None).await?;
    decode_json(resp).await
}

pub async fn create_item(input: &ItemInput) -> Result<Item, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = request("POST", &format!("{API_BASE}/"), Some(&body)).await?;
    decode_json(resp).await
}

pub async fn delete_item(id: u32) -> Result<(), ApiError> {
    request("DELETE", &format!("{API_BASE}/{id}/"), None).await?;
    Ok(())
}

/// Issue one request and map non-2xx statuses into [`ApiError`]
async fn request(method: &str, url: &str, body: Option<&str>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        let headers = Headers::new().map_err(js_error)?;
        headers.append("Content-Type", "application/json").map_err(js_error)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window =
        web_sys::window().ok_or_else(|| ApiError::Network("sin contexto de navegador".to_string()))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| ApiError::Decode("la respuesta no es HTTP".to_string()))?;

    if resp.ok() {
        Ok(resp)
    } else {
        Err(status_error(resp.status()))
    }
}

async fn decode_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let promise: js_sys::Promise = resp.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Error for a non-2xx response status
fn status_error(status: u16) -> ApiError {
    match status {
        404 => ApiError::NotFound,
        400..=499 => ApiError::Validation(status),
        _ => ApiError::Server(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_its_own_error() {
        assert_eq!(status_error(404), ApiError::NotFound);
    }

    #[test]
    fn client_errors_map_to_validation() {
        assert_eq!(status_error(400), ApiError::Validation(400));
        assert_eq!(status_error(422), ApiError::Validation(422));
    }

    #[test]
    fn server_errors_map_to_server() {
        assert_eq!(status_error(500), ApiError::Server(500));
        assert_eq!(status_error(503), ApiError::Server(503));
    }
}
