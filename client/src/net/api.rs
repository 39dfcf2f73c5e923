//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since pages only fetch after
//! hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, String>` instead of panics so a failed fetch
//! renders an inline notice rather than breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{InformationBoard, MenuCatalog, Recipe};

pub const MENU_ENDPOINT: &str = "/api/menu";
pub const RECIPES_ENDPOINT: &str = "/api/recipes";
pub const INFORMATION_ENDPOINT: &str = "/api/information";

/// Human-readable message for a non-OK response. Uses the server's
/// `{ "error": ... }` body when present.
#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(endpoint: &str, status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => format!("{endpoint} failed ({status}): {}", parsed.error),
        Err(_) => format!("{endpoint} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(request_failed_message(endpoint, status, &body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch categories, items and tags from `/api/menu`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_menu() -> Result<MenuCatalog, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(MENU_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch every recipe from `/api/recipes`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_recipes() -> Result<Vec<Recipe>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(RECIPES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the information board from `/api/information`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_information() -> Result<InformationBoard, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(INFORMATION_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
