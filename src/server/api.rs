//! JSON API handlers

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::cookies::{self, CookieBag};
use super::AppState;
use crate::content::{fetch_sorted_posts, PostRecord};
use crate::error::BlogError;

/// Body of `POST /api/theme`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThemeRequest {
    #[serde(rename = "darkMode")]
    pub dark_mode: bool,
}

/// Decode a JSON body, mapping any failure to a client error
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, BlogError> {
    serde_json::from_slice(body).map_err(BlogError::MalformedBody)
}

/// `GET /api/posts`: every post, newest first
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PostRecord>>, BlogError> {
    let posts = fetch_sorted_posts(&state.registry, Arc::clone(&state.renderer)).await?;
    Ok(Json(posts))
}

/// `GET /api/theme`: the dark-mode flag, false when unset
pub async fn get_theme(State(state): State<Arc<AppState>>, jar: CookieJar) -> Json<bool> {
    Json(cookies::read_flag(&jar, &state.config.theme_cookie))
}

/// `POST /api/theme`: store the flag and echo it back
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<bool>), BlogError> {
    let ThemeRequest { dark_mode } = parse_body(&body)?;

    let jar = jar.add(cookies::scoped_cookie(
        state.config.theme_cookie.clone(),
        dark_mode.to_string(),
        &state.config.cookie_path,
    ));

    tracing::debug!("Dark mode set to {}", dark_mode);
    Ok((jar, Json(dark_mode)))
}

/// `POST /api/cookies`: set one cookie per key of a flat JSON object
pub async fn set_cookies(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Bytes,
) -> Result<CookieJar, BlogError> {
    let bag: CookieBag = parse_body(&body)?;
    Ok(cookies::add_bag(jar, bag, &state.config.cookie_path))
}
