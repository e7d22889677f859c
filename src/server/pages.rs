//! HTML page handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::AppState;
use crate::content::{fetch_sorted_posts, load_post};
use crate::error::BlogError;
use crate::templates;

/// `GET /`: index of all posts
pub async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Html<String>, BlogError> {
    let store = state.preferences_for(&jar);
    let posts = fetch_sorted_posts(&state.registry, Arc::clone(&state.renderer)).await?;
    Ok(Html(templates::render_index(&state.config, &store, &posts)))
}

/// `GET /posts/:post`: one post, rendered into the layout
pub async fn post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    jar: CookieJar,
) -> Response {
    let store = state.preferences_for(&jar);

    // Highlighting happens at render time, so render on the blocking pool too
    let task_state = Arc::clone(&state);
    let task_store = store.clone();
    let task_slug = slug.clone();
    let rendered = tokio::task::spawn_blocking(move || {
        let page = load_post(
            &task_state.registry,
            Arc::clone(&task_state.renderer),
            &task_slug,
        )?;
        Ok::<_, BlogError>(templates::render_post(&task_state.config, &task_store, &page))
    })
    .await
    .map_err(BlogError::from)
    .and_then(|result| result);

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(BlogError::PostNotFound(_)) => {
            tracing::debug!("No post for slug {:?}", slug);
            (
                StatusCode::NOT_FOUND,
                Html(templates::render_not_found(&state.config, &store, &slug)),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
