//! Post aggregation for the list endpoint

use std::sync::Arc;

use tokio::task::JoinSet;

use super::{MarkdownRenderer, PostRecord, PostRegistry};
use crate::error::BlogError;

/// Load and render every registered post
///
/// Sources are loaded concurrently on the blocking pool, so the returned
/// order is unspecified. The first failing source aborts the whole
/// aggregation; the remaining loads are dropped with the set.
pub async fn fetch_posts(
    registry: &PostRegistry,
    renderer: Arc<MarkdownRenderer>,
) -> Result<Vec<PostRecord>, BlogError> {
    let mut tasks = JoinSet::new();

    for source in registry.sources().cloned() {
        let renderer = Arc::clone(&renderer);
        tasks.spawn_blocking(move || source.load_record(&renderer));
    }

    let mut posts = Vec::with_capacity(registry.len());
    while let Some(joined) = tasks.join_next().await {
        posts.push(joined??);
    }

    tracing::debug!("Aggregated {} posts", posts.len());
    Ok(posts)
}

/// Sort posts newest first
///
/// Every date is parsed before comparing; a date that cannot be parsed
/// fails the sort. Posts with the same instant are ordered by path.
pub fn sort_by_date_desc(posts: Vec<PostRecord>) -> Result<Vec<PostRecord>, BlogError> {
    let mut keyed = posts
        .into_iter()
        .map(|post| Ok((post.published_at()?, post)))
        .collect::<Result<Vec<_>, BlogError>>()?;

    keyed.sort_by(|(a_date, a), (b_date, b)| b_date.cmp(a_date).then_with(|| a.path.cmp(&b.path)));

    Ok(keyed.into_iter().map(|(_, post)| post).collect())
}

/// Fetch all posts and sort them newest first
pub async fn fetch_sorted_posts(
    registry: &PostRegistry,
    renderer: Arc<MarkdownRenderer>,
) -> Result<Vec<PostRecord>, BlogError> {
    let posts = fetch_posts(registry, renderer).await?;
    sort_by_date_desc(posts)
}
