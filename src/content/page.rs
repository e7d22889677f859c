//! Single post loading for post pages
//!
//! Unlike the list aggregation, the body is not rendered here. The page
//! layer receives a [`PostContent`] and renders it where it embeds it.

use std::sync::Arc;

use super::{MarkdownRenderer, PostRegistry};
use crate::error::BlogError;

/// Something the page layer can turn into HTML on demand
pub trait Render {
    fn render(&self) -> String;
}

/// Markdown body of a post paired with the renderer that will compile it
#[derive(Clone)]
pub struct PostContent {
    markdown: String,
    renderer: Arc<MarkdownRenderer>,
}

impl PostContent {
    pub fn new(markdown: String, renderer: Arc<MarkdownRenderer>) -> Self {
        Self { markdown, renderer }
    }

    /// Source markdown
    pub fn markdown(&self) -> &str {
        &self.markdown
    }
}

impl Render for PostContent {
    fn render(&self) -> String {
        self.renderer.render(&self.markdown)
    }
}

impl std::fmt::Debug for PostContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostContent")
            .field("markdown", &self.markdown)
            .finish_non_exhaustive()
    }
}

/// Data handed to the post page
#[derive(Debug, Clone)]
pub struct PostPage {
    pub title: String,
    pub date: String,
    pub content: PostContent,
}

/// Resolve one post by slug
pub fn load_post(
    registry: &PostRegistry,
    renderer: Arc<MarkdownRenderer>,
    slug: &str,
) -> Result<PostPage, BlogError> {
    let source = registry
        .get(slug)
        .ok_or_else(|| BlogError::PostNotFound(slug.to_string()))?;
    let loaded = source.load()?;

    Ok(PostPage {
        title: loaded.metadata.title,
        date: loaded.metadata.date,
        content: PostContent::new(loaded.body, renderer),
    })
}
