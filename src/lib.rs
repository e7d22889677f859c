//! blog-rs: a markdown blog server
//!
//! Serves a JSON list of posts rendered from a directory of markdown files,
//! HTML pages for the index and single posts, and a dark-mode preference
//! persisted through cookies.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod preferences;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::BlogError;

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the markdown posts
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Open a site directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
        })
    }

    /// Resolve the post sources
    pub fn registry(&self) -> Result<content::PostRegistry> {
        content::PostRegistry::scan(&self.posts_dir)
    }

    /// Markdown renderer configured for this site
    pub fn renderer(&self) -> content::MarkdownRenderer {
        content::MarkdownRenderer::from_config(&self.config)
    }

    /// Print the posts, newest first
    pub async fn list(&self) -> Result<()> {
        commands::list::run(self).await
    }
}
