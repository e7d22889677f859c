//! HTTP server: JSON API, cookie-backed preferences, and HTML pages

pub mod api;
pub mod cookies;
pub mod pages;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::CookieJar;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{MarkdownRenderer, PostRegistry};
use crate::preferences::PreferenceStore;
use crate::templates::layout::{self, LayoutData};
use crate::Blog;

/// State shared by all handlers
pub struct AppState {
    pub config: SiteConfig,
    pub registry: PostRegistry,
    pub renderer: Arc<MarkdownRenderer>,
}

impl AppState {
    /// Resolve the post registry and build the renderer for a site
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            config: blog.config.clone(),
            registry: blog.registry()?,
            renderer: Arc::new(blog.renderer()),
        })
    }

    /// Layout data for a request, read from its cookies
    pub fn layout_data(&self, jar: &CookieJar) -> LayoutData {
        LayoutData {
            dark_mode: cookies::read_flag(jar, &self.config.theme_cookie),
        }
    }

    /// Preference store for rendering one page, seeded by the layout hook
    pub fn preferences_for(&self, jar: &CookieJar) -> PreferenceStore {
        let store = PreferenceStore::default();
        layout::load(&store, &self.layout_data(jar));
        store
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/posts/:post", get(pages::post))
        .route("/api/posts", get(api::list_posts))
        .route("/api/theme", get(api::get_theme).post(api::set_theme))
        .route("/api/cookies", post(api::set_cookies))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState::new(blog)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
