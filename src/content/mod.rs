//! Content module - post sources, front matter, and markdown rendering

pub mod aggregate;
mod frontmatter;
mod markdown;
pub mod page;
mod post;
pub mod registry;

pub use aggregate::{fetch_posts, fetch_sorted_posts, sort_by_date_desc};
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use page::{load_post, PostContent, PostPage, Render};
pub use post::{PostMetadata, PostRecord};
pub use registry::{PostRegistry, PostSource};
