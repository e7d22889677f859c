//! List posts

use anyhow::Result;
use std::sync::Arc;

use crate::content::{fetch_sorted_posts, PostRecord};
use crate::helpers::format_date;
use crate::Blog;

/// Load every post and print it, newest first
pub async fn run(blog: &Blog) -> Result<()> {
    let registry = blog.registry()?;
    let posts = fetch_sorted_posts(&registry, Arc::new(blog.renderer())).await?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {}", summary_line(post));
    }

    Ok(())
}

fn summary_line(post: &PostRecord) -> String {
    format!(
        "{} - {} [{}]",
        format_date(&post.metadata.date, "%Y-%m-%d"),
        post.metadata.title,
        post.path
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostMetadata;
    use indexmap::IndexMap;

    #[test]
    fn test_summary_line() {
        let post = PostRecord {
            path: "/hello".to_string(),
            metadata: PostMetadata {
                title: "Hello".to_string(),
                date: "2024-01-15T10:30:00Z".to_string(),
                extra: IndexMap::new(),
            },
            html: String::new(),
        };
        assert_eq!(summary_line(&post), "2024-01-15 - Hello [/hello]");
    }
}
