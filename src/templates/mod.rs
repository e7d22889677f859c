//! HTML pages for the post index and single posts

pub mod layout;

use crate::config::SiteConfig;
use crate::content::{PostPage, PostRecord, Render};
use crate::helpers::{html_escape, link_to, time_tag};
use crate::preferences::PreferenceStore;

pub use layout::LayoutData;

/// Route prefix under which single posts are served
pub const POSTS_ROUTE: &str = "/posts";

/// Index page listing posts in the order given
pub fn render_index(config: &SiteConfig, store: &PreferenceStore, posts: &[PostRecord]) -> String {
    let mut body = format!("<h1>{}</h1>\n", html_escape(&config.title));

    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    } else {
        body.push_str("<ul class=\"post-list\">\n");
        for post in posts {
            body.push_str(&format!(
                "<li>{} {}</li>\n",
                time_tag(&post.metadata.date, &config.date_format),
                link_to(
                    &format!("{}{}", POSTS_ROUTE, post.path),
                    &post.metadata.title
                )
            ));
        }
        body.push_str("</ul>\n");
    }

    layout::render(config, store, &config.title, &body)
}

/// Single post page; the post body is rendered here
pub fn render_post(config: &SiteConfig, store: &PreferenceStore, page: &PostPage) -> String {
    let body = format!(
        "<article>\n<h1>{}</h1>\n{}\n<div class=\"post-content\">\n{}</div>\n</article>\n",
        html_escape(&page.title),
        time_tag(&page.date, &config.date_format),
        page.content.render()
    );
    layout::render(config, store, &page.title, &body)
}

/// Page shown when a slug matches no post
pub fn render_not_found(config: &SiteConfig, store: &PreferenceStore, slug: &str) -> String {
    let body = format!(
        "<h1>Not found</h1>\n<p>There is no post called <code>{}</code>.</p>\n<p>{}</p>\n",
        html_escape(slug),
        link_to("/", "Back to all posts")
    );
    layout::render(config, store, "Not found", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MarkdownRenderer, PostContent, PostMetadata};
    use indexmap::IndexMap;
    use std::sync::Arc;

    fn record(path: &str, title: &str, date: &str) -> PostRecord {
        PostRecord {
            path: path.to_string(),
            metadata: PostMetadata {
                title: title.to_string(),
                date: date.to_string(),
                extra: IndexMap::new(),
            },
            html: String::new(),
        }
    }

    #[test]
    fn test_index_links_posts_in_order() {
        let config = SiteConfig::default();
        let posts = vec![
            record("/newer", "Newer", "2024-06-01"),
            record("/older", "Older & Wiser", "2024-01-01"),
        ];
        let html = render_index(&config, &PreferenceStore::default(), &posts);

        let newer = html.find(r#"href="/posts/newer""#).unwrap();
        let older = html.find(r#"href="/posts/older""#).unwrap();
        assert!(newer < older);
        assert!(html.contains("Older &amp; Wiser"));
        assert!(html.contains("June 1, 2024"));
    }

    #[test]
    fn test_index_empty() {
        let html = render_index(&SiteConfig::default(), &PreferenceStore::default(), &[]);
        assert!(html.contains("No posts yet."));
    }

    #[test]
    fn test_post_renders_content() {
        let page = PostPage {
            title: "Hello".to_string(),
            date: "2024-03-10".to_string(),
            content: PostContent::new(
                "Some **bold** text.".to_string(),
                Arc::new(MarkdownRenderer::new()),
            ),
        };
        let html = render_post(&SiteConfig::default(), &PreferenceStore::new(true), &page);
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains(r#"class="dark""#));
    }

    #[test]
    fn test_not_found_escapes_slug() {
        let html = render_not_found(
            &SiteConfig::default(),
            &PreferenceStore::default(),
            "<script>",
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<code><script>"));
    }
}
