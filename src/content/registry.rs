//! Post registry - resolves the set of post sources once at startup

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{FrontMatter, MarkdownRenderer, PostMetadata, PostRecord};
use crate::error::BlogError;

/// One markdown file under the posts directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSource {
    /// File name without `.md`
    pub slug: String,
    /// Full path on disk
    pub file: PathBuf,
    /// Route-relative path (`/<slug>`)
    pub path: String,
}

/// A source after its file has been read and its front matter split off
#[derive(Debug, Clone)]
pub struct LoadedPost {
    pub metadata: PostMetadata,
    /// Markdown body, not yet rendered
    pub body: String,
}

impl PostSource {
    fn new(root: &Path, file: PathBuf) -> Option<Self> {
        let path = route_path(root, &file)?;
        let slug = path.trim_start_matches('/').to_string();
        if slug.starts_with('.') {
            return None;
        }
        Some(Self { slug, file, path })
    }

    /// Read the file and extract metadata and body
    pub fn load(&self) -> Result<LoadedPost, BlogError> {
        let content = fs::read_to_string(&self.file).map_err(|source| BlogError::Io {
            path: self.file.display().to_string(),
            source,
        })?;

        let (fm, body) = FrontMatter::parse(&content).map_err(|source| BlogError::FrontMatter {
            path: self.path.clone(),
            source,
        })?;
        let metadata = PostMetadata::from_front_matter(fm, &self.path)?;

        Ok(LoadedPost {
            metadata,
            body: body.to_string(),
        })
    }

    /// Load and pre-render the post for listing
    pub fn load_record(&self, renderer: &MarkdownRenderer) -> Result<PostRecord, BlogError> {
        let loaded = self.load()?;
        Ok(PostRecord {
            path: self.path.clone(),
            metadata: loaded.metadata,
            html: renderer.render(&loaded.body),
        })
    }
}

/// Strip the posts root and the `.md` suffix from a source file path
///
/// `posts/my-post.md` under root `posts` becomes `/my-post`.
pub fn route_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let relative = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let stem = relative.strip_suffix(".md")?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("/{}", stem))
}

/// Mapping from slug to post source
#[derive(Debug, Clone, Default)]
pub struct PostRegistry {
    root: PathBuf,
    sources: BTreeMap<String, PostSource>,
}

impl PostRegistry {
    /// Scan `posts_dir` for `*.md` files
    ///
    /// A missing directory yields an empty registry.
    pub fn scan<P: AsRef<Path>>(posts_dir: P) -> Result<Self> {
        let root = posts_dir.as_ref().to_path_buf();
        let mut sources = BTreeMap::new();

        if !root.is_dir() {
            tracing::warn!("Posts directory {:?} does not exist", root);
            return Ok(Self { root, sources });
        }

        let pattern = glob::Pattern::escape(&root.to_string_lossy());
        let pattern = format!("{}/*.md", pattern);

        // Dotfiles are never posts; their slugs would not resolve in `get`
        let options = glob::MatchOptions {
            require_literal_leading_dot: true,
            ..Default::default()
        };

        let entries =
            glob::glob_with(&pattern, options).context("Invalid posts directory pattern")?;
        for entry in entries {
            let file = entry.context("Failed to read posts directory entry")?;
            if !file.is_file() {
                continue;
            }
            match PostSource::new(&root, file) {
                Some(source) => {
                    tracing::debug!("Registered post {} from {:?}", source.slug, source.file);
                    sources.insert(source.slug.clone(), source);
                }
                None => tracing::warn!("Skipping post outside {:?}", root),
            }
        }

        tracing::info!("Found {} posts in {:?}", sources.len(), root);
        Ok(Self { root, sources })
    }

    /// Directory the registry was scanned from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a post by slug
    ///
    /// Slugs carrying path separators or dot segments never match.
    pub fn get(&self, slug: &str) -> Option<&PostSource> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.starts_with('.') {
            return None;
        }
        self.sources.get(slug)
    }

    pub fn sources(&self) -> impl Iterator<Item = &PostSource> {
        self.sources.values()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_route_path() {
        let root = Path::new("/site/posts");
        assert_eq!(
            route_path(root, Path::new("/site/posts/my-post.md")),
            Some("/my-post".to_string())
        );
        assert_eq!(route_path(root, Path::new("/site/posts/notes.txt")), None);
        assert_eq!(route_path(root, Path::new("/elsewhere/a.md")), None);
    }

    #[test]
    fn test_scan_registers_markdown_only() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "a.md", "---\ntitle: A\ndate: 2024-01-01\n---\n");
        write_post(dir.path(), "b.md", "---\ntitle: B\ndate: 2024-06-01\n---\n");
        write_post(dir.path(), "readme.txt", "not a post");
        fs::create_dir(dir.path().join("drafts")).unwrap();
        write_post(&dir.path().join("drafts"), "c.md", "---\ntitle: C\n---\n");

        let registry = PostRegistry::scan(dir.path()).unwrap();
        assert_eq!(registry.len(), 2);
        let slugs: Vec<_> = registry.sources().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
        assert_eq!(registry.get("b").unwrap().path, "/b");
    }

    #[test]
    fn test_scan_skips_dotfiles() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "visible.md", "---\ntitle: V\ndate: 2024-01-01\n---\n");
        write_post(dir.path(), ".hidden.md", "---\ntitle: H\ndate: 2024-01-01\n---\n");

        let registry = PostRegistry::scan(dir.path()).unwrap();
        let slugs: Vec<_> = registry.sources().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["visible"]);
        assert!(registry.get(".hidden").is_none());
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let registry = PostRegistry::scan(dir.path().join("nope")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_get_rejects_traversal() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "a.md", "---\ntitle: A\ndate: 2024-01-01\n---\n");
        let registry = PostRegistry::scan(dir.path()).unwrap();

        assert!(registry.get("a").is_some());
        assert!(registry.get("../a").is_none());
        assert!(registry.get("..").is_none());
        assert!(registry.get("").is_none());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_load_record_renders_html() {
        let dir = TempDir::new().unwrap();
        write_post(
            dir.path(),
            "hello.md",
            "---\ntitle: Hello\ndate: 2024-01-01\n---\n\nSome *text*.\n",
        );
        let registry = PostRegistry::scan(dir.path()).unwrap();
        let record = registry
            .get("hello")
            .unwrap()
            .load_record(&MarkdownRenderer::new())
            .unwrap();

        assert_eq!(record.path, "/hello");
        assert_eq!(record.metadata.title, "Hello");
        assert!(record.html.contains("<em>text</em>"));
    }

    #[test]
    fn test_load_without_frontmatter_fails() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "bare.md", "# No metadata here\n");
        let registry = PostRegistry::scan(dir.path()).unwrap();
        let err = registry.get("bare").unwrap().load().unwrap_err();
        assert!(matches!(err, BlogError::MissingMetadata { field: "title", .. }));
    }
}
