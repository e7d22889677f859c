//! Post models

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::FrontMatter;
use crate::error::BlogError;
use crate::helpers::parse_post_date;

/// Metadata exported by every post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMetadata {
    /// Post title
    pub title: String,

    /// Publication date as written in the front matter
    pub date: String,

    /// Remaining front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl PostMetadata {
    /// Build metadata from front matter, requiring `title` and `date`
    pub fn from_front_matter(fm: FrontMatter, path: &str) -> Result<Self, BlogError> {
        let title = fm.title.ok_or_else(|| BlogError::MissingMetadata {
            path: path.to_string(),
            field: "title",
        })?;
        let date = fm.date.ok_or_else(|| BlogError::MissingMetadata {
            path: path.to_string(),
            field: "date",
        })?;

        Ok(Self {
            title,
            date,
            extra: fm.extra,
        })
    }

    /// Parse the publication date into an instant
    pub fn published_at(&self, path: &str) -> Result<DateTime<FixedOffset>, BlogError> {
        parse_post_date(&self.date).ok_or_else(|| BlogError::InvalidDate {
            path: path.to_string(),
            date: self.date.clone(),
        })
    }
}

/// A post as served by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Route-relative path, e.g. `/my-post`
    pub path: String,

    pub metadata: PostMetadata,

    /// Pre-rendered body
    pub html: String,
}

impl PostRecord {
    pub fn published_at(&self) -> Result<DateTime<FixedOffset>, BlogError> {
        self.metadata.published_at(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_matter(title: Option<&str>, date: Option<&str>) -> FrontMatter {
        FrontMatter {
            title: title.map(String::from),
            date: date.map(String::from),
            extra: IndexMap::new(),
        }
    }

    #[test]
    fn test_metadata_requires_title() {
        let err = PostMetadata::from_front_matter(front_matter(None, Some("2024-01-01")), "/a")
            .unwrap_err();
        assert!(matches!(err, BlogError::MissingMetadata { field: "title", .. }));
    }

    #[test]
    fn test_metadata_requires_date() {
        let err =
            PostMetadata::from_front_matter(front_matter(Some("A"), None), "/a").unwrap_err();
        assert!(matches!(err, BlogError::MissingMetadata { field: "date", .. }));
    }

    #[test]
    fn test_record_serializes_flat_metadata() {
        let mut extra = IndexMap::new();
        extra.insert(
            "summary".to_string(),
            serde_yaml::Value::String("short".to_string()),
        );
        let record = PostRecord {
            path: "/hello".to_string(),
            metadata: PostMetadata {
                title: "Hello".to_string(),
                date: "2024-01-01".to_string(),
                extra,
            },
            html: "<p>hi</p>".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["path"], "/hello");
        assert_eq!(value["metadata"]["title"], "Hello");
        assert_eq!(value["metadata"]["summary"], "short");
        assert_eq!(value["html"], "<p>hi</p>");
    }

    #[test]
    fn test_invalid_date_is_error() {
        let record = PostRecord {
            path: "/bad".to_string(),
            metadata: PostMetadata {
                title: "Bad".to_string(),
                date: "not a date".to_string(),
                extra: IndexMap::new(),
            },
            html: String::new(),
        };
        assert!(matches!(
            record.published_at(),
            Err(BlogError::InvalidDate { .. })
        ));
    }
}
