use chrono::{DateTime, FixedOffset};
use models::errors::FieldErrors;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pagination::PageMeta;

/// JSON projection of a stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<models::post::Model> for PostView {
    fn from(m: models::post::Model) -> Self {
        Self { id: m.id, title: m.title, created_at: m.created_at, updated_at: m.updated_at }
    }
}

/// Create/update body. `title` stays untyped so that a number or an object
/// is reported as a field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub title: Option<Value>,
}

impl PostInput {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: Some(Value::String(title.into())) }
    }

    /// `Ok(None)` for a missing or `null` title.
    pub fn title_str(&self) -> Result<Option<&str>, FieldErrors> {
        match &self.title {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(FieldErrors::single("title", "The title must be a string.")),
        }
    }
}

/// Body of `GET /api/posts`; `meta` only when paginated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostList {
    pub data: Vec<PostView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}
