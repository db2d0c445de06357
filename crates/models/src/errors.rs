use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Validation failures keyed by field name, several messages per field.
/// Serializes as `{"title": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for m in messages {
                if !first { f.write_str("; ")?; }
                write!(f, "{field}: {m}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("database error: {0}")]
    Db(String),
}

#[cfg(test)]
mod tests {
    use super::FieldErrors;

    #[test]
    fn collects_messages_per_field() {
        let mut e = FieldErrors::new();
        assert!(e.is_empty());
        e.add("title", "a");
        e.add("title", "b");
        e.add("body", "c");
        assert_eq!(e.get("title").unwrap(), ["a", "b"]);
        assert_eq!(e.get("body").unwrap(), ["c"]);
        assert!(e.get("missing").is_none());
        assert_eq!(e.to_string(), "body: c; title: a; title: b");
    }

    #[test]
    fn serializes_as_plain_map() {
        let e = FieldErrors::single("title", "The title field is required.");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json, serde_json::json!({"title": ["The title field is required."]}));
    }
}
