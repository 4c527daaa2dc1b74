use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.chars().any(|c| c.is_whitespace() || c == '/' || c == '"') {
            return Err(DomainError::Validation(format!("invalid slug `{value}`")));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_repository_uids() {
        let slug = ArticleSlug::new("como-utilizar-hooks").unwrap();
        assert_eq!(slug.as_str(), "como-utilizar-hooks");
        assert_eq!(slug.to_string(), "como-utilizar-hooks");
    }

    #[test]
    fn rejects_blank_and_path_like_values() {
        assert!(ArticleSlug::new("").is_err());
        assert!(ArticleSlug::new("  ").is_err());
        assert!(ArticleSlug::new("a/b").is_err());
        assert!(ArticleSlug::new("with space").is_err());
    }
}
