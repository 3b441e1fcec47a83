/**
 * Bookmark Types
 *
 * Request and response bodies for the `/bookmarks` endpoints.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{validate_optional_required, validate_required, Validate};

/// Body of `POST /bookmarks`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

impl Validate for CreateBookmarkRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validate_required(&self.title, "title")?;
        validate_required(&self.link, "link")
    }
}

/// Body of `PATCH /bookmarks/{id}`; absent fields are left untouched.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl Validate for EditBookmarkRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validate_optional_required(self.title.as_deref(), "title")?;
        validate_optional_required(self.link.as_deref(), "link")
    }
}

/// Bookmark as returned to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    /// Owner account id
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_title_and_link() {
        let request = CreateBookmarkRequest {
            title: "test title".to_string(),
            description: Some("test description".to_string()),
            link: "https://test.com".to_string(),
        };
        assert!(request.validate().is_ok());

        let missing_title = CreateBookmarkRequest {
            title: String::new(),
            ..request.clone()
        };
        assert!(missing_title.validate().is_err());

        let missing_link = CreateBookmarkRequest {
            link: String::new(),
            ..request.clone()
        };
        assert!(missing_link.validate().is_err());

        let blank_title = CreateBookmarkRequest {
            title: " ".to_string(),
            ..request
        };
        assert!(blank_title.validate().is_ok());
    }

    #[test]
    fn test_edit_allows_partial_updates() {
        assert!(EditBookmarkRequest::default().validate().is_ok());

        let request = EditBookmarkRequest {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        let request = EditBookmarkRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
