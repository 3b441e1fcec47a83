/**
 * User Profile Types
 *
 * Request and response bodies for the `/users` endpoints. `UserResponse` is the
 * only shape in which an account leaves the server; it has no credential field.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{validate_optional_email, Validate};

/// Partial profile update for `PATCH /users`.
///
/// Absent fields are left untouched.
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    /// New email address (must stay unique)
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Validate for EditUserRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validate_optional_email(self.email.as_deref())
    }
}

/// Account as returned to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_user_accepts_camel_case() {
        let request: EditUserRequest =
            serde_json::from_str(r#"{"firstName":"Kek","email":"asd@wawa.pl"}"#).unwrap();
        assert_eq!(request.first_name.as_deref(), Some("Kek"));
        assert_eq!(request.email.as_deref(), Some("asd@wawa.pl"));
        assert!(request.last_name.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_edit_user_rejects_bad_email() {
        let request = EditUserRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_has_no_hash() {
        let now = Utc::now();
        let response = UserResponse {
            id: 1,
            email: "asd@dada.com".to_string(),
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("hash").is_none());
        assert!(json.get("firstName").is_some());
    }
}
