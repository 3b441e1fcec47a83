/**
 * Authentication Types
 *
 * The token envelope returned by sign-up and sign-in.
 */

use serde::{Deserialize, Serialize};

/// Auth response
///
/// Carries only the 15-minute access token. The field stays snake_case on the
/// wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_field_name() {
        let json = serde_json::to_value(AuthResponse {
            access_token: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "access_token": "abc" }));
    }
}
