//! Accounts, sessions, account states and user lists.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::common::string_or_number;

/// Response from `account`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Account ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// User name.
    pub username: String,
    /// Whether adult results are included.
    pub include_adult: bool,
    /// Preferred language (ISO 639-1).
    pub iso_639_1: String,
    /// Preferred country (ISO 3166-1).
    pub iso_3166_1: String,
}

/// The `rated` member of an account state: `false` or `{"value": n}`.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum RatedWire {
    Flag(bool),
    Value { value: f64 },
}

fn deserialize_rated<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RatedWire>::deserialize(deserializer)? {
        Some(RatedWire::Value { value }) => Some(value),
        Some(RatedWire::Flag(_)) | None => None,
    })
}

#[allow(clippy::ref_option)]
fn serialize_rated<S>(rated: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *rated {
        Some(value) => RatedWire::Value { value }.serialize(serializer),
        None => RatedWire::Flag(false).serialize(serializer),
    }
}

/// Rating, favorite and watchlist state of one item for the session user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountState {
    /// Item ID.
    pub id: u64,
    /// Marked as favorite.
    pub favorite: bool,
    /// The user's rating, `None` when unrated.
    #[serde(
        deserialize_with = "deserialize_rated",
        serialize_with = "serialize_rated"
    )]
    pub rated: Option<f64>,
    /// On the watchlist.
    pub watchlist: bool,
}

/// Response from `authentication/token/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenAuthorisation {
    /// Whether the token was issued.
    pub success: bool,
    /// Expiry timestamp.
    pub expires_at: String,
    /// The request token.
    pub request_token: String,
}

/// Response from `authentication/session/new` and `authentication/guest_session/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSession {
    /// Whether the session was created.
    pub success: bool,
    /// User session ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Guest session ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_session_id: Option<String>,
    /// Expiry timestamp (guest sessions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// List owned by a user (`account/{id}/lists`, `movie/{id}/lists`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserList {
    /// List ID.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// List name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Times favorited.
    pub favorite_count: u32,
    /// Number of items.
    pub item_count: u32,
    /// Language (ISO 639-1).
    pub iso_639_1: String,
    /// Item kind (e.g. "movie").
    pub list_type: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// Response from `list/{list_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListInfo {
    /// List ID.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// List name.
    pub name: String,
    /// Author user name.
    pub created_by: String,
    /// Description.
    pub description: String,
    /// Times favorited.
    pub favorite_count: u32,
    /// Number of items.
    pub item_count: u32,
    /// Language (ISO 639-1).
    pub iso_639_1: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Items; movie or TV records.
    pub items: Vec<serde_json::Value>,
}

/// Response from `list/{list_id}/item_status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItemStatus {
    /// List ID.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Whether the item is on the list.
    pub item_present: bool,
}

/// Response from `POST list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListCreated {
    /// TMDB status code.
    pub status_code: u32,
    /// Status message.
    pub status_message: String,
    /// Success flag.
    pub success: bool,
    /// ID of the new list.
    pub list_id: u64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::envelope::decode_object;

    #[test]
    fn test_account_state_rated_false() {
        // Arrange
        let json = r#"{"id":603,"favorite":true,"rated":false,"watchlist":false}"#;

        // Act
        let state: AccountState = serde_json::from_str(json).unwrap();

        // Assert
        assert!(state.favorite);
        assert!(state.rated.is_none());
    }

    #[test]
    fn test_account_state_rated_value() {
        // Arrange
        let json = r#"{"id":603,"favorite":false,"rated":{"value":8.5},"watchlist":true}"#;

        // Act
        let state: AccountState = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(state.rated, Some(8.5));
        assert!(state.watchlist);
    }

    #[test]
    fn test_account_state_round_trip_keeps_wire_shape() {
        // Arrange
        let rated = AccountState {
            id: 1,
            rated: Some(7.0),
            ..AccountState::default()
        };
        let unrated = AccountState::default();

        // Act
        let rated_json = serde_json::to_value(&rated).unwrap();
        let unrated_json = serde_json::to_value(&unrated).unwrap();

        // Assert
        assert_eq!(rated_json["rated"], serde_json::json!({"value": 7.0}));
        assert_eq!(unrated_json["rated"], serde_json::json!(false));
        assert_eq!(
            serde_json::from_value::<AccountState>(rated_json).unwrap(),
            rated
        );
        assert_eq!(
            serde_json::from_value::<AccountState>(unrated_json).unwrap(),
            unrated
        );
    }

    #[test]
    fn test_list_info_accepts_numeric_id() {
        // Arrange
        let json = r#"{"id":8291,"name":"Watch later","created_by":"me","item_count":0,"items":[]}"#;

        // Act
        let list: ListInfo = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(list.id, "8291");
        assert_eq!(list.name, "Watch later");
    }

    #[test]
    fn test_token_session_guest() {
        // Arrange
        let json = r#"{"success":true,"guest_session_id":"1ce82ec1223641636ad4a60b07de3581","expires_at":"2016-08-27 16:26:40 UTC"}"#;

        // Act
        let session: TokenSession = serde_json::from_str(json).unwrap();

        // Assert
        assert!(session.success);
        assert!(session.session_id.is_none());
        assert_eq!(
            session.guest_session_id.as_deref(),
            Some("1ce82ec1223641636ad4a60b07de3581")
        );
    }

    #[test]
    fn test_list_info_round_trip() {
        // Arrange
        let original = ListInfo {
            id: String::from("5861"),
            name: String::from("Favourites"),
            created_by: String::from("travisbell"),
            item_count: 1,
            iso_639_1: String::from("en"),
            items: vec![serde_json::json!({
                "id": 603,
                "media_type": "movie",
                "title": "The Matrix"
            })],
            ..ListInfo::default()
        };

        // Act
        let json = serde_json::to_string(&original).unwrap();
        let decoded: ListInfo = decode_object("test://list_info", &json).unwrap();

        // Assert
        assert_eq!(decoded, original);
    }
}
