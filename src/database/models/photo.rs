use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;

use super::user::PublicUser;

/// Owned resource. JSON field names follow the original wire format of the
/// service (camelCase timestamps, `UserId` for the owner reference).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub image_url: String,
    #[serde(rename = "UserId")]
    pub user_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Single-photo view with the owning user expanded. This view drops the bare
/// `UserId` column in favor of the nested `User` object.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoWithOwner {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub image_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "User")]
    pub user: PublicUser,
}

/// Validated photo ready for persistence. The owner id comes from the
/// authenticated identity, never from client input.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub title: String,
    pub caption: String,
    pub image_url: String,
    pub user_id: i64,
}

/// Raw creation payload. Unknown fields (including any client-supplied
/// caption or owner id) are dropped at deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct PhotoInput {
    pub title: Option<String>,
    pub image_url: Option<String>,
}

type Predicate = fn(&PhotoInput) -> bool;

/// Field rules in declaration order: title rules before image URL rules.
/// Every rule is evaluated independently; violations are collected, not
/// short-circuited.
const RULES: &[(Predicate, &str)] = &[
    (|input| input.title.is_none(), "Title cannot be omitted"),
    (
        |input| matches!(input.title.as_deref(), Some("")),
        "Title cannot be an empty string",
    ),
    (|input| input.image_url.is_none(), "Image URL cannot be omitted"),
    (
        |input| matches!(input.image_url.as_deref(), Some("")),
        "Image URL cannot be an empty string",
    ),
    (
        |input| matches!(input.image_url.as_deref(), Some(u) if !u.is_empty() && !is_url(u)),
        "Wrong URL format",
    ),
];

/// URL syntax check: absolute URL with a host.
fn is_url(value: &str) -> bool {
    Url::parse(value).map(|url| url.has_host()).unwrap_or(false)
}

impl PhotoInput {
    /// Evaluate every rule and collect the violation messages in rule order.
    pub fn violations(&self) -> Vec<String> {
        RULES
            .iter()
            .filter(|(violated, _)| violated(self))
            .map(|(_, message)| message.to_string())
            .collect()
    }

    /// Turn the payload into a persistable photo owned by `user_id`, or the
    /// full list of violations. The caption is always derived here; any
    /// client-supplied caption never survives deserialization.
    pub fn validate(self, user_id: i64) -> Result<NewPhoto, Vec<String>> {
        let violations = self.violations();
        if !violations.is_empty() {
            return Err(violations);
        }

        // Both fields are present and non-empty once every rule has passed.
        let title = self.title.unwrap_or_default();
        let image_url = self.image_url.unwrap_or_default();
        let caption = derived_caption(&title, &image_url);

        Ok(NewPhoto {
            title,
            caption,
            image_url,
            user_id,
        })
    }
}

/// Caption derivation: upper-cased title, a single space, the image URL.
pub fn derived_caption(title: &str, image_url: &str) -> String {
    format!("{} {}", title.to_uppercase(), image_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: Option<&str>, image_url: Option<&str>) -> PhotoInput {
        PhotoInput {
            title: title.map(String::from),
            image_url: image_url.map(String::from),
        }
    }

    #[test]
    fn valid_input_derives_caption_and_stamps_owner() {
        let photo = input(Some("Buat photo baru"), Some("http://image.com/createphoto.png"))
            .validate(1)
            .unwrap();

        assert_eq!(photo.title, "Buat photo baru");
        assert_eq!(photo.caption, "BUAT PHOTO BARU http://image.com/createphoto.png");
        assert_eq!(photo.image_url, "http://image.com/createphoto.png");
        assert_eq!(photo.user_id, 1);
    }

    #[test]
    fn omitted_title() {
        let violations = input(None, Some("http://image.com/a.png")).violations();
        assert_eq!(violations, vec!["Title cannot be omitted"]);
    }

    #[test]
    fn empty_title() {
        let violations = input(Some(""), Some("http://image.com/a.png")).violations();
        assert_eq!(violations, vec!["Title cannot be an empty string"]);
    }

    #[test]
    fn omitted_image_url() {
        let violations = input(Some("a title"), None).violations();
        assert_eq!(violations, vec!["Image URL cannot be omitted"]);
    }

    #[test]
    fn empty_image_url() {
        let violations = input(Some("a title"), Some("")).violations();
        assert_eq!(violations, vec!["Image URL cannot be an empty string"]);
    }

    #[test]
    fn malformed_image_url() {
        let violations = input(Some("a title"), Some("wrongformatimage")).violations();
        assert_eq!(violations, vec!["Wrong URL format"]);
    }

    #[test]
    fn url_without_host_is_malformed() {
        let violations = input(Some("a title"), Some("mailto:luki@mail.com")).violations();
        assert_eq!(violations, vec!["Wrong URL format"]);
    }

    #[test]
    fn violations_accumulate_in_rule_order() {
        let violations = PhotoInput::default().violations();
        assert_eq!(
            violations,
            vec!["Title cannot be omitted", "Image URL cannot be omitted"]
        );

        let violations = input(Some(""), Some("")).violations();
        assert_eq!(
            violations,
            vec![
                "Title cannot be an empty string",
                "Image URL cannot be an empty string"
            ]
        );
    }

    #[test]
    fn unknown_payload_fields_are_dropped() {
        let parsed: PhotoInput = serde_json::from_value(serde_json::json!({
            "title": "a title",
            "image_url": "http://image.com/a.png",
            "caption": "smuggled caption",
            "UserId": 99
        }))
        .unwrap();

        let photo = parsed.validate(1).unwrap();
        assert_eq!(photo.caption, "A TITLE http://image.com/a.png");
        assert_eq!(photo.user_id, 1);
    }
}
