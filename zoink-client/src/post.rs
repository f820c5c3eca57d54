use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post as materialized by the persistence service; `id` and
/// `created_at` are assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Campus spots a post can be pinned to; serde names match the posts
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "sproul")]
    Sproul,
    #[serde(rename = "memorial glade")]
    MemorialGlade,
    #[serde(rename = "rsf")]
    Rsf,
    #[serde(rename = "other")]
    Other,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Sproul,
        Location::MemorialGlade,
        Location::Rsf,
        Location::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Sproul => "sproul",
            Location::MemorialGlade => "memorial glade",
            Location::Rsf => "rsf",
            Location::Other => "other",
        }
    }

    /// Human-facing label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Sproul => "Sproul",
            Location::MemorialGlade => "Memorial Glade",
            Location::Rsf => "RSF",
            Location::Other => "Other",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sproul" => Ok(Location::Sproul),
            "memorial glade" => Ok(Location::MemorialGlade),
            "rsf" => Ok(Location::Rsf),
            "other" => Ok(Location::Other),
            _ => Err(()),
        }
    }
}

/// In-progress form state; plain strings until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub body: String,
    pub location: String,
}

/// A draft that passed validation, shaped for the insertion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_round_trips_through_wire_strings() {
        for location in Location::ALL {
            let json = serde_json::to_string(&location).unwrap();
            assert_eq!(json, format!("\"{}\"", location.as_str()));
            let back: Location = serde_json::from_str(&json).unwrap();
            assert_eq!(back, location);
        }
        assert_eq!(
            "memorial glade".parse::<Location>(),
            Ok(Location::MemorialGlade)
        );
        assert_eq!("Sproul".parse::<Location>(), Err(()));
    }

    #[test]
    fn post_deserializes_a_service_row() {
        let row = r#"{
            "id": "3f0c5d8e-1db3-4a26-9c1a-0a7f4f2cbe10",
            "created_at": "2026-02-01T18:30:00+00:00",
            "updated_at": "2026-02-01T18:30:00+00:00",
            "title": "Free pizza",
            "body": null,
            "location": "sproul"
        }"#;
        let post: Post = serde_json::from_str(row).unwrap();
        assert_eq!(post.title, "Free pizza");
        assert_eq!(post.body, None);
        assert_eq!(post.location, Some(Location::Sproul));
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn post_tolerates_missing_optional_columns() {
        let row = r#"{
            "id": "3f0c5d8e-1db3-4a26-9c1a-0a7f4f2cbe10",
            "created_at": "2026-02-01T18:30:00Z",
            "title": "Lost keys"
        }"#;
        let post: Post = serde_json::from_str(row).unwrap();
        assert_eq!(post.body, None);
        assert_eq!(post.location, None);
        assert_eq!(post.updated_at, None);
    }

    #[test]
    fn new_post_omits_absent_fields_on_the_wire() {
        let record = NewPost {
            title: "Lost keys".into(),
            body: None,
            location: None,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"title":"Lost keys"}"#
        );
    }
}
