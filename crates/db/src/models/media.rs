//! Media models and DTOs.
//!
//! [`Media`] is the stored row. The request DTOs are the JSON bodies the API
//! accepts and only live for the duration of one request.

use catchup_core::types::{DbId, Timestamp};
use catchup_core::watch::resolve_date_watched;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entity name used in not-found errors.
pub const MEDIA_ENTITY: &str = "media";

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `media` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: DbId,
    pub title: String,
    pub form: String,
    pub is_watched: bool,
    pub date_watched: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Media {
    /// Return a copy of this media with the fields of `req` applied.
    ///
    /// `id` and `created_at` are carried over unchanged. `date_watched`
    /// follows the watched flag (see [`resolve_date_watched`]).
    pub fn with_update(&self, req: &UpdateMediaRequest, now: Timestamp) -> Media {
        Media {
            id: self.id,
            title: req.title.clone(),
            form: req.form.clone(),
            is_watched: req.is_watched,
            date_watched: resolve_date_watched(self.date_watched, req.is_watched, now),
            created_at: self.created_at,
        }
    }
}

/// Insert shape for a media row: everything except the generated `id`.
#[derive(Debug, Clone)]
pub struct NewMedia {
    pub title: String,
    pub form: String,
    pub is_watched: bool,
    pub date_watched: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl NewMedia {
    /// A fresh, unwatched media item created at `now`.
    pub fn new(title: impl Into<String>, form: impl Into<String>, now: Timestamp) -> Self {
        Self {
            title: title.into(),
            form: form.into(),
            is_watched: false,
            date_watched: None,
            created_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /medias`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaRequest {
    pub title: String,
    pub form: String,
}

/// Body of `PUT /medias/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMediaRequest {
    pub title: String,
    pub form: String,
    pub is_watched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn stored(is_watched: bool, date_watched: Option<Timestamp>) -> Media {
        Media {
            id: 7,
            title: "Dune".into(),
            form: "book".into(),
            is_watched,
            date_watched,
            created_at: Utc::now() - Duration::days(10),
        }
    }

    #[test]
    fn new_media_starts_unwatched() {
        let now = Utc::now();
        let media = NewMedia::new("Dune", "book", now);
        assert!(!media.is_watched);
        assert!(media.date_watched.is_none());
        assert_eq!(media.created_at, now);
    }

    #[test]
    fn update_keeps_id_and_created_at() {
        let before = stored(false, None);
        let req = UpdateMediaRequest {
            title: "Dune Messiah".into(),
            form: "audiobook".into(),
            is_watched: true,
        };
        let now = Utc::now();

        let after = before.with_update(&req, now);

        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.title, "Dune Messiah");
        assert_eq!(after.form, "audiobook");
        assert_eq!(after.date_watched, Some(now));
    }

    #[test]
    fn unwatching_clears_date_watched() {
        let before = stored(true, Some(Utc::now() - Duration::days(1)));
        let req = UpdateMediaRequest {
            title: before.title.clone(),
            form: before.form.clone(),
            is_watched: false,
        };

        let after = before.with_update(&req, Utc::now());

        assert!(!after.is_watched);
        assert!(after.date_watched.is_none());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(stored(false, None)).unwrap();
        assert_eq!(json["isWatched"], false);
        assert!(json["dateWatched"].is_null());
        assert!(json["createdAt"].is_string());
        assert!(json.get("is_watched").is_none());
    }

    #[test]
    fn update_request_reads_is_watched() {
        let req: UpdateMediaRequest =
            serde_json::from_str(r#"{"title":"Dune","form":"book","isWatched":true}"#).unwrap();
        assert!(req.is_watched);
    }
}
