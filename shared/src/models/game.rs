use serde::{Deserialize, Serialize};
use validator::Validate;

/// Identifier prefix for games created in the browser and never persisted remotely.
pub const LOCAL_ID_PREFIX: &str = "local_";

/// A game in the library, as exchanged with the remote service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    /// Game's ID
    #[serde(rename = "_id")]
    pub id: String,

    /// Game's title
    #[serde(rename = "titulo", default)]
    pub title: String,

    /// Free-form genre description
    #[serde(rename = "genero", default)]
    pub genre: String,

    /// Personality tag, empty when unset
    #[serde(rename = "personalidad", default)]
    pub personality: String,

    /// Cover image URL
    #[serde(rename = "portada", default)]
    pub cover: String,

    /// Playable URL loaded in the game viewer
    #[serde(default)]
    pub url: String,

    /// Hours played
    #[serde(rename = "horas", default)]
    pub hours: f64,

    /// User score
    #[serde(rename = "puntuacion", default)]
    pub score: f64,

    /// Whether the game has been completed
    #[serde(rename = "completado", default)]
    pub completed: bool,
}

impl GameRecord {
    /// True for games that only exist in the browser.
    pub fn is_local(&self) -> bool {
        is_local_id(&self.id)
    }

    /// Copy of this record with the completion flag set to `completed`.
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    /// Builds a local-only record from a validated draft.
    pub fn from_draft(id: String, draft: NewGame) -> Self {
        Self {
            id,
            title: draft.title,
            genre: draft.genre,
            personality: draft.personality,
            cover: draft.cover,
            url: draft.url,
            hours: 0.0,
            score: 0.0,
            completed: false,
        }
    }
}

pub fn is_local_id(id: &str) -> bool {
    id.starts_with(LOCAL_ID_PREFIX)
}

/// Fields entered in the admin add-form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct NewGame {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(rename = "genero", default)]
    pub genre: String,

    #[serde(rename = "personalidad", default)]
    pub personality: String,

    #[serde(rename = "portada", default)]
    pub cover: String,

    #[validate(length(min = 1, message = "Game URL is required"))]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn create_test_draft() -> NewGame {
        NewGame {
            title: "Celeste".to_string(),
            genre: "Plataformas".to_string(),
            personality: "Hardcore".to_string(),
            cover: "https://example.com/celeste.png".to_string(),
            url: "https://example.com/celeste".to_string(),
        }
    }

    #[test]
    fn test_record_deserializes_wire_names() {
        let record: GameRecord = serde_json::from_value(json!({
            "_id": "65a1",
            "titulo": "Slope",
            "genero": "Arcade / Reflejos",
            "personalidad": "Competitivo",
            "portada": "https://i.imgur.com/QkQzE3t.png",
            "url": "https://poki.com/en/g/slope",
            "horas": 3.5,
            "puntuacion": 8,
            "completado": true,
            "__v": 0
        }))
        .unwrap();

        assert_eq!(record.id, "65a1");
        assert_eq!(record.title, "Slope");
        assert_eq!(record.personality, "Competitivo");
        assert_eq!(record.hours, 3.5);
        assert_eq!(record.score, 8.0);
        assert!(record.completed);
        assert!(!record.is_local());
    }

    #[test]
    fn test_record_missing_fields_default() {
        let record: GameRecord = serde_json::from_value(json!({
            "_id": "1",
            "titulo": "2048"
        }))
        .unwrap();

        assert_eq!(record.hours, 0.0);
        assert_eq!(record.score, 0.0);
        assert!(!record.completed);
        assert_eq!(record.personality, "");
    }

    #[test]
    fn test_record_serializes_wire_names() {
        let record = GameRecord::from_draft("local_1".to_string(), create_test_draft());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["_id"], "local_1");
        assert_eq!(value["titulo"], "Celeste");
        assert_eq!(value["completado"], false);
        assert!(value.get("title").is_none());
    }

    #[test]
    fn test_local_id_detection() {
        assert!(is_local_id("local_1700000000000"));
        assert!(!is_local_id("1"));
        assert!(!is_local_id("my_local_game"));
    }

    #[test]
    fn test_from_draft_defaults() {
        let record = GameRecord::from_draft("local_42".to_string(), create_test_draft());
        assert!(record.is_local());
        assert_eq!(record.hours, 0.0);
        assert_eq!(record.score, 0.0);
        assert!(!record.completed);
        assert_eq!(record.url, "https://example.com/celeste");
    }

    #[test]
    fn test_with_completed_only_changes_flag() {
        let record = GameRecord::from_draft("local_42".to_string(), create_test_draft());
        let done = record.with_completed(true);
        assert!(done.completed);
        assert_eq!(done.id, record.id);
        assert_eq!(done.title, record.title);
    }

    #[test]
    fn test_draft_validation() {
        assert!(create_test_draft().validate().is_ok());

        let mut draft = create_test_draft();
        draft.title = String::new();
        assert!(draft.validate().is_err());

        let mut draft = create_test_draft();
        draft.url = String::new();
        assert!(draft.validate().is_err());

        let draft = NewGame {
            title: "A".to_string(),
            url: "http://x".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }
}
