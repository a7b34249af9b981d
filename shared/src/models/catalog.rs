use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::game::GameRecord;

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Personality tags and the fallback seed collection.
///
/// Kept as data so tests and deployments can swap in their own set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub personalities: Vec<String>,
    pub seed: Vec<GameRecord>,
}

impl Catalog {
    /// Parses and checks a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// True for an empty tag or one listed in the catalog.
    pub fn is_known_personality(&self, tag: &str) -> bool {
        tag.is_empty() || self.personalities.iter().any(|p| p == tag)
    }

    fn check(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for game in &self.seed {
            if !seen.insert(game.id.as_str()) {
                return Err(CatalogError::DuplicateId(game.id.clone()));
            }
            if !self.is_known_personality(&game.personality) {
                return Err(CatalogError::UnknownPersonality {
                    id: game.id.clone(),
                    personality: game.personality.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.personalities.len(), 9);
        assert_eq!(catalog.seed.len(), 10);

        let ids: Vec<&str> = catalog.seed.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert_eq!(catalog.seed[0].title, "Fireboy & Watergirl");
        assert_eq!(catalog.seed[9].title, "2048");
        assert!(catalog.seed.iter().all(|g| !g.completed && g.hours == 0.0));
    }

    #[test]
    fn test_personality_order_is_fixed() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.personalities[0], "Estratega");
        assert_eq!(catalog.personalities[8], "Innovador");
    }

    #[test]
    fn test_known_personality() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.is_known_personality(""));
        assert!(catalog.is_known_personality("Narrativo"));
        assert!(!catalog.is_known_personality("narrativo"));
        assert!(!catalog.is_known_personality("Casual"));
    }

    #[test]
    fn test_duplicate_seed_id_rejected() {
        let json = r#"{
            "personalities": ["Social"],
            "seed": [
                { "_id": "1", "titulo": "A" },
                { "_id": "1", "titulo": "B" }
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_unknown_seed_personality_rejected() {
        let json = r#"{
            "personalities": ["Social"],
            "seed": [{ "_id": "1", "titulo": "A", "personalidad": "Casual" }]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::UnknownPersonality { .. })
        ));
    }

    #[test]
    fn test_malformed_catalog_rejected() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
