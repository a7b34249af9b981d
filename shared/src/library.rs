pub mod service;
pub mod sync;

use std::rc::Rc;

use chrono::Utc;
use log::{info, warn};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{LibraryError, Result};
use crate::models::catalog::Catalog;
use crate::models::game::{GameRecord, NewGame, LOCAL_ID_PREFIX};
use crate::stats::StatsSummary;

pub use service::{Confirm, GameService};
pub use sync::{Change, Fallback};

/// Prompt shown before a game is deleted.
pub const DELETE_PROMPT: &str = "Eliminar juego?";

/// How a library operation was resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The backend acknowledged and the collection was refreshed from it.
    Synced,
    /// Applied in the browser only.
    Local(Fallback),
    /// The user declined the confirmation; nothing changed.
    Cancelled,
}

/// The in-memory game collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    games: Vec<GameRecord>,
    catalog: Rc<Catalog>,
}

impl Library {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            games: Vec::new(),
            catalog,
        }
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn find(&self, id: &str) -> Option<&GameRecord> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn stats(&self) -> StatsSummary {
        StatsSummary::compute(&self.games, &self.catalog.personalities)
    }

    /// Folds a remote-sync result into the collection.
    pub fn apply(&mut self, change: Change) -> SyncOutcome {
        match change {
            Change::Replace(games) => {
                self.games = games;
                SyncOutcome::Synced
            }
            Change::Seed(error) => {
                self.games = self.catalog.seed.clone();
                SyncOutcome::Local(Fallback::Seeded(error))
            }
            Change::FlipCompleted { id, fallback } => {
                match self.games.iter_mut().find(|g| g.id == id) {
                    Some(game) => game.completed = !game.completed,
                    None => warn!("Cannot toggle {}: no longer in library", id),
                }
                SyncOutcome::Local(fallback)
            }
            Change::Remove { id, fallback } => {
                self.games.retain(|g| g.id != id);
                SyncOutcome::Local(fallback)
            }
            Change::Cancelled => SyncOutcome::Cancelled,
        }
    }

    /// Validates a draft and builds the local-only record it would create.
    ///
    /// The collection is left untouched; see [`Library::insert_local`].
    pub fn prepare_local(&self, draft: NewGame) -> Result<GameRecord> {
        draft.validate()?;
        if !self.catalog.is_known_personality(&draft.personality) {
            let mut errors = ValidationErrors::new();
            errors.add(
                "personalidad",
                ValidationError::new("unknown_personality"),
            );
            return Err(LibraryError::Validation(errors));
        }
        Ok(GameRecord::from_draft(self.next_local_id(), draft))
    }

    /// Appends a record produced by [`Library::prepare_local`].
    pub fn insert_local(&mut self, record: GameRecord) -> Result<SyncOutcome> {
        if self.contains(&record.id) {
            return Err(LibraryError::DuplicateId(record.id));
        }
        info!("Added local game {} ({})", record.title, record.id);
        self.games.push(record);
        Ok(SyncOutcome::Local(Fallback::LocalOnly))
    }

    /// Validates the draft and appends a new local-only game.
    ///
    /// Never reaches the remote service.
    pub fn add_local(&mut self, draft: NewGame) -> Result<&GameRecord> {
        let record = self.prepare_local(draft)?;
        let id = record.id.clone();
        self.insert_local(record)?;
        self.find(&id)
            .ok_or_else(|| LibraryError::NotFound(id.clone()))
    }

    fn next_local_id(&self) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let id = format!("{}{}", LOCAL_ID_PREFIX, stamp);
            if !self.contains(&id) {
                return id;
            }
            stamp += 1;
        }
    }
}
