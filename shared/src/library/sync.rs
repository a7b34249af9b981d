//! Library operations that may reach the remote service.
//!
//! Each function reads a snapshot of the [`Library`], talks to the service and
//! returns a [`Change`] describing how the live collection must be updated.
//! Callers apply it with [`Library::apply`], so the live collection is never
//! borrowed while a request is in flight.

use log::{debug, warn};

use super::service::{Confirm, GameService};
use super::{Library, DELETE_PROMPT};
use crate::error::{LibraryError, ServiceError};
use crate::models::game::GameRecord;

/// Why a change was applied without the backend's acknowledgement.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// The record only exists in the browser.
    LocalOnly,
    /// Loading failed and the seed collection was used.
    Seeded(ServiceError),
    /// A remote write or the follow-up refetch failed.
    Remote(ServiceError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Backend acknowledged; replace the collection with its copy.
    Replace(Vec<GameRecord>),
    /// Loading failed; use the seed collection.
    Seed(ServiceError),
    FlipCompleted { id: String, fallback: Fallback },
    Remove { id: String, fallback: Fallback },
    /// The user declined; leave the collection as it is.
    Cancelled,
}

impl Change {
    /// The degradation reason, if the change did not come from the backend.
    pub fn fallback(&self) -> Option<Fallback> {
        match self {
            Change::Replace(_) | Change::Cancelled => None,
            Change::Seed(error) => Some(Fallback::Seeded(error.clone())),
            Change::FlipCompleted { fallback, .. } | Change::Remove { fallback, .. } => {
                Some(fallback.clone())
            }
        }
    }
}

pub async fn load<S>(service: &S) -> Change
where
    S: GameService + ?Sized,
{
    debug!("Loading game library");
    match service.list_games().await {
        Ok(games) if !games.is_empty() => {
            debug!("Loaded {} games from remote", games.len());
            Change::Replace(games)
        }
        Ok(_) => {
            warn!("Remote returned no games, using seed collection");
            Change::Seed(ServiceError::Empty)
        }
        Err(e) => {
            warn!("Failed to load games ({}), using seed collection", e);
            Change::Seed(e)
        }
    }
}

/// Flips the completion flag of `id`.
///
/// Remote records are written back and the collection refetched; local-only
/// records, and remote ones whose write or refetch fails, flip in memory.
pub async fn toggle_completed<S>(
    service: &S,
    library: &Library,
    id: &str,
) -> Result<Change, LibraryError>
where
    S: GameService + ?Sized,
{
    let record = library
        .find(id)
        .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
    debug!("Toggling completion of {}", id);
    if record.is_local() {
        return Ok(Change::FlipCompleted {
            id: id.to_string(),
            fallback: Fallback::LocalOnly,
        });
    }

    let updated = record.with_completed(!record.completed);
    let result: Result<Vec<GameRecord>, ServiceError> = async {
        service.update_game(&updated).await?;
        service.list_games().await
    }
    .await;

    Ok(match result {
        Ok(games) => Change::Replace(games),
        Err(e) => {
            warn!("Failed to update game {} remotely ({}), applying locally", id, e);
            Change::FlipCompleted {
                id: id.to_string(),
                fallback: Fallback::Remote(e),
            }
        }
    })
}

/// Asks `confirm` before deleting `id`, then removes it.
///
/// Unknown ids fail before the user is asked.
pub async fn delete<S, C>(
    service: &S,
    library: &Library,
    id: &str,
    confirm: &C,
) -> Result<Change, LibraryError>
where
    S: GameService + ?Sized,
    C: Confirm + ?Sized,
{
    let record = library
        .find(id)
        .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
    if !confirm.confirm(DELETE_PROMPT) {
        debug!("Deletion of {} cancelled", id);
        return Ok(Change::Cancelled);
    }
    if record.is_local() {
        return Ok(Change::Remove {
            id: id.to_string(),
            fallback: Fallback::LocalOnly,
        });
    }

    let result: Result<Vec<GameRecord>, ServiceError> = async {
        service.delete_game(id).await?;
        service.list_games().await
    }
    .await;

    Ok(match result {
        Ok(games) => Change::Replace(games),
        Err(e) => {
            warn!("Failed to delete game {} remotely ({}), removing locally", id, e);
            Change::Remove {
                id: id.to_string(),
                fallback: Fallback::Remote(e),
            }
        }
    })
}
