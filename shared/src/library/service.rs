use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::game::GameRecord;

/// Remote game collection (`GET/PUT/DELETE /games`).
///
/// Futures are not `Send`; implementations run on the browser event loop.
#[async_trait(?Send)]
pub trait GameService {
    async fn list_games(&self) -> Result<Vec<GameRecord>, ServiceError>;

    async fn update_game(&self, game: &GameRecord) -> Result<(), ServiceError>;

    async fn delete_game(&self, id: &str) -> Result<(), ServiceError>;
}

/// Yes/no gate asked before destructive operations.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
