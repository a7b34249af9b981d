use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use log::debug;
use shared::{GameRecord, GameService, ServiceError};

use crate::api::join_url;
use crate::config::Config;

/// `GameService` backed by the REST API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpGameService {
    base_url: String,
}

impl HttpGameService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(Config::api_base_url())
    }

    pub fn games_url(&self) -> String {
        join_url(&self.base_url, "/games")
    }

    pub fn game_url(&self, id: &str) -> String {
        format!("{}/{}", self.games_url(), urlencoding::encode(id))
    }
}

fn network_error(e: gloo_net::Error) -> ServiceError {
    ServiceError::Network(e.to_string())
}

fn check_status(response: &Response) -> Result<(), ServiceError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ServiceError::Status(response.status()))
    }
}

#[async_trait(?Send)]
impl GameService for HttpGameService {
    async fn list_games(&self) -> Result<Vec<GameRecord>, ServiceError> {
        debug!("Fetching all games");

        let response = Request::get(&self.games_url())
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response)?;

        let games = response
            .json::<Vec<GameRecord>>()
            .await
            .map_err(|e| ServiceError::Malformed(e.to_string()))?;

        debug!("Successfully fetched {} games", games.len());
        Ok(games)
    }

    async fn update_game(&self, game: &GameRecord) -> Result<(), ServiceError> {
        debug!("Updating game with ID: {}", game.id);

        let response = Request::put(&self.game_url(&game.id))
            .json(game)
            .map_err(|e| ServiceError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response)
    }

    async fn delete_game(&self, id: &str) -> Result<(), ServiceError> {
        debug!("Deleting game with ID: {}", id);

        let response = Request::delete(&self.game_url(id))
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response)
    }
}
