pub mod models {
    pub mod catalog;
    pub mod game;
}

pub mod admin;
pub mod error;
pub mod library;
pub mod stats;
pub mod view;

// Re-export commonly used items
pub use error::{AuthError, CatalogError, LibraryError, Result, ServiceError};

pub use models::{
    catalog::Catalog,
    game::{GameRecord, NewGame, LOCAL_ID_PREFIX},
};

pub use admin::AdminGate;
pub use library::{
    Change, Confirm, Fallback, GameService, Library, SyncOutcome, DELETE_PROMPT,
};
pub use stats::{PersonalityCount, StatsSummary};
pub use view::View;
