use crate::models::game::GameRecord;

/// Number of games shown in the featured view.
pub const FEATURED_LIMIT: usize = 4;

/// The four screens of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Library,
    Featured,
    Stats,
    Admin,
}

impl View {
    pub const ALL: [View; 4] = [View::Library, View::Featured, View::Stats, View::Admin];

    pub fn label(self) -> &'static str {
        match self {
            View::Library => "Biblioteca",
            View::Featured => "Destacados",
            View::Stats => "Estadísticas",
            View::Admin => "Admin",
        }
    }

    /// Games displayed by this view. Never modifies the collection.
    pub fn visible(self, games: &[GameRecord]) -> &[GameRecord] {
        match self {
            View::Featured => &games[..games.len().min(FEATURED_LIMIT)],
            _ => games,
        }
    }
}
