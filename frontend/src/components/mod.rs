pub mod common_toast;
pub mod game_card;
pub mod game_viewer;
pub mod nav;
pub mod stats_panel;
