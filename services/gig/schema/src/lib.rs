//! sea-orm entities for the gig catalogue database.

pub mod developers;
pub mod game_developers;
pub mod game_genres;
pub mod game_platforms;
pub mod game_publishers;
pub mod game_themes;
pub mod games;
pub mod genres;
pub mod platforms;
pub mod publishers;
pub mod themes;
pub mod user_saved_games;
pub mod users;
