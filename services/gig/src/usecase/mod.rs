pub mod game;
pub mod saved;
pub mod tag;
pub mod user;
