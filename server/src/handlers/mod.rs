mod get_game;
mod get_game_users;
mod list_games;

pub use self::get_game::*;
pub use self::get_game_users::*;
pub use self::list_games::*;
