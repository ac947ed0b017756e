mod game;
mod review;
mod user;

pub use self::game::*;
pub use self::review::*;
pub use self::user::*;
