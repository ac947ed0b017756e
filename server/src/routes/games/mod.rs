mod get_all;
mod get_one;
mod get_users;

pub use self::get_all::*;
pub use self::get_one::*;
pub use self::get_users::*;
