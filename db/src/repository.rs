use errors::Error;

use crate::models::{Game, Review, User};
use crate::{get_conn, Connection, PgPool};

/// Read access used by request handlers. One repository serves one request.
pub trait Repository {
    fn games(&self) -> Result<Vec<Game>, Error>;

    fn game(&self, id: i32) -> Result<Game, Error>;

    fn games_by_ids(&self, ids: &[i32]) -> Result<Vec<Game>, Error>;

    fn users_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, Error>;

    fn reviews_touching(&self, game_ids: &[i32], user_ids: &[i32]) -> Result<Vec<Review>, Error>;
}

/// Shared handle registered as app data; hands out request-scoped
/// repositories.
pub trait Storage: Send + Sync {
    fn checkout(&self) -> Result<Box<dyn Repository>, Error>;
}

pub struct PgRepository {
    connection: Connection,
}

impl Repository for PgRepository {
    fn games(&self) -> Result<Vec<Game>, Error> {
        Game::find_all(&self.connection)
    }

    fn game(&self, id: i32) -> Result<Game, Error> {
        Game::find_by_id(&self.connection, id)
    }

    fn games_by_ids(&self, ids: &[i32]) -> Result<Vec<Game>, Error> {
        Game::find_by_ids(&self.connection, ids)
    }

    fn users_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, Error> {
        User::find_by_ids(&self.connection, ids)
    }

    fn reviews_touching(&self, game_ids: &[i32], user_ids: &[i32]) -> Result<Vec<Review>, Error> {
        Review::find_touching(&self.connection, game_ids, user_ids)
    }
}

impl Storage for PgPool {
    fn checkout(&self) -> Result<Box<dyn Repository>, Error> {
        let connection = get_conn(self)?;
        Ok(Box::new(PgRepository { connection }))
    }
}
