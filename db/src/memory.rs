//! In-memory storage for exercising handlers without a database.

use chrono::Utc;

use errors::Error;

use crate::models::{Game, NewGame, NewReview, Review, User};
use crate::repository::{Repository, Storage};

/// Mirrors the postgres schema's behaviour: serial ids, `created_at` stamped on
/// insert, unique titles and review foreign keys.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    games: Vec<Game>,
    reviews: Vec<Review>,
    users: Vec<User>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// A store whose every checkout fails, like a pool with no reachable
    /// database.
    pub fn unavailable() -> Self {
        MemoryStore {
            unavailable: true,
            ..MemoryStore::default()
        }
    }

    pub fn add_game(&mut self, new_game: NewGame) -> Result<Game, Error> {
        if self.games.iter().any(|game| game.title == new_game.title) {
            return Err(Error::BadRequest(format!(
                "Key (title)=({}) already exists.",
                new_game.title
            )));
        }

        let game = Game {
            id: self.games.len() as i32 + 1,
            title: new_game.title,
            genre: new_game.genre,
            platform: new_game.platform,
            price: new_game.price,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.games.push(game.clone());

        Ok(game)
    }

    pub fn add_user(&mut self, name: &str) -> User {
        let user = User {
            id: self.users.len() as i32 + 1,
            name: Some(name.to_string()),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.users.push(user.clone());

        user
    }

    pub fn add_review(&mut self, new_review: NewReview) -> Result<Review, Error> {
        if !self.games.iter().any(|game| game.id == new_review.game_id) {
            return Err(Error::BadRequest(format!(
                "Key (game_id)=({}) is not present in table \"games\".",
                new_review.game_id
            )));
        }
        if !self.users.iter().any(|user| user.id == new_review.user_id) {
            return Err(Error::BadRequest(format!(
                "Key (user_id)=({}) is not present in table \"users\".",
                new_review.user_id
            )));
        }

        let review = Review {
            id: self.reviews.len() as i32 + 1,
            score: new_review.score,
            comment: new_review.comment,
            created_at: Utc::now(),
            updated_at: None,
            game_id: new_review.game_id,
            user_id: new_review.user_id,
        };
        self.reviews.push(review.clone());

        Ok(review)
    }
}

impl Repository for MemoryStore {
    fn games(&self) -> Result<Vec<Game>, Error> {
        Ok(self.games.clone())
    }

    fn game(&self, id: i32) -> Result<Game, Error> {
        self.games
            .iter()
            .find(|game| game.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Record not found".into()))
    }

    fn games_by_ids(&self, ids: &[i32]) -> Result<Vec<Game>, Error> {
        Ok(self
            .games
            .iter()
            .filter(|game| ids.contains(&game.id))
            .cloned()
            .collect())
    }

    fn users_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, Error> {
        Ok(self
            .users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }

    fn reviews_touching(&self, game_ids: &[i32], user_ids: &[i32]) -> Result<Vec<Review>, Error> {
        Ok(self
            .reviews
            .iter()
            .filter(|review| {
                game_ids.contains(&review.game_id) || user_ids.contains(&review.user_id)
            })
            .cloned()
            .collect())
    }
}

impl Storage for MemoryStore {
    fn checkout(&self) -> Result<Box<dyn Repository>, Error> {
        if self.unavailable {
            error!("Failed to get connection - memory store is unavailable");
            return Err(Error::PoolError("memory store is unavailable".into()));
        }

        Ok(Box::new(self.clone()))
    }
}
