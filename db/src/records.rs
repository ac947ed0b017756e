use std::collections::BTreeMap;

use errors::Error;

use crate::models::{Game, Review, User};
use crate::repository::Repository;

/// An immutable graph of loaded records. Reviews point at their game and
/// user by id; collections are resolved by scanning reviews in id order.
#[derive(Debug, Default)]
pub struct RecordSet {
    games: BTreeMap<i32, Game>,
    reviews: BTreeMap<i32, Review>,
    users: BTreeMap<i32, User>,
}

impl RecordSet {
    pub fn new(games: Vec<Game>, reviews: Vec<Review>, users: Vec<User>) -> Self {
        RecordSet {
            games: games.into_iter().map(|game| (game.id, game)).collect(),
            reviews: reviews.into_iter().map(|review| (review.id, review)).collect(),
            users: users.into_iter().map(|user| (user.id, user)).collect(),
        }
    }

    /// Loads `games`, their reviews and the users who wrote them. That is
    /// everything the default rules of a game expand into, fetched in two
    /// queries.
    pub fn load_reviews(repository: &dyn Repository, games: Vec<Game>) -> Result<Self, Error> {
        let game_ids: Vec<i32> = games.iter().map(|game| game.id).collect();
        let reviews = repository.reviews_touching(&game_ids, &[])?;

        let mut user_ids: Vec<i32> = reviews.iter().map(|review| review.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let users = repository.users_by_ids(&user_ids)?;

        Ok(RecordSet::new(games, reviews, users))
    }

    /// Loads everything reachable from `games` through reviews: their reviews,
    /// the users who wrote them, those users' other reviews and the games they
    /// point at, until nothing new turns up.
    ///
    /// This is the whole connected part of the review graph, one round trip
    /// per level. Use it when caller rules reach past a game's reviewers.
    pub fn load(repository: &dyn Repository, games: Vec<Game>) -> Result<Self, Error> {
        let mut pending_games: Vec<i32> = games.iter().map(|game| game.id).collect();
        let mut pending_users: Vec<i32> = vec![];
        let mut records = RecordSet::new(games, vec![], vec![]);

        while !pending_games.is_empty() || !pending_users.is_empty() {
            let reviews = repository.reviews_touching(&pending_games, &pending_users)?;

            let mut missing_games = vec![];
            let mut missing_users = vec![];
            for review in reviews {
                if !records.games.contains_key(&review.game_id)
                    && !missing_games.contains(&review.game_id)
                {
                    missing_games.push(review.game_id);
                }
                if !records.users.contains_key(&review.user_id)
                    && !missing_users.contains(&review.user_id)
                {
                    missing_users.push(review.user_id);
                }
                records.reviews.insert(review.id, review);
            }

            pending_games.clear();
            for game in repository.games_by_ids(&missing_games)? {
                pending_games.push(game.id);
                records.games.insert(game.id, game);
            }

            pending_users.clear();
            for user in repository.users_by_ids(&missing_users)? {
                pending_users.push(user.id);
                records.users.insert(user.id, user);
            }
        }

        debug!(
            "Loaded {} games, {} reviews, {} users",
            records.games.len(),
            records.reviews.len(),
            records.users.len()
        );

        Ok(records)
    }

    pub fn game(&self, id: i32) -> Option<&Game> {
        self.games.get(&id)
    }

    pub fn review(&self, id: i32) -> Option<&Review> {
        self.reviews.get(&id)
    }

    pub fn user(&self, id: i32) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn reviews_of_game(&self, game_id: i32) -> Vec<&Review> {
        self.reviews
            .values()
            .filter(|review| review.game_id == game_id)
            .collect()
    }

    pub fn reviews_of_user(&self, user_id: i32) -> Vec<&Review> {
        self.reviews
            .values()
            .filter(|review| review.user_id == user_id)
            .collect()
    }

    /// Reviewers of a game in review order. A user who reviewed the game twice
    /// appears twice.
    pub fn game_users(&self, game_id: i32) -> Vec<&User> {
        self.reviews_of_game(game_id)
            .into_iter()
            .filter_map(|review| self.user(review.user_id))
            .collect()
    }
}
