use std::fmt;

use chrono::{DateTime, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde_json::json;

use errors::Error;

use crate::records::RecordSet;
use crate::schema::games;
use crate::serializer::{timestamp, Field, RecordKey, Serializable};

#[derive(Clone, Debug, Identifiable, PartialEq, Queryable)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "games"]
pub struct NewGame {
    pub title: String,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub price: Option<i32>,
}

impl NewGame {
    pub fn new(title: &str, genre: &str, platform: &str, price: i32) -> Self {
        NewGame {
            title: title.to_string(),
            genre: Some(genre.to_string()),
            platform: Some(platform.to_string()),
            price: Some(price),
        }
    }
}

impl Game {
    pub fn create(conn: &PgConnection, new_game: NewGame) -> Result<Game, Error> {
        let game = diesel::insert_into(games::table)
            .values(new_game)
            .get_result(conn)?;

        Ok(game)
    }

    pub fn find_all(conn: &PgConnection) -> Result<Vec<Game>, Error> {
        use crate::schema::games::dsl::{games, id};

        let results = games.order(id).load::<Game>(conn)?;

        Ok(results)
    }

    pub fn find_by_id(conn: &PgConnection, game_id: i32) -> Result<Game, Error> {
        use crate::schema::games::dsl::games;

        let game = games.find(game_id).first::<Game>(conn)?;

        Ok(game)
    }

    pub fn find_by_ids(conn: &PgConnection, game_ids: &[i32]) -> Result<Vec<Game>, Error> {
        use crate::schema::games::dsl::{games, id};

        if game_ids.is_empty() {
            return Ok(vec![]);
        }

        let results = games
            .filter(id.eq_any(game_ids.to_vec()))
            .order(id)
            .load::<Game>(conn)?;

        Ok(results)
    }
}

impl Serializable for Game {
    fn key(&self) -> RecordKey {
        RecordKey::new("games", self.id)
    }

    fn serialize_rules(&self) -> &'static [&'static str] {
        &["-reviews.game"]
    }

    fn fields<'a>(&'a self, records: &'a RecordSet) -> Vec<(&'static str, Field<'a>)> {
        vec![
            ("id", Field::Value(json!(self.id))),
            ("title", Field::Value(json!(self.title))),
            ("genre", Field::Value(json!(self.genre))),
            ("platform", Field::Value(json!(self.platform))),
            ("price", Field::Value(json!(self.price))),
            ("created_at", Field::Value(timestamp(Some(&self.created_at)))),
            ("updated_at", Field::Value(timestamp(self.updated_at.as_ref()))),
            ("reviews", Field::many(records.reviews_of_game(self.id))),
            ("users", Field::derived(records.game_users(self.id))),
        ]
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Game {} for {}>",
            self.title,
            self.platform.as_deref().unwrap_or("None")
        )
    }
}
