use std::fmt;

use chrono::{DateTime, Utc};
use diesel::{self, BoolExpressionMethods, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde_json::json;

use errors::Error;

use crate::records::RecordSet;
use crate::schema::reviews;
use crate::serializer::{timestamp, Field, RecordKey, Serializable};

#[derive(Clone, Debug, Identifiable, PartialEq, Queryable)]
pub struct Review {
    pub id: i32,
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub game_id: i32,
    pub user_id: i32,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "reviews"]
pub struct NewReview {
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub game_id: i32,
    pub user_id: i32,
}

impl NewReview {
    pub fn new(score: i32, comment: &str, game_id: i32, user_id: i32) -> Self {
        NewReview {
            score: Some(score),
            comment: Some(comment.to_string()),
            game_id,
            user_id,
        }
    }
}

impl Review {
    pub fn create(conn: &PgConnection, new_review: NewReview) -> Result<Review, Error> {
        let review = diesel::insert_into(reviews::table)
            .values(new_review)
            .get_result(conn)?;

        Ok(review)
    }

    /// Reviews written for any of `game_ids` or by any of `user_ids`, in id
    /// order.
    pub fn find_touching(
        conn: &PgConnection,
        game_ids: &[i32],
        user_ids: &[i32],
    ) -> Result<Vec<Review>, Error> {
        use crate::schema::reviews::dsl::{game_id, id, reviews, user_id};

        if game_ids.is_empty() && user_ids.is_empty() {
            return Ok(vec![]);
        }

        let results = reviews
            .filter(
                game_id
                    .eq_any(game_ids.to_vec())
                    .or(user_id.eq_any(user_ids.to_vec())),
            )
            .order(id)
            .load::<Review>(conn)?;

        Ok(results)
    }
}

impl Serializable for Review {
    fn key(&self) -> RecordKey {
        RecordKey::new("reviews", self.id)
    }

    fn serialize_rules(&self) -> &'static [&'static str] {
        &["-game.reviews", "-user.reviews"]
    }

    fn fields<'a>(&'a self, records: &'a RecordSet) -> Vec<(&'static str, Field<'a>)> {
        vec![
            ("id", Field::Value(json!(self.id))),
            ("score", Field::Value(json!(self.score))),
            ("comment", Field::Value(json!(self.comment))),
            ("created_at", Field::Value(timestamp(Some(&self.created_at)))),
            ("updated_at", Field::Value(timestamp(self.updated_at.as_ref()))),
            ("game_id", Field::Value(json!(self.game_id))),
            ("user_id", Field::Value(json!(self.user_id))),
            ("game", Field::one(records.game(self.game_id))),
            ("user", Field::one(records.user(self.user_id))),
        ]
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.score {
            Some(score) => write!(
                f,
                "<Review ({}) of game {}: {}/10>",
                self.id, self.game_id, score
            ),
            None => write!(f, "<Review ({}) of game {}: unscored>", self.id, self.game_id),
        }
    }
}
