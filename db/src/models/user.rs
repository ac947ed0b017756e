use std::fmt;

use chrono::{DateTime, Utc};
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde_json::json;

use errors::Error;

use crate::records::RecordSet;
use crate::schema::users;
use crate::serializer::{timestamp, Field, RecordKey, Serializable};

#[derive(Clone, Debug, Identifiable, PartialEq, Queryable)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub name: Option<String>,
}

impl User {
    pub fn create(conn: &PgConnection, name: String) -> Result<User, Error> {
        let user = diesel::insert_into(users::table)
            .values(NewUser { name: Some(name) })
            .get_result(conn)?;

        Ok(user)
    }

    pub fn find_by_ids(conn: &PgConnection, user_ids: &[i32]) -> Result<Vec<User>, Error> {
        use crate::schema::users::dsl::{id, users};

        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let results = users
            .filter(id.eq_any(user_ids.to_vec()))
            .order(id)
            .load::<User>(conn)?;

        Ok(results)
    }
}

impl Serializable for User {
    fn key(&self) -> RecordKey {
        RecordKey::new("users", self.id)
    }

    fn serialize_rules(&self) -> &'static [&'static str] {
        &["-reviews.user"]
    }

    fn fields<'a>(&'a self, records: &'a RecordSet) -> Vec<(&'static str, Field<'a>)> {
        vec![
            ("id", Field::Value(json!(self.id))),
            ("name", Field::Value(json!(self.name))),
            ("created_at", Field::Value(timestamp(Some(&self.created_at)))),
            ("updated_at", Field::Value(timestamp(self.updated_at.as_ref()))),
            ("reviews", Field::many(records.reviews_of_user(self.id))),
        ]
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<User ({}) {}>", self.id, self.name.as_deref().unwrap_or("None"))
    }
}
