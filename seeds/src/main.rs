#[macro_use]
extern crate log;

use std::env;

use diesel::{self, Connection, PgConnection, RunQueryDsl};
use dotenv::dotenv;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use rand::Rng;

use db::{
    get_conn,
    models::{Game, NewGame, NewReview, Review, User},
    new_pool,
    schema::{games, reviews, users},
};
use errors::Error;

fn fake_name<R: Rng>(rng: &mut R) -> String {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    format!("{} {}", first, last)
}

fn seed(conn: &PgConnection) -> Result<(), Error> {
    let mut rng = rand::rng();

    diesel::delete(reviews::table).execute(conn)?;
    diesel::delete(users::table).execute(conn)?;
    diesel::delete(games::table).execute(conn)?;

    let mut seeded_users = vec![];
    for _ in 0..3 {
        let user = User::create(conn, fake_name(&mut rng))?;
        info!("Seeded {}", user);
        seeded_users.push(user);
    }

    let mut seeded_games = vec![];
    for new_game in vec![
        NewGame::new("Mega Adventure", "Survival", "XBox", 30),
        NewGame::new("Golf Pro IV", "Sports", "PlayStation", 20),
        NewGame::new("Dance, dance, dance", "Party", "PlayStation", 7),
    ] {
        let game = Game::create(conn, new_game)?;
        info!("Seeded {}", game);
        seeded_games.push(game);
    }

    for (score, comment, user, game) in vec![
        (9, "Amazing action", 0, 0),
        (2, "Boring", 0, 1),
        (5, "Not enough levels", 1, 0),
        (rng.random_range(0..=10), "confusing instructions", 2, 2),
    ] {
        let review = Review::create(
            conn,
            NewReview::new(score, comment, seeded_games[game].id, seeded_users[user].id),
        )?;
        info!("Seeded {}", review);
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").map_err(|_| {
        error!("DATABASE_URL must be set");
        Error::InternalServerError("DATABASE_URL must be set".into())
    })?;

    let pool = new_pool(&database_url)?;
    let conn = get_conn(&pool)?;

    conn.transaction::<_, Error, _>(|| seed(&conn))?;
    info!("Seeding complete");

    Ok(())
}
