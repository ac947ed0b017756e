use serde_json::Value;

use db::{records::RecordSet, repository::Repository, serializer::Serializable};
use errors::Error;

/// Everyone who reviewed the game, once per review, without their own reviews.
pub fn get_game_users(repository: &dyn Repository, game_id: i32) -> Result<Vec<Value>, Error> {
    let game = repository.game(game_id)?;
    let records = RecordSet::load_reviews(repository, vec![game])?;

    Ok(records
        .game_users(game_id)
        .into_iter()
        .map(|user| Value::Object(user.to_dict_with(&records, &["-reviews"])))
        .collect())
}
