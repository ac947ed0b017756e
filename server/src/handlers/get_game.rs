use serde_json::Value;

use db::{records::RecordSet, repository::Repository, serializer::Serializable};
use errors::Error;

pub fn get_game(repository: &dyn Repository, game_id: i32) -> Result<Value, Error> {
    let game = repository.game(game_id)?;
    let records = RecordSet::load_reviews(repository, vec![game])?;

    match records.game(game_id) {
        Some(game) => Ok(Value::Object(game.to_dict(&records))),
        None => Err(Error::NotFound("Record not found".into())),
    }
}
