use serde_json::Value;

use db::{records::RecordSet, repository::Repository, serializer::Serializable};
use errors::Error;

pub fn list_games(repository: &dyn Repository) -> Result<Vec<Value>, Error> {
    let games = repository.games()?;
    let ids: Vec<i32> = games.iter().map(|game| game.id).collect();
    let records = RecordSet::load_reviews(repository, games)?;

    Ok(ids
        .into_iter()
        .filter_map(|id| records.game(id))
        .map(|game| Value::Object(game.to_dict(&records)))
        .collect())
}
