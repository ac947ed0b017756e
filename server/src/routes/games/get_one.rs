use actix_web::web::{block, Data, Json, Path};
use serde_json::Value;

use db::repository::Storage;
use errors::Error;

use crate::handlers::get_game;

pub async fn get_one(
    storage: Data<dyn Storage>,
    game_id: Path<i32>,
) -> Result<Json<Value>, Error> {
    let game_id = game_id.into_inner();

    let game = block(move || {
        let repository = storage.checkout()?;
        get_game(&*repository, game_id)
    })
    .await??;

    Ok(Json(game))
}
