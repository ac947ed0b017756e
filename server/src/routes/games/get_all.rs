use actix_web::web::{block, Data, Json};
use serde_json::Value;

use db::repository::Storage;
use errors::Error;

use crate::handlers::list_games;

pub async fn get_all(storage: Data<dyn Storage>) -> Result<Json<Vec<Value>>, Error> {
    let games = block(move || {
        let repository = storage.checkout()?;
        list_games(&*repository)
    })
    .await??;

    Ok(Json(games))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use db::memory::MemoryStore;
    use db::models::{NewGame, NewReview};

    use crate::tests::helpers::tests::{test_get, test_get_status};

    #[actix_rt::test]
    async fn test_games_empty() {
        let res: (u16, Vec<Value>) = test_get(MemoryStore::new(), "/games").await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1.len(), 0);
    }

    #[actix_rt::test]
    async fn test_games_populated() {
        let mut store = MemoryStore::new();
        let mega = store
            .add_game(NewGame::new("Mega Adventure", "Survival", "XBox", 30))
            .unwrap();
        let golf = store
            .add_game(NewGame::new("Golf Pro IV", "Sports", "PlayStation", 20))
            .unwrap();
        let jose = store.add_user("Jose");
        store
            .add_review(NewReview::new(9, "Amazing action", mega.id, jose.id))
            .unwrap();
        store
            .add_review(NewReview::new(2, "Boring", golf.id, jose.id))
            .unwrap();

        let (status, body): (u16, Vec<Value>) = test_get(store, "/games").await;
        assert_eq!(status, 200);

        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["title"], "Mega Adventure");
        assert_eq!(body[1]["title"], "Golf Pro IV");

        for game in &body {
            let reviews = game["reviews"].as_array().unwrap();
            assert_eq!(reviews.len(), 1);
            assert!(reviews[0].get("game").is_none());
            assert_eq!(reviews[0]["user"]["name"], "Jose");
            assert!(reviews[0]["user"].get("reviews").is_none());
        }
    }

    #[actix_rt::test]
    async fn test_games_storage_unavailable() {
        let status = test_get_status(MemoryStore::unavailable(), "/games").await;
        assert_eq!(status, 500);
    }
}
