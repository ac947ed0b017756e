use actix_web::web::{block, Data, Json, Path};
use serde_json::Value;

use db::repository::Storage;
use errors::Error;

use crate::handlers::get_game_users;

pub async fn get_users(
    storage: Data<dyn Storage>,
    game_id: Path<i32>,
) -> Result<Json<Vec<Value>>, Error> {
    let game_id = game_id.into_inner();

    let users = block(move || {
        let repository = storage.checkout()?;
        get_game_users(&*repository, game_id)
    })
    .await??;

    Ok(Json(users))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use db::memory::MemoryStore;
    use db::models::{NewGame, NewReview};
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::test_get;

    #[actix_rt::test]
    async fn test_get_users_in_review_order() {
        let mut store = MemoryStore::new();
        let mega = store
            .add_game(NewGame::new("Mega Adventure", "Survival", "XBox", 30))
            .unwrap();
        let jose = store.add_user("Jose");
        let joshua = store.add_user("Joshua");
        store
            .add_review(NewReview::new(5, "Not enough levels", mega.id, joshua.id))
            .unwrap();
        store
            .add_review(NewReview::new(9, "Amazing action", mega.id, jose.id))
            .unwrap();
        store
            .add_review(NewReview::new(7, "Better second time", mega.id, joshua.id))
            .unwrap();

        let (status, body): (u16, Vec<Value>) = test_get(store, "/games/users/1").await;
        assert_eq!(status, 200);

        let names: Vec<&str> = body.iter().map(|u| u["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["Joshua", "Jose", "Joshua"]);
        for user in &body {
            assert!(user.get("reviews").is_none());
            assert!(user.get("created_at").is_some());
        }
    }

    #[actix_rt::test]
    async fn test_get_users_no_reviews() {
        let mut store = MemoryStore::new();
        store
            .add_game(NewGame::new("Golf Pro IV", "Sports", "PlayStation", 20))
            .unwrap();

        let (status, body): (u16, Vec<Value>) = test_get(store, "/games/users/1").await;
        assert_eq!(status, 200);
        assert!(body.is_empty());
    }

    #[actix_rt::test]
    async fn test_get_users_game_not_found() {
        let (status, body): (u16, ErrorResponse) =
            test_get(MemoryStore::new(), "/games/users/4").await;
        assert_eq!(status, 404);

        assert_eq!(body.errors.get(0).unwrap(), "Record not found");
    }
}
