#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{
        test,
        web::{self, Bytes, Data},
        App,
    };
    use serde::de::DeserializeOwned;

    use db::repository::Storage;

    use crate::routes::{not_found, routes};

    async fn get_response<S>(storage: S, route: &str) -> (u16, Bytes)
    where
        S: Storage + 'static,
    {
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let app = test::init_service(
            App::new()
                .app_data(Data::from(storage))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri(route).to_request();
        let res = test::call_service(&app, req).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<S, R>(storage: S, route: &str) -> (u16, R)
    where
        S: Storage + 'static,
        R: DeserializeOwned,
    {
        let (status, body) = get_response(storage, route).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// For responses that carry no JSON body
    pub async fn test_get_status<S>(storage: S, route: &str) -> u16
    where
        S: Storage + 'static,
    {
        get_response(storage, route).await.0
    }
}
