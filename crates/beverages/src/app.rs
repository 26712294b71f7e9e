use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        beverages::{create_beverage, get_beverage, list_beverages, update_beverage},
        health::livez,
        ingredients::list_ingredients,
        translation::get_translation,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-amz-date")]);

    let beverage_routes = Router::new()
        .route("/beverages", get(list_beverages).post(create_beverage))
        .route("/beverages/ingredients", get(list_ingredients))
        .route(
            "/beverages/{beverageId}",
            get(get_beverage).put(update_beverage),
        )
        .route("/beverages/{beverageId}/translation", get(get_translation))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(beverage_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use async_trait::async_trait;
    use axum::{body::Body, http::Request, response::Response};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use beverages_core::beverage::BeverageIngredient;
    use beverages_core::translation::{Language, Result, Translator};

    use crate::config::Config;
    use crate::storage::InMemoryRepository;

    const COCA_COLA_DESCRIPTION: &str =
        "A carbonated soft drink with a unique blend of natural flavors.";

    /// Translator that counts calls and tags text with the target language.
    #[derive(Default)]
    struct CountingTranslator {
        calls: AtomicUsize,
    }

    impl CountingTranslator {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(
            &self,
            text: &str,
            _source: Language,
            target: Language,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("({target}) {text}"))
        }
    }

    struct TestApp {
        router: Router,
        repo: Arc<InMemoryRepository>,
        translator: Arc<CountingTranslator>,
    }

    fn test_app() -> TestApp {
        let repo = Arc::new(InMemoryRepository::new());
        let translator = Arc::new(CountingTranslator::default());
        let config = Config::default();
        let state = AppState::build(repo.clone(), repo.clone(), translator.clone(), &config);

        TestApp {
            router: create_app(state, config.request_timeout()),
            repo,
            translator,
        }
    }

    fn coca_cola() -> Value {
        json!({
            "id": 1001,
            "name": "Coca-Cola",
            "isCarbonated": true,
            "description": COCA_COLA_DESCRIPTION,
            "price": 1.5,
            "isActive": true
        })
    }

    async fn send(router: &Router, request: Request<Body>) -> Response {
        router.clone().oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &TestApp, beverage: &Value) -> Response {
        send(&app.router, json_request("POST", "/beverages", beverage)).await
    }

    #[tokio::test]
    async fn test_livez() {
        let app = test_app();

        let response = send(&app.router, get_request("/livez")).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_beverages_empty_is_404() {
        let app = test_app();

        let response = send(&app.router, get_request("/beverages")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "No beverages found" })
        );
    }

    #[tokio::test]
    async fn test_create_then_get_and_list() {
        let app = test_app();

        let response = create(&app, &coca_cola()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Beverage added successfully" })
        );

        let response = send(&app.router, get_request("/beverages/1001")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["name"], "Coca-Cola");
        assert_eq!(json["data"]["isCarbonated"], true);
        assert_eq!(json["data"]["translations"], json!({}));

        let response = send(&app.router, get_request("/beverages")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let app = test_app();
        create(&app, &coca_cola()).await;

        let response = create(&app, &coca_cola()).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_without_body() {
        let app = test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/beverages")
            .header("Content-Type", "application/json")
            .body(Body::empty())
            .unwrap();
        let response = send(&app.router, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Missing request body" })
        );
    }

    #[tokio::test]
    async fn test_create_with_wrong_field_type() {
        let app = test_app();
        let mut beverage = coca_cola();
        beverage["price"] = json!("cheap");

        let response = create(&app, &beverage).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Incorrect type. Must match Beverage schema");
        assert!(json["details"].is_string());
    }

    #[tokio::test]
    async fn test_create_with_empty_name() {
        let app = test_app();
        let mut beverage = coca_cola();
        beverage["name"] = json!("  ");

        let response = create(&app, &beverage).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "Incorrect type. Must match Beverage schema",
                "details": "Beverage name cannot be empty"
            })
        );
    }

    #[tokio::test]
    async fn test_get_beverage_with_non_numeric_id() {
        let app = test_app();

        let response = send(&app.router, get_request("/beverages/abc")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Missing beverage ID in path" })
        );
    }

    #[tokio::test]
    async fn test_get_unknown_beverage() {
        let app = test_app();

        let response = send(&app.router, get_request("/beverages/42")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Beverage not found" })
        );
    }

    #[tokio::test]
    async fn test_update_beverage() {
        let app = test_app();
        create(&app, &coca_cola()).await;

        let update = json!({ "price": 1.75, "description": "Classic cola." });
        let response = send(&app.router, json_request("PUT", "/beverages/1001", &update)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Beverage updated successfully" })
        );

        let json = body_json(send(&app.router, get_request("/beverages/1001")).await).await;
        assert_eq!(json["data"]["price"], 1.75);
        assert_eq!(json["data"]["description"], "Classic cola.");
        assert_eq!(json["data"]["name"], "Coca-Cola");
    }

    #[tokio::test]
    async fn test_update_without_fields() {
        let app = test_app();
        create(&app, &coca_cola()).await;

        let update = json!({ "isActive": false });
        let response = send(&app.router, json_request("PUT", "/beverages/1001", &update)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "No valid fields provided for update" })
        );
    }

    #[tokio::test]
    async fn test_update_without_body() {
        let app = test_app();

        let request = Request::builder()
            .method("PUT")
            .uri("/beverages/1001")
            .body(Body::empty())
            .unwrap();
        let response = send(&app.router, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Missing beverage ID or request body" })
        );
    }

    #[tokio::test]
    async fn test_update_unknown_beverage() {
        let app = test_app();

        let update = json!({ "name": "Pepsi" });
        let response = send(&app.router, json_request("PUT", "/beverages/1009", &update)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ingredients_require_beverage_id() {
        let app = test_app();

        for uri in ["/beverages/ingredients", "/beverages/ingredients?beverageId=x"] {
            let response = send(&app.router, get_request(uri)).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({ "message": "Missing beverageId in query string" })
            );
        }
    }

    #[tokio::test]
    async fn test_ingredients_empty_is_404() {
        let app = test_app();

        let response = send(
            &app.router,
            get_request("/beverages/ingredients?beverageId=1001"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "No ingredients found for this beverage" })
        );
    }

    #[tokio::test]
    async fn test_ingredients_for_beverage() {
        let app = test_app();
        app.repo
            .put_ingredient(BeverageIngredient::new(1001, "Sugar", "40g", "Sweetener"))
            .await;
        app.repo
            .put_ingredient(BeverageIngredient::new(
                1001,
                "Carbonated Water",
                "500ml",
                "Base for the beverage",
            ))
            .await;

        let response = send(
            &app.router,
            get_request("/beverages/ingredients?beverageId=1001"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"][0]["ingredientName"], "Carbonated Water");
        assert_eq!(json["data"][1]["ingredientName"], "Sugar");
        assert_eq!(json["data"][1]["beverageId"], 1001);
    }

    #[tokio::test]
    async fn test_translation_is_cached_after_first_request() {
        let app = test_app();
        create(&app, &coca_cola()).await;
        let expected = json!({
            "id": 1001,
            "name": "Coca-Cola",
            "translatedText": format!("(fr) {COCA_COLA_DESCRIPTION}")
        });

        let first = send(
            &app.router,
            get_request("/beverages/1001/translation?language=fr"),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(body_json(first).await, expected);
        assert_eq!(app.translator.calls(), 1);

        let stored = body_json(send(&app.router, get_request("/beverages/1001")).await).await;
        assert_eq!(
            stored["data"]["translations"]["fr"],
            expected["translatedText"]
        );

        let second = send(
            &app.router,
            get_request("/beverages/1001/translation?language=fr"),
        )
        .await;
        assert_eq!(second.status(), StatusCode::OK);
        assert_eq!(body_json(second).await, expected);
        assert_eq!(app.translator.calls(), 1);
    }

    #[tokio::test]
    async fn test_translation_defaults_to_french() {
        let app = test_app();
        create(&app, &coca_cola()).await;

        let response = send(&app.router, get_request("/beverages/1001/translation")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["translatedText"],
            format!("(fr) {COCA_COLA_DESCRIPTION}")
        );
    }

    #[tokio::test]
    async fn test_create_ignores_client_translations() {
        let app = test_app();
        let mut beverage = coca_cola();
        beverage["translations"] = json!({ "fr": "texte du client" });
        assert_eq!(create(&app, &beverage).await.status(), StatusCode::CREATED);

        let stored = body_json(send(&app.router, get_request("/beverages/1001")).await).await;
        assert_eq!(stored["data"]["translations"], json!({}));

        let response = send(
            &app.router,
            get_request("/beverages/1001/translation?language=fr"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["translatedText"],
            format!("(fr) {COCA_COLA_DESCRIPTION}")
        );
        assert_eq!(app.translator.calls(), 1);
    }

    #[tokio::test]
    async fn test_translation_empty_language_defaults_to_french() {
        let app = test_app();
        create(&app, &coca_cola()).await;

        let response = send(
            &app.router,
            get_request("/beverages/1001/translation?language="),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["translatedText"],
            format!("(fr) {COCA_COLA_DESCRIPTION}")
        );
    }

    #[tokio::test]
    async fn test_translation_malformed_query_is_json_400() {
        let app = test_app();
        create(&app, &coca_cola()).await;

        let response = send(
            &app.router,
            get_request("/beverages/1001/translation?language=fr&language=de"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Invalid query string" })
        );
        assert_eq!(app.translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_translation_unsupported_language() {
        let app = test_app();
        create(&app, &coca_cola()).await;

        let response = send(
            &app.router,
            get_request("/beverages/1001/translation?language=xx"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "message": "Invalid target language. Supported languages: en, fr, de, es, zh, ja, ko"
            })
        );
        assert_eq!(app.translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_translation_unknown_beverage() {
        let app = test_app();

        let response = send(
            &app.router,
            get_request("/beverages/404/translation?language=de"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Beverage not found" })
        );
        assert_eq!(app.translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_amz_date() {
        let app = test_app();

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/beverages")
            .header("Origin", "https://example.com")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "x-amz-date")
            .body(Body::empty())
            .unwrap();
        let response = send(&app.router, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
