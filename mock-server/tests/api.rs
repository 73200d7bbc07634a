use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Animal};
use tower::ServiceExt;

const LION: &str =
    r#"{"nombre":"Lion","especie":"Panthera leo","habitat":"Savanna","dieta":"Carnivore"}"#;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_animales_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/animales"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let animales: Vec<Animal> = body_json(resp).await;
    assert!(animales.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_animal_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/animales", LION))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let animal: Animal = body_json(resp).await;
    assert!(!animal.id.is_empty());
    assert_eq!(animal.nombre, "Lion");
    assert_eq!(animal.especie, "Panthera leo");
}

#[tokio::test]
async fn create_animal_ignores_client_id() {
    let body = r#"{"id":"mine","nombre":"Lion","especie":"Panthera leo","habitat":"Savanna","dieta":"Carnivore"}"#;
    let resp = app()
        .oneshot(json_request("POST", "/animales", body))
        .await
        .unwrap();

    let animal: Animal = body_json(resp).await;
    assert_ne!(animal.id, "mine");
}

#[tokio::test]
async fn create_animal_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/animales", r#"{"nombre":"Lion"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get / update / delete on unknown ids ---

#[tokio::test]
async fn get_animal_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/animales/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_animal_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/animales/missing", LION))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_animal_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/animales/missing"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two so ordering is observable
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/animales", LION))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let lion: Animal = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/animales",
            r#"{"nombre":"Wolf","especie":"Canis lupus","habitat":"Forest","dieta":"Carnivore"}"#,
        ))
        .await
        .unwrap();
    let wolf: Animal = body_json(resp).await;

    // list keeps insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/animales"))
        .await
        .unwrap();
    let animales: Vec<Animal> = body_json(resp).await;
    assert_eq!(animales, vec![lion.clone(), wolf.clone()]);

    // full replacement; the path id wins over the body id
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/animales/{}", lion.id),
            r#"{"id":"other","nombre":"Leo","especie":"Panthera leo","habitat":"Zoo","dieta":"Carnivore"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Animal = body_json(resp).await;
    assert_eq!(updated.id, lion.id);
    assert_eq!(updated.nombre, "Leo");
    assert_eq!(updated.habitat, "Zoo");

    // get returns the replacement
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/animales/{}", lion.id)))
        .await
        .unwrap();
    let fetched: Animal = body_json(resp).await;
    assert_eq!(fetched, updated);

    // delete echoes the deleted record
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/animales/{}", lion.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Animal = body_json(resp).await;
    assert_eq!(deleted, updated);

    // get after delete is 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/animales/{}", lion.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // only the wolf remains
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/animales"))
        .await
        .unwrap();
    let animales: Vec<Animal> = body_json(resp).await;
    assert_eq!(animales, vec![wolf]);
}
