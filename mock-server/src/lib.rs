use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub nombre: String,
    pub especie: String,
    pub habitat: String,
    pub dieta: String,
}

/// Body accepted by POST and PUT. A client-sent `id` is tolerated but never
/// trusted: POST assigns a fresh one, PUT keeps the id from the path.
#[derive(Deserialize)]
pub struct AnimalInput {
    #[serde(default)]
    pub id: Option<String>,
    pub nombre: String,
    pub especie: String,
    pub habitat: String,
    pub dieta: String,
}

impl AnimalInput {
    fn into_animal(self, id: String) -> Animal {
        Animal {
            id,
            nombre: self.nombre,
            especie: self.especie,
            habitat: self.habitat,
            dieta: self.dieta,
        }
    }
}

/// Records in insertion order, which is the order `GET /animales` returns.
pub type Db = Arc<RwLock<Vec<Animal>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/animales", get(list_animales).post(create_animal))
        .route(
            "/animales/{id}",
            get(get_animal).put(update_animal).delete(delete_animal),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_animales(State(db): State<Db>) -> Json<Vec<Animal>> {
    Json(db.read().await.clone())
}

async fn create_animal(
    State(db): State<Db>,
    Json(input): Json<AnimalInput>,
) -> (StatusCode, Json<Animal>) {
    let animal = input.into_animal(Uuid::new_v4().to_string());
    tracing::debug!(id = %animal.id, "created animal");
    db.write().await.push(animal.clone());
    (StatusCode::CREATED, Json(animal))
}

async fn get_animal(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, StatusCode> {
    let animales = db.read().await;
    animales
        .iter()
        .find(|a| a.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_animal(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<AnimalInput>,
) -> Result<Json<Animal>, StatusCode> {
    let mut animales = db.write().await;
    let slot = animales
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = input.into_animal(id);
    Ok(Json(slot.clone()))
}

async fn delete_animal(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Animal>, StatusCode> {
    let mut animales = db.write().await;
    let pos = animales
        .iter()
        .position(|a| a.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    tracing::debug!(%id, "deleted animal");
    Ok(Json(animales.remove(pos)))
}
