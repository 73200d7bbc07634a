//! Stateless HTTP request builder and response parser for the animales API.
//!
//! # Design
//! `AnimalClient` holds only a `base_url` (the collection URL, e.g.
//! `https://host/animales`) and carries no mutable state between calls. Each
//! operation is split into a `build_*` method that produces an `HttpRequest`
//! and a `parse_*` method that consumes an `HttpResponse`. The caller
//! executes the round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Animal;

/// Synchronous, stateless client for the animales collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalClient {
    base_url: String,
}

impl AnimalClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.base_url)
    }

    pub fn build_list_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_by_id(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The payload is sent as given; an unsaved record serializes without `id`.
    pub fn build_create(&self, animal: &Animal) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: json_headers(),
            body: Some(to_json(animal)?),
        })
    }

    /// Full replacement of the record at `id`.
    pub fn build_update(&self, id: &str, animal: &Animal) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(to_json(animal)?),
        })
    }

    pub fn build_delete_by_id(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_all(&self, response: HttpResponse) -> Result<Vec<Animal>, ApiError> {
        parse_body(response)
    }

    pub fn parse_get_by_id(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        parse_body(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        parse_body(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        parse_body(response)
    }

    /// The API echoes the deleted record back as confirmation.
    pub fn parse_delete_by_id(&self, response: HttpResponse) -> Result<Animal, ApiError> {
        parse_body(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(animal: &Animal) -> Result<String, ApiError> {
    serde_json::to_string(animal).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Any non-2xx status is a failure; the status is kept only for diagnostics.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_body<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
