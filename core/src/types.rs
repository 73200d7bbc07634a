//! Domain DTO for the animales API.
//!
//! # Design
//! One type covers both the saved and the unsaved record: `id` is `None`
//! until the server assigns one. The JSON field names are the API's own
//! (`nombre`, `especie`, `habitat`, `dieta`) and must not change.
//! Integration tests against the mock server catch schema drift.

use serde::{Deserialize, Serialize};

/// An animal record as exchanged with the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Animal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nombre: String,
    pub especie: String,
    pub habitat: String,
    pub dieta: String,
}

impl Animal {
    /// Build an unsaved record from its four fields.
    pub fn new(
        nombre: impl Into<String>,
        especie: impl Into<String>,
        habitat: impl Into<String>,
        dieta: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            nombre: nombre.into(),
            especie: especie.into(),
            habitat: habitat.into(),
            dieta: dieta.into(),
        }
    }

    /// A record is saved once the server has assigned it a non-empty id.
    pub fn is_saved(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Returns these values carrying `id`, replacing any id already present.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// True when the four data fields match, ignoring `id`.
    pub fn same_fields(&self, other: &Animal) -> bool {
        self.nombre == other.nombre
            && self.especie == other.especie
            && self.habitat == other.habitat
            && self.dieta == other.dieta
    }
}
