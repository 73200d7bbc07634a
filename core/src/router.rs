//! Client-side routes.
//!
//! | Path | Route |
//! |---|---|
//! | `/animales` | `List` |
//! | `/animales/crear` | `Create` |
//! | `/animales/{id}` | `Detail(Some(id))` |
//! | `/animales/editar/{id}` | `Edit(Some(id))` |
//!
//! Anything else resolves to `List`. `/animales/editar` without an id
//! resolves to `Edit(None)` rather than to a detail screen for the id
//! `editar`, so the edit screen can report the missing id.

use std::fmt;

pub const ROOT: &str = "/animales";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Detail(Option<String>),
    Edit(Option<String>),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["animales"] => Route::List,
            ["animales", "crear"] => Route::Create,
            ["animales", "editar"] => Route::Edit(None),
            ["animales", "editar", id] => Route::Edit(Some((*id).to_string())),
            ["animales", id] => Route::Detail(Some((*id).to_string())),
            _ => Route::List,
        }
    }

    pub fn detail(id: impl Into<String>) -> Route {
        Route::Detail(Some(id.into()))
    }

    pub fn edit(id: impl Into<String>) -> Route {
        Route::Edit(Some(id.into()))
    }

    /// Canonical path. `Detail(None)` has no path of its own and renders as
    /// the bare prefix.
    pub fn path(&self) -> String {
        match self {
            Route::List => ROOT.to_string(),
            Route::Create => format!("{ROOT}/crear"),
            Route::Detail(Some(id)) => format!("{ROOT}/{id}"),
            Route::Detail(None) => ROOT.to_string(),
            Route::Edit(Some(id)) => format!("{ROOT}/editar/{id}"),
            Route::Edit(None) => format!("{ROOT}/editar"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
