//! One record as a card with view/edit/delete actions.

use crate::types::Animal;

/// What the user asked a card to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    View(String),
    Edit(String),
    Delete { id: String, nombre: String },
}

#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    animal: &'a Animal,
}

impl<'a> Card<'a> {
    pub fn new(animal: &'a Animal) -> Self {
        Self { animal }
    }

    pub fn animal(&self) -> &'a Animal {
        self.animal
    }

    // An unsaved record has nothing to view, edit or delete.
    fn saved_id(&self) -> Option<String> {
        if self.animal.is_saved() {
            self.animal.id.clone()
        } else {
            None
        }
    }

    pub fn view(&self) -> Option<CardIntent> {
        self.saved_id().map(CardIntent::View)
    }

    pub fn edit(&self) -> Option<CardIntent> {
        self.saved_id().map(CardIntent::Edit)
    }

    pub fn delete(&self) -> Option<CardIntent> {
        self.saved_id().map(|id| CardIntent::Delete {
            id,
            nombre: self.animal.nombre.clone(),
        })
    }
}
