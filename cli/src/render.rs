//! Plain-text rendering of each screen.

use std::fmt::Write;

use animales_core::views::{Card, CreateView, DetailView, EditView, FormView, ListView};
use animales_core::{Field, LoadState, Route, Screen};

pub fn render(screen: &Screen) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} ---", header(screen));
    match screen {
        Screen::List(view) => render_list(&mut out, view),
        Screen::Detail(view) => render_detail(&mut out, view),
        Screen::Create(view) => render_create(&mut out, view),
        Screen::Edit(view) => render_edit(&mut out, view),
    }
    out
}

fn header(screen: &Screen) -> String {
    match screen.route() {
        Route::Detail(None) => "detail (no id)".to_string(),
        route => route.to_string(),
    }
}

/// One card: a numbered title line and a details line.
pub fn render_card(index: usize, card: &Card<'_>) -> String {
    let animal = card.animal();
    format!(
        "{index:>3}. {} ({})\n     habitat: {} | diet: {}",
        animal.nombre, animal.especie, animal.habitat, animal.dieta
    )
}

fn render_list(out: &mut String, view: &ListView) {
    let _ = writeln!(out, "Animals");
    if let Some(text) = view.success_message() {
        let _ = writeln!(out, "  ok: {text}");
    }
    if let Some(text) = view.error_message() {
        let _ = writeln!(out, "  error: {text}");
    }
    match view.state() {
        LoadState::Loading => {
            let _ = writeln!(out, "  loading...");
        }
        LoadState::Failed(message) => {
            let _ = writeln!(out, "  error: {message}");
        }
        LoadState::Loaded(animales) if animales.is_empty() => {
            let _ = writeln!(out, "  no animals yet; 'new' adds one");
        }
        LoadState::Loaded(_) => {
            for (i, card) in view.cards().enumerate() {
                let _ = writeln!(out, "{}", render_card(i + 1, &card));
            }
        }
    }
    let _ = writeln!(out, "[show n | edit n | delete n | new | help]");
}

fn render_detail(out: &mut String, view: &DetailView) {
    match view.state() {
        LoadState::Loading => {
            let _ = writeln!(out, "  loading...");
        }
        LoadState::Failed(message) => {
            let _ = writeln!(out, "  error: {message}");
        }
        LoadState::Loaded(animal) => {
            let _ = writeln!(out, "  id:      {}", animal.id.as_deref().unwrap_or("-"));
            let _ = writeln!(out, "  name:    {}", animal.nombre);
            let _ = writeln!(out, "  species: {}", animal.especie);
            let _ = writeln!(out, "  habitat: {}", animal.habitat);
            let _ = writeln!(out, "  diet:    {}", animal.dieta);
        }
    }
    if let Some(text) = view.delete_error() {
        let _ = writeln!(out, "  error: {text}");
    }
    let _ = writeln!(out, "[edit | delete | back]");
}

fn render_create(out: &mut String, view: &CreateView) {
    let _ = writeln!(out, "New animal");
    render_form(out, view.form());
}

fn render_edit(out: &mut String, view: &EditView) {
    let _ = writeln!(out, "Edit animal");
    if view.is_loading() {
        let _ = writeln!(out, "  loading...");
        return;
    }
    render_form(out, view.form());
}

fn render_form(out: &mut String, view: &FormView) {
    for field in Field::ALL {
        let _ = writeln!(
            out,
            "  {:<8} {}",
            format!("{}:", field.name()),
            view.form().value(field)
        );
        if let Some(error) = view.field_error(field) {
            let _ = writeln!(out, "           ! {error}");
        }
    }
    if view.is_sending() {
        let _ = writeln!(out, "  sending...");
    }
    if let Some(error) = view.error() {
        let _ = writeln!(out, "  error: {error}");
    }
    let _ = writeln!(out, "[set <field> <value> | submit | cancel]");
}

#[cfg(test)]
mod tests {
    use super::*;
    use animales_core::views::MISSING_ID;
    use animales_core::{Animal, Outcome, ViewSettings};

    fn mounted(route: Route) -> Screen {
        let mut screen = Screen::mount(&route, &ViewSettings::default());
        screen.enter();
        screen
    }

    #[test]
    fn list_renders_cards_in_order() {
        let mut screen = mounted(Route::List);
        screen.on_outcome(Outcome::Listed(Ok(vec![
            Animal::new("Wolf", "Canis lupus", "Forest", "Carnivore").with_id("2"),
            Animal::new("Lion", "Panthera leo", "Savanna", "Carnivore").with_id("1"),
        ])));
        let text = render(&screen);
        assert!(text.starts_with("--- /animales ---"));
        let wolf = text.find("1. Wolf (Canis lupus)").unwrap();
        let lion = text.find("2. Lion (Panthera leo)").unwrap();
        assert!(wolf < lion);
        assert!(text.contains("habitat: Forest | diet: Carnivore"));
    }

    #[test]
    fn empty_list_hint() {
        let mut screen = mounted(Route::List);
        screen.on_outcome(Outcome::Listed(Ok(Vec::new())));
        assert!(render(&screen).contains("no animals yet"));
    }

    #[test]
    fn detail_without_id_shows_missing_id() {
        let screen = mounted(Route::Detail(None));
        let text = render(&screen);
        assert!(text.starts_with("--- detail (no id) ---"));
        assert!(text.contains(MISSING_ID));
    }

    #[test]
    fn form_shows_field_errors_after_submit() {
        let mut screen = mounted(Route::Create);
        if let Screen::Create(view) = &mut screen {
            view.set(Field::Nombre, "L");
            view.submit();
        }
        let text = render(&screen);
        assert!(text.contains("! Minimum 2 characters"));
        assert!(text.contains("! This field is required"));
        assert!(text.contains("error: Please complete all fields correctly"));
    }

    #[test]
    fn edit_hides_form_while_loading() {
        let screen = mounted(Route::edit("3"));
        let text = render(&screen);
        assert!(text.contains("loading..."));
        assert!(!text.contains("submit"));
    }
}
