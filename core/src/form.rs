//! Field validation and touched-state tracking for the animal form.
//!
//! # Design
//! Each field owns an ordered list of `Validator`s and a `touched` flag.
//! Validation is recomputed on demand from the current value; nothing is
//! cached. Every validator except `Required` passes on an empty value, so an
//! empty field reports exactly one error.
//!
//! Turning errors into text is a separate step (`ErrorMessages`) because
//! the create and edit screens resolve the same errors with slightly
//! different message sets.

use std::fmt;

use regex::Regex;

use crate::types::Animal;

/// The four editable fields of an animal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nombre,
    Especie,
    Habitat,
    Dieta,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Nombre, Field::Especie, Field::Habitat, Field::Dieta];

    /// Wire name, identical to the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Especie => "especie",
            Field::Habitat => "habitat",
            Field::Dieta => "dieta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Nombre => "Name",
            Field::Especie => "Species",
            Field::Habitat => "Habitat",
            Field::Dieta => "Diet",
        }
    }

    /// Accepts the wire name or the English label, case-insensitively.
    pub fn parse(s: &str) -> Option<Field> {
        let s = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s) || f.label().eq_ignore_ascii_case(s))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single rule applied to a field's value.
#[derive(Debug, Clone)]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    /// Numeric lower bound; non-numeric values are not checked.
    Min(f64),
    /// Numeric upper bound; non-numeric values are not checked.
    Max(f64),
    Pattern(Regex),
}

impl Validator {
    fn check(&self, value: &str) -> Option<FieldError> {
        if let Validator::Required = self {
            return value.is_empty().then_some(FieldError::Required);
        }
        if value.is_empty() {
            return None;
        }
        let length = value.chars().count();
        match self {
            Validator::Required => None,
            Validator::MinLength(required) => (length < *required).then_some(FieldError::MinLength {
                required: *required,
                actual: length,
            }),
            Validator::MaxLength(required) => (length > *required).then_some(FieldError::MaxLength {
                required: *required,
                actual: length,
            }),
            Validator::Min(min) => {
                let actual = value.trim().parse::<f64>().ok()?;
                (actual < *min).then_some(FieldError::Min { min: *min, actual })
            }
            Validator::Max(max) => {
                let actual = value.trim().parse::<f64>().ok()?;
                (actual > *max).then_some(FieldError::Max { max: *max, actual })
            }
            Validator::Pattern(regex) => (!regex.is_match(value)).then_some(FieldError::Pattern),
        }
    }
}

/// One failed validator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required,
    MinLength { required: usize, actual: usize },
    MaxLength { required: usize, actual: usize },
    Min { min: f64, actual: f64 },
    Max { max: f64, actual: f64 },
    Pattern,
}

/// Message set used to turn `FieldError`s into user-facing text.
///
/// Resolution order is fixed: required, minlength, maxlength, min, max,
/// pattern, then the generic fallback. Without a `pattern` message a pattern
/// violation falls through to the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessages {
    pub pattern: Option<&'static str>,
}

impl ErrorMessages {
    pub const CREATE: ErrorMessages = ErrorMessages { pattern: None };
    pub const EDIT: ErrorMessages = ErrorMessages {
        pattern: Some("Invalid URL (must start with http:// or https://)"),
    };

    /// `None` when there is nothing to report.
    pub fn resolve(&self, errors: &[FieldError]) -> Option<String> {
        if errors.is_empty() {
            return None;
        }
        let find = |pred: fn(&FieldError) -> bool| errors.iter().find(|e| pred(e));

        if find(|e| matches!(e, FieldError::Required)).is_some() {
            return Some("This field is required".to_string());
        }
        if let Some(FieldError::MinLength { required, .. }) =
            find(|e| matches!(e, FieldError::MinLength { .. }))
        {
            return Some(format!("Minimum {required} characters"));
        }
        if let Some(FieldError::MaxLength { required, .. }) =
            find(|e| matches!(e, FieldError::MaxLength { .. }))
        {
            return Some(format!("Maximum {required} characters"));
        }
        if let Some(FieldError::Min { min, .. }) = find(|e| matches!(e, FieldError::Min { .. })) {
            return Some(format!("The minimum value is {min}"));
        }
        if let Some(FieldError::Max { max, .. }) = find(|e| matches!(e, FieldError::Max { .. })) {
            return Some(format!("The maximum value is {max}"));
        }
        if let (Some(text), Some(_)) = (self.pattern, find(|e| matches!(e, FieldError::Pattern))) {
            return Some(text.to_string());
        }
        Some("Invalid field".to_string())
    }
}

#[derive(Debug, Clone, Default)]
struct Control {
    value: String,
    touched: bool,
    validators: Vec<Validator>,
}

impl Control {
    fn with(validators: Vec<Validator>) -> Self {
        Self {
            validators,
            ..Self::default()
        }
    }

    fn errors(&self) -> Vec<FieldError> {
        self.validators
            .iter()
            .filter_map(|v| v.check(&self.value))
            .collect()
    }
}

/// Form state for one animal: values, touched flags and validators.
#[derive(Debug, Clone)]
pub struct AnimalForm {
    controls: [Control; 4],
}

impl Default for AnimalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimalForm {
    /// Empty form with the standard rules: every field required, `nombre`
    /// at least 2 characters, `especie` at least 3.
    pub fn new() -> Self {
        Self {
            controls: [
                Control::with(vec![Validator::Required, Validator::MinLength(2)]),
                Control::with(vec![Validator::Required, Validator::MinLength(3)]),
                Control::with(vec![Validator::Required]),
                Control::with(vec![Validator::Required]),
            ],
        }
    }

    /// Replace the rules of one field.
    pub fn with_validators(mut self, field: Field, validators: Vec<Validator>) -> Self {
        self.controls[field.index()].validators = validators;
        self
    }

    pub fn value(&self, field: Field) -> &str {
        &self.controls[field.index()].value
    }

    /// User input: stores the value and marks the field touched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let control = &mut self.controls[field.index()];
        control.value = value.into();
        control.touched = true;
    }

    pub fn mark_all_touched(&mut self) {
        for control in &mut self.controls {
            control.touched = true;
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.controls[field.index()].touched
    }

    pub fn errors(&self, field: Field) -> Vec<FieldError> {
        self.controls[field.index()].errors()
    }

    pub fn is_field_valid(&self, field: Field) -> bool {
        self.errors(field).is_empty()
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.is_field_valid(f))
    }

    /// Only touched fields show their errors.
    pub fn shows_error(&self, field: Field) -> bool {
        self.is_touched(field) && !self.is_field_valid(field)
    }

    /// The visible error text for `field`, if any.
    pub fn error_message(&self, field: Field, messages: &ErrorMessages) -> Option<String> {
        if !self.shows_error(field) {
            return None;
        }
        messages.resolve(&self.errors(field))
    }

    /// Current values as an unsaved record.
    pub fn values(&self) -> Animal {
        Animal::new(
            self.value(Field::Nombre),
            self.value(Field::Especie),
            self.value(Field::Habitat),
            self.value(Field::Dieta),
        )
    }

    /// Fill the fields from a fetched record without touching them.
    pub fn patch(&mut self, animal: &Animal) {
        self.controls[Field::Nombre.index()].value = animal.nombre.clone();
        self.controls[Field::Especie.index()].value = animal.especie.clone();
        self.controls[Field::Habitat.index()].value = animal.habitat.clone();
        self.controls[Field::Dieta.index()].value = animal.dieta.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(nombre: &str, especie: &str, habitat: &str, dieta: &str) -> AnimalForm {
        let mut form = AnimalForm::new();
        form.set(Field::Nombre, nombre);
        form.set(Field::Especie, especie);
        form.set(Field::Habitat, habitat);
        form.set(Field::Dieta, dieta);
        form
    }

    #[test]
    fn empty_form_is_invalid_but_shows_nothing() {
        let form = AnimalForm::new();
        assert!(!form.is_valid());
        for field in Field::ALL {
            assert!(!form.shows_error(field));
            assert_eq!(form.error_message(field, &ErrorMessages::CREATE), None);
        }
    }

    #[test]
    fn minimum_valid_values_pass() {
        let form = filled("Ox", "Bos", "F", "G");
        assert!(form.is_valid());
    }

    #[test]
    fn short_values_fail_with_bound_in_message() {
        let form = filled("O", "Bo", "Farm", "Grass");
        assert!(!form.is_valid());
        assert_eq!(
            form.error_message(Field::Nombre, &ErrorMessages::CREATE).as_deref(),
            Some("Minimum 2 characters")
        );
        assert_eq!(
            form.error_message(Field::Especie, &ErrorMessages::CREATE).as_deref(),
            Some("Minimum 3 characters")
        );
        assert_eq!(form.error_message(Field::Habitat, &ErrorMessages::CREATE), None);
    }

    #[test]
    fn empty_value_reports_only_required() {
        let mut form = AnimalForm::new();
        form.set(Field::Nombre, "");
        assert_eq!(form.errors(Field::Nombre), vec![FieldError::Required]);
        assert_eq!(
            form.error_message(Field::Nombre, &ErrorMessages::EDIT).as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn length_counts_characters() {
        let mut form = AnimalForm::new();
        form.set(Field::Nombre, "Ñ");
        assert!(!form.is_field_valid(Field::Nombre));
        form.set(Field::Nombre, "Ñu");
        assert!(form.is_field_valid(Field::Nombre));
    }

    #[test]
    fn mark_all_touched_reveals_errors() {
        let mut form = AnimalForm::new();
        form.mark_all_touched();
        for field in Field::ALL {
            assert!(form.is_touched(field));
            assert!(form.shows_error(field));
        }
    }

    #[test]
    fn patch_fills_without_touching() {
        let mut form = AnimalForm::new();
        form.patch(&Animal::new("Wolf", "Canis lupus", "Forest", "Carnivore"));
        assert_eq!(form.value(Field::Nombre), "Wolf");
        assert_eq!(form.value(Field::Dieta), "Carnivore");
        assert!(!form.is_touched(Field::Nombre));
        assert!(form.is_valid());
        assert_eq!(
            form.values(),
            Animal::new("Wolf", "Canis lupus", "Forest", "Carnivore")
        );
    }

    #[test]
    fn resolution_order_prefers_min_length_over_pattern() {
        let errors = vec![
            FieldError::Pattern,
            FieldError::MinLength { required: 4, actual: 1 },
        ];
        assert_eq!(
            ErrorMessages::EDIT.resolve(&errors).as_deref(),
            Some("Minimum 4 characters")
        );
    }

    #[test]
    fn pattern_message_differs_between_create_and_edit() {
        let url = Regex::new(r"^https?://").unwrap();
        let mut form = AnimalForm::new().with_validators(Field::Habitat, vec![Validator::Pattern(url)]);
        form.set(Field::Habitat, "ftp://zoo");
        assert_eq!(form.errors(Field::Habitat), vec![FieldError::Pattern]);
        assert_eq!(
            form.error_message(Field::Habitat, &ErrorMessages::EDIT).as_deref(),
            Some("Invalid URL (must start with http:// or https://)")
        );
        assert_eq!(
            form.error_message(Field::Habitat, &ErrorMessages::CREATE).as_deref(),
            Some("Invalid field")
        );
        form.set(Field::Habitat, "https://zoo");
        assert!(form.is_field_valid(Field::Habitat));
    }

    #[test]
    fn numeric_bounds() {
        let mut form = AnimalForm::new().with_validators(
            Field::Dieta,
            vec![Validator::Min(1.0), Validator::Max(10.0), Validator::MaxLength(3)],
        );
        form.set(Field::Dieta, "0");
        assert_eq!(
            form.error_message(Field::Dieta, &ErrorMessages::CREATE).as_deref(),
            Some("The minimum value is 1")
        );
        form.set(Field::Dieta, "11");
        assert_eq!(
            form.error_message(Field::Dieta, &ErrorMessages::CREATE).as_deref(),
            Some("The maximum value is 10")
        );
        form.set(Field::Dieta, "grass");
        assert_eq!(
            form.error_message(Field::Dieta, &ErrorMessages::CREATE).as_deref(),
            Some("Maximum 3 characters")
        );
        form.set(Field::Dieta, "5");
        assert!(form.is_field_valid(Field::Dieta));
    }

    #[test]
    fn field_parse_accepts_names_and_labels() {
        assert_eq!(Field::parse("nombre"), Some(Field::Nombre));
        assert_eq!(Field::parse("Species"), Some(Field::Especie));
        assert_eq!(Field::parse(" DIETA "), Some(Field::Dieta));
        assert_eq!(Field::parse("color"), None);
    }
}
