use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// A single constraint violation on an incoming payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self { Self { field, message } }

    /// Client-facing sentence, e.g. `El campo name no debe estar vacío`.
    pub fn describe(&self) -> String {
        format!("El campo {} {}", self.field, self.message)
    }
}

/// Every constraint violation found on a payload, in field declaration order.
///
/// Serializes as a JSON object mapping field name to its described message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed on {} field(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn errors(&self) -> &[FieldError] { &self.0 }

    /// Message for `field`, if that field failed.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for e in &self.0 {
            map.serialize_entry(e.field, &e.describe())?;
        }
        map.end()
    }
}
