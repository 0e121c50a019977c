use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationErrors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Product = Model;

pub const MSG_NOT_BLANK: &str = "no debe estar vacío";
pub const MSG_NOT_NULL: &str = "no debe ser nulo";
pub const MSG_MIN_ZERO: &str = "debe ser mayor que o igual a 0";

/// Product payload as received from a client, before validation.
///
/// Every field is optional so a missing field is reported as a violation
/// instead of a deserialization failure. A client-supplied `id` is accepted
/// and ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Validated product fields, ready to be inserted or written over a row.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

fn not_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

/// Check every field of `input`, collecting all violations.
pub fn validate(input: &ProductInput) -> Result<ProductDraft, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = not_blank(&input.name);
    if name.is_none() {
        errors.push("name", MSG_NOT_BLANK);
    }
    let description = not_blank(&input.description);
    if description.is_none() {
        errors.push("description", MSG_NOT_BLANK);
    }
    match input.price {
        None => errors.push("price", MSG_NOT_NULL),
        Some(p) if p < 0.0 => errors.push("price", MSG_MIN_ZERO),
        Some(_) => {}
    }

    match (name, description, input.price) {
        (Some(name), Some(description), Some(price)) if errors.is_empty() => Ok(ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            price,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: Option<&str>, description: Option<&str>, price: Option<f64>) -> ProductInput {
        ProductInput {
            id: None,
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            price,
        }
    }

    #[test]
    fn valid_input_becomes_draft() {
        let draft = validate(&input(Some("Chair"), Some("Wooden chair"), Some(49.99))).unwrap();
        assert_eq!(draft, ProductDraft { name: "Chair".into(), description: "Wooden chair".into(), price: 49.99 });
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(validate(&input(Some("Gift"), Some("Free sample"), Some(0.0))).is_ok());
    }

    #[test]
    fn blank_name_reports_only_name() {
        let errs = validate(&input(Some("   "), Some("x"), Some(5.0))).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs.get("name").unwrap().describe(), "El campo name no debe estar vacío");
    }

    #[test]
    fn all_violations_are_collected() {
        let errs = validate(&ProductInput::default()).unwrap_err();
        let fields: Vec<_> = errs.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "description", "price"]);
        assert_eq!(errs.get("price").unwrap().message, MSG_NOT_NULL);
    }

    #[test]
    fn negative_price_is_rejected() {
        let errs = validate(&input(Some("a"), Some("b"), Some(-0.01))).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs.get("price").unwrap().message, MSG_MIN_ZERO);
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let errs = validate(&input(None, Some("x"), Some(-1.0))).unwrap_err();
        let json = serde_json::to_value(&errs).unwrap();
        assert_eq!(json["name"], "El campo name no debe estar vacío");
        assert_eq!(json["price"], "El campo price debe ser mayor que o igual a 0");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn input_ignores_unknown_and_id_fields() {
        let parsed: ProductInput =
            serde_json::from_str(r#"{"id":7,"name":"n","description":"d","price":1,"extra":true}"#).unwrap();
        assert_eq!(parsed.id, Some(7));
        let draft = validate(&parsed).unwrap();
        assert_eq!(draft.price, 1.0);
    }
}
