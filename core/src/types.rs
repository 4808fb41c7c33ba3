//! Canonical employee record and wire-shape normalization.
//!
//! # Design
//! The backend returns records with unpredictable key casing and a fixed set
//! of Spanish variants (`nombre`/`Nombre`, `edad`/`Edad`, ...), depending on
//! how the remote dataset was provisioned. `normalize` folds every known
//! alias into one canonical shape exactly once, so nothing downstream ever
//! probes alternate casings again. Alias order is load-bearing: when a
//! response carries two casings of the same logical field, the first listed
//! key wins.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::ApiError;

/// A scalar as the backend returns it. Ids and ages arrive sometimes as
/// numbers and sometimes as strings; the canonical record keeps the original
/// representation instead of guessing a coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(Number::from(n))
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Canonical employee record used by everything above the wire.
///
/// After `normalize`, all four display fields are populated (empty string
/// when the source had nothing usable). `id` stays `None` when the backend
/// omitted it entirely; that is a data-integrity problem for the caller to
/// surface, not something normalization can invent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: Option<Scalar>,
    pub name: String,
    pub age: Scalar,
    pub position: String,
    pub phone: String,
}

/// Form input for create and update. Age is numeric by construction; the
/// string fields carry whatever the form collected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub name: String,
    pub age: u32,
    pub position: String,
    pub phone: String,
}

impl EmployeeForm {
    /// Presence check mirroring what the form enforces before submitting:
    /// name, position and phone must be non-blank.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty()
            || self.position.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return Err(ApiError::Validation(
                "name, age, position and phone are required".to_string(),
            ));
        }
        Ok(())
    }
}

const ID_KEYS: [&str; 2] = ["id", "Id"];
const NAME_KEYS: [&str; 4] = ["name", "Name", "nombre", "Nombre"];
const AGE_KEYS: [&str; 4] = ["age", "Age", "edad", "Edad"];
const POSITION_KEYS: [&str; 5] = ["position", "Position", "puesto", "Puesto", "Job"];
const PHONE_KEYS: [&str; 5] = ["phone", "Phone", "telefono", "Telefono", "PhoneNumber"];

/// Fold a raw wire record into the canonical shape.
///
/// Total: any input, including non-objects, yields a record (with empty
/// display fields and no id in the degenerate case).
pub fn normalize(raw: &Value) -> Employee {
    Employee {
        id: first_scalar(raw, &ID_KEYS),
        name: first_text(raw, &NAME_KEYS),
        age: first_scalar(raw, &AGE_KEYS).unwrap_or_else(|| Scalar::Text(String::new())),
        position: first_text(raw, &POSITION_KEYS),
        phone: first_text(raw, &PHONE_KEYS),
    }
}

/// First alias whose value is a usable scalar (number or string).
fn first_scalar(raw: &Value, keys: &[&str]) -> Option<Scalar> {
    keys.iter().find_map(|key| match raw.get(key) {
        Some(Value::Number(n)) => Some(Scalar::Number(n.clone())),
        Some(Value::String(s)) => Some(Scalar::Text(s.clone())),
        _ => None,
    })
}

/// First alias with a usable textual value, else empty string. Numbers are
/// rendered; null and structured values fall through to the next alias.
fn first_text(raw: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| match raw.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blank() -> Employee {
        Employee {
            id: None,
            name: String::new(),
            age: Scalar::Text(String::new()),
            position: String::new(),
            phone: String::new(),
        }
    }

    #[test]
    fn first_listed_alias_wins_for_every_field() {
        let raw = json!({
            "id": 1, "Id": 2,
            "name": "A", "Name": "B",
            "age": 30, "Age": 40,
            "position": "Dev", "Position": "Lead",
            "phone": "+1", "Phone": "+2",
        });
        let employee = normalize(&raw);
        assert_eq!(employee.id, Some(Scalar::from(1u64)));
        assert_eq!(employee.name, "A");
        assert_eq!(employee.age, Scalar::from(30u64));
        assert_eq!(employee.position, "Dev");
        assert_eq!(employee.phone, "+1");
    }

    #[test]
    fn spanish_aliases_fill_the_canonical_fields() {
        let raw = json!({
            "Id": 7,
            "Nombre": "Ana",
            "Edad": 30,
            "Puesto": "Dev",
            "Telefono": "+1",
        });
        let employee = normalize(&raw);
        assert_eq!(employee.id, Some(Scalar::from(7u64)));
        assert_eq!(employee.name, "Ana");
        assert_eq!(employee.age, Scalar::from(30u64));
        assert_eq!(employee.position, "Dev");
        assert_eq!(employee.phone, "+1");
    }

    #[test]
    fn legacy_job_and_phonenumber_aliases_still_land() {
        let raw = json!({ "Job": "Dev", "PhoneNumber": "+34 600 000 000" });
        let employee = normalize(&raw);
        assert_eq!(employee.position, "Dev");
        assert_eq!(employee.phone, "+34 600 000 000");
    }

    #[test]
    fn empty_object_yields_the_blank_record() {
        assert_eq!(normalize(&json!({})), blank());
    }

    #[test]
    fn non_object_input_never_panics() {
        assert_eq!(normalize(&Value::Null), blank());
        assert_eq!(normalize(&json!([1, 2, 3])), blank());
        assert_eq!(normalize(&json!("oops")), blank());
    }

    #[test]
    fn null_values_fall_through_to_the_next_alias() {
        let raw = json!({ "name": null, "Nombre": "Ana" });
        assert_eq!(normalize(&raw).name, "Ana");
    }

    #[test]
    fn string_ids_and_ages_keep_their_text_form() {
        let raw = json!({ "id": "a1b2", "edad": "30" });
        let employee = normalize(&raw);
        assert_eq!(employee.id, Some(Scalar::from("a1b2")));
        assert_eq!(employee.age, Scalar::from("30"));
    }

    #[test]
    fn numeric_display_fields_are_rendered() {
        let raw = json!({ "phone": 600123123u64 });
        assert_eq!(normalize(&raw).phone, "600123123");
    }

    #[test]
    fn form_with_all_fields_passes_validation() {
        let form = EmployeeForm {
            name: "Ana".to_string(),
            age: 30,
            position: "Dev".to_string(),
            phone: "+1".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn form_with_blank_field_fails_validation() {
        let form = EmployeeForm {
            name: "Ana".to_string(),
            age: 30,
            position: "   ".to_string(),
            phone: "+1".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
