//! Declarative request validation.
//!
//! A [`Schema`] is an ordered list of [`Field`]s, each holding the [`Constraint`]s
//! that apply to one key of a JSON object. Validation never fails loudly: it
//! returns either a [`Validated`] view of the payload, whose accessors can then be
//! read without further checks, or [`ValidationErrors`] with one message per
//! violated constraint, in declaration order.

pub mod constraint;

use chrono::Utc;
use serde_json::{Map, Value};
use thiserror::Error;

pub use constraint::Constraint;

pub(crate) const NOT_AN_OBJECT: &str = "Corpo da requisição deve ser um objeto JSON";

/// Ordered list of messages describing every violated constraint.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", .0.join("; "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

/// Constraints applied to one key of the payload.
pub struct Field {
    key: &'static str,
    /// Message reported when a required key is absent or `null`; `None` marks the field optional.
    missing: Option<&'static str>,
    constraints: Vec<Box<dyn Constraint>>,
}

impl Field {
    pub fn required(key: &'static str, missing: &'static str) -> Self {
        Self {
            key,
            missing: Some(missing),
            constraints: Vec::new(),
        }
    }

    pub fn optional(key: &'static str) -> Self {
        Self {
            key,
            missing: None,
            constraints: Vec::new(),
        }
    }

    pub fn rule(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    fn check(&self, object: &Map<String, Value>, errors: &mut Vec<String>) {
        let value = match object.get(self.key) {
            Some(Value::Null) | None => {
                if let Some(message) = self.missing {
                    errors.push(message.to_string());
                }
                return;
            }
            Some(value) => value,
        };

        for constraint in &self.constraints {
            if let Err(message) = constraint.check(value) {
                errors.push(message);
                if constraint.is_fatal() {
                    break;
                }
            }
        }
    }
}

/// Validation schema for one request body.
#[derive(Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Checks `payload` against every field.
    ///
    /// # Returns
    /// - `Ok(Validated)` - Every constraint holds
    /// - `Err(ValidationErrors)` - The payload is not an object, or one message per
    ///   violated constraint
    pub fn validate<'a>(&self, payload: &'a Value) -> Result<Validated<'a>, ValidationErrors> {
        let Some(object) = payload.as_object() else {
            return Err(ValidationErrors(vec![NOT_AN_OBJECT.to_string()]));
        };

        let mut errors = Vec::new();
        for field in &self.fields {
            field.check(object, &mut errors);
        }

        if errors.is_empty() {
            Ok(Validated { object })
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

/// Payload that passed its schema.
///
/// Accessors re-read the value with the type the schema declared for the key. A key
/// read with a type its schema does not guarantee is reported as invalid instead of
/// falling back to a default.
#[derive(Debug)]
pub struct Validated<'a> {
    object: &'a Map<String, Value>,
}

impl Validated<'_> {
    fn typed<T>(
        &self,
        key: &str,
        read: impl Fn(&Value) -> Option<T>,
    ) -> Result<T, ValidationErrors> {
        self.object
            .get(key)
            .and_then(read)
            .ok_or_else(|| invalid_field(key))
    }

    pub fn string(&self, key: &str) -> Result<String, ValidationErrors> {
        self.typed(key, |v| v.as_str().map(str::to_string))
    }

    /// `None` when the key is absent or `null`.
    pub fn optional_string(&self, key: &str) -> Result<Option<String>, ValidationErrors> {
        match self.object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.string(key).map(Some),
        }
    }

    pub fn number(&self, key: &str) -> Result<f64, ValidationErrors> {
        self.typed(key, Value::as_f64)
    }

    pub fn integer(&self, key: &str) -> Result<i32, ValidationErrors> {
        self.typed(key, |v| {
            v.as_f64()
                .filter(|n| {
                    n.fract() == 0.0 && *n >= f64::from(i32::MIN) && *n <= f64::from(i32::MAX)
                })
                .map(|n| n as i32)
        })
    }

    pub fn date_time(&self, key: &str) -> Result<chrono::DateTime<Utc>, ValidationErrors> {
        self.typed(key, |v| v.as_str().and_then(constraint::parse_instant))
    }
}

fn invalid_field(key: &str) -> ValidationErrors {
    ValidationErrors(vec![format!("Campo {} inválido", key)])
}
