//! Field-level constraints.
//!
//! Each constraint inspects one JSON value and either accepts it or returns the
//! human-readable message configured for it. Type constraints (`IsString`,
//! `IsNumber`) are fatal: once they fail, the remaining constraints of the field
//! are not evaluated.

use chrono::{NaiveDateTime, Utc};
use serde_json::Value;
use validator::ValidateEmail;

/// A single rule applied to a field value.
pub trait Constraint: Send + Sync {
    /// Checks the value, returning the constraint's message on violation.
    fn check(&self, value: &Value) -> Result<(), String>;

    /// Whether a violation stops evaluation of the field's remaining constraints.
    fn is_fatal(&self) -> bool {
        false
    }
}

fn verdict(ok: bool, message: &str) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Value must be a JSON string.
pub struct IsString {
    message: &'static str,
}

impl IsString {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Constraint for IsString {
    fn check(&self, value: &Value) -> Result<(), String> {
        verdict(value.is_string(), self.message)
    }

    fn is_fatal(&self) -> bool {
        true
    }
}

/// Value must be a JSON number.
pub struct IsNumber {
    message: &'static str,
}

impl IsNumber {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Constraint for IsNumber {
    fn check(&self, value: &Value) -> Result<(), String> {
        verdict(value.is_number(), self.message)
    }

    fn is_fatal(&self) -> bool {
        true
    }
}

/// Number without fractional part that fits in an `i32`.
pub struct IsInteger {
    message: &'static str,
}

impl IsInteger {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Constraint for IsInteger {
    fn check(&self, value: &Value) -> Result<(), String> {
        let ok = value.as_f64().is_some_and(|n| {
            n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX)
        });
        verdict(ok, self.message)
    }
}

/// Number strictly greater than zero.
pub struct Positive {
    message: &'static str,
}

impl Positive {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Constraint for Positive {
    fn check(&self, value: &Value) -> Result<(), String> {
        verdict(value.as_f64().is_some_and(|n| n > 0.0), self.message)
    }
}

/// String with at least `min` characters (not bytes).
pub struct MinLength {
    min: usize,
    message: &'static str,
}

impl MinLength {
    pub fn new(min: usize, message: &'static str) -> Self {
        Self { min, message }
    }
}

impl Constraint for MinLength {
    fn check(&self, value: &Value) -> Result<(), String> {
        let ok = value
            .as_str()
            .is_some_and(|s| s.chars().count() >= self.min);
        verdict(ok, self.message)
    }
}

/// String equal to one of a closed set of values.
pub struct OneOf {
    allowed: &'static [&'static str],
    message: &'static str,
}

impl OneOf {
    pub fn new(allowed: &'static [&'static str], message: &'static str) -> Self {
        Self { allowed, message }
    }
}

impl Constraint for OneOf {
    fn check(&self, value: &Value) -> Result<(), String> {
        let ok = value.as_str().is_some_and(|s| self.allowed.contains(&s));
        verdict(ok, self.message)
    }
}

/// UTC instant written as `YYYY-MM-DDTHH:MM:SS[.fraction]Z`.
///
/// Uppercase `T` and `Z` are required; numeric offsets and a space separator are
/// rejected.
pub fn parse_instant(s: &str) -> Option<chrono::DateTime<Utc>> {
    if !has_instant_shape(s) {
        return None;
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
        .ok()
        .map(|naive| naive.and_utc())
}

fn has_instant_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 20 || bytes.last() != Some(&b'Z') {
        return false;
    }

    let fixed = bytes[..19].iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        _ => b.is_ascii_digit(),
    });
    let fraction = &bytes[19..bytes.len() - 1];
    let fraction_ok = fraction.is_empty()
        || (fraction.len() > 1
            && fraction[0] == b'.'
            && fraction[1..].iter().all(u8::is_ascii_digit));

    fixed && fraction_ok
}

/// UTC instant, see [`parse_instant`].
pub struct DateTime {
    message: &'static str,
}

impl DateTime {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Constraint for DateTime {
    fn check(&self, value: &Value) -> Result<(), String> {
        let ok = value
            .as_str()
            .is_some_and(|s| parse_instant(s).is_some());
        verdict(ok, self.message)
    }
}

/// Syntactically valid e-mail address.
pub struct Email {
    message: &'static str,
}

impl Email {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Constraint for Email {
    fn check(&self, value: &Value) -> Result<(), String> {
        verdict(
            value.as_str().is_some_and(|s| s.validate_email()),
            self.message,
        )
    }
}
