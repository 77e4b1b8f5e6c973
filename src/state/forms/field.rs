//! Form field value objects

use crate::state::models::Location;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Location(Location),
    Choice(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s,
            _ => "",
        }
    }

    /// Get the numeric value (returns NaN for non-numeric fields)
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            _ => f64::NAN,
        }
    }

    /// Get the location value if this is a location field
    pub fn as_location(&self) -> Option<Location> {
        match self {
            FieldValue::Location(l) => Some(*l),
            _ => None,
        }
    }

    /// True when the field holds its empty/unset value
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.is_empty(),
            FieldValue::Number(n) => n.is_nan(),
            FieldValue::Location(_) => false,
        }
    }
}

/// Category of a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Length,
    Range,
    Format,
    CrossField,
}

/// A validation error with an explicit kind tag and a human-readable message
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validation and interaction state attached to a field
#[derive(Debug, Clone, Default)]
pub struct FieldMeta {
    /// Ordered error list; the first error is authoritative for display
    pub errors: Vec<FieldError>,
    /// Set once the value has been changed through the binding
    pub dirty: bool,
    /// Set once the field has been blurred
    pub touched: bool,
}

impl FieldMeta {
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Coerce raw keyed-in text to a number.
///
/// Non-numeric input coerces to NaN, which the field binding accepts;
/// rejecting it is the validator's job.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Transient raw-text buffer for a numeric field.
///
/// Keeps what the user actually typed (including trailing dots and a lone
/// minus) so editing feels natural while the canonical value stays numeric.
#[derive(Debug, Clone, Default)]
pub struct NumberEditor {
    raw: String,
}

impl NumberEditor {
    pub fn from_value(value: f64) -> Self {
        Self {
            raw: if value.is_nan() {
                String::new()
            } else {
                format!("{value}")
            },
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Append a character; returns the re-coerced value when accepted
    pub fn push_char(&mut self, c: char) -> Option<f64> {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.raw.push(c);
            Some(self.value())
        } else {
            None
        }
    }

    /// Remove the last character; returns the re-coerced value
    pub fn backspace(&mut self) -> f64 {
        self.raw.pop();
        self.value()
    }

    pub fn value(&self) -> f64 {
        parse_number(&self.raw)
    }

    /// Re-derive the buffer from the canonical value (external change)
    pub fn sync(&mut self, value: f64) {
        *self = Self::from_value(value);
    }
}
