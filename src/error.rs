//! Form Errors
//!
//! Setup, removal and validation failures.

use std::fmt;

/// Message shared by the removal floor and the cardinality rule
pub const MIN_ONE_DISH: &str = "An order must contain at least one item.";

/// Controller-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// A required page element is missing; the controller stays disabled
    MissingAnchor(String),
    /// Removal would leave a new order without dishes
    BelowMinimum,
    /// No dish block with this key
    UnknownDish(u32),
    /// A browser API call failed
    Dom(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingAnchor(what) => write!(f, "Required element not found: {}", what),
            FormError::BelowMinimum => write!(f, "{}", MIN_ONE_DISH),
            FormError::UnknownDish(key) => write!(f, "No dish block with key {}", key),
            FormError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for FormError {}

impl From<wasm_bindgen::JsValue> for FormError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        FormError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type FormResult<T> = Result<T, FormError>;

/// Messages collected by one validation pass, in discovery order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub messages: Vec<String>,
}

impl ValidationReport {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages as one notice, one per line
    pub fn joined(&self) -> String {
        self.messages.join("\n")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl std::error::Error for ValidationReport {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_minimum_message() {
        assert_eq!(FormError::BelowMinimum.to_string(), MIN_ONE_DISH);
    }

    #[test]
    fn test_report_joined() {
        let mut report = ValidationReport::default();
        assert!(report.is_empty());
        report.push("first");
        report.push("second");
        assert_eq!(report.joined(), "first\nsecond");
    }
}
