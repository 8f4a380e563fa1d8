//! Submission Validation
//!
//! Runs every rule over the dish blocks, marks offending fields and
//! collects the messages in the order they were found.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationReport, MIN_ONE_DISH};
use crate::models::{trim_field, DishEntry, FieldKind};
use crate::price::parse_price;

/// Latin or Cyrillic letters and whitespace, nothing else
static DISH_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-Я\s]+$").expect("dish name pattern is valid"));

/// Check one required field, returning the message for its first failed rule
pub fn check_field(kind: FieldKind, label: &str, raw: &str) -> Option<String> {
    let value = trim_field(raw);
    if value.is_empty() {
        return Some(format!("Field \"{}\" must not be empty.", label));
    }
    match kind {
        FieldKind::Name => {
            if !DISH_NAME_PATTERN.is_match(value) {
                return Some(format!("Field \"{}\" must contain only letters.", label));
            }
        }
        FieldKind::Price => match parse_price(value) {
            None => return Some(format!("Field \"{}\" must be a number.", label)),
            Some(price) if price <= 0.0 => {
                return Some(format!("Field \"{}\" must be a positive number.", label));
            }
            Some(_) => {}
        },
    }
    None
}

/// Validate all blocks; `Err` means the submission must not go out.
///
/// Failing fields get their error marker set. Markers from earlier passes
/// are left as they are.
pub fn validate_dishes(dishes: &mut [DishEntry]) -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    if dishes.is_empty() {
        report.push(MIN_ONE_DISH);
    }

    for dish in dishes.iter_mut() {
        for kind in FieldKind::REQUIRED {
            if let Some(message) = check_field(kind, dish.label(kind), dish.value(kind)) {
                dish.mark_errored(kind);
                report.push(message);
            }
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(index: usize, name: &str, price: &str) -> DishEntry {
        let mut entry = DishEntry::new(index as u32, index);
        entry.name = name.to_string();
        entry.price = price.to_string();
        entry
    }

    #[test]
    fn test_name_shapes() {
        assert_eq!(check_field(FieldKind::Name, "N", "Pasta"), None);
        assert_eq!(check_field(FieldKind::Name, "N", "Паста"), None);
        assert_eq!(check_field(FieldKind::Name, "N", " Green tea "), None);
        assert_eq!(
            check_field(FieldKind::Name, "N", "Pasta123"),
            Some("Field \"N\" must contain only letters.".to_string())
        );
        // ё sits outside the а-я range
        assert!(check_field(FieldKind::Name, "N", "Ёжик").is_some());
    }

    #[test]
    fn test_price_shapes() {
        assert_eq!(check_field(FieldKind::Price, "P", "12.50"), None);
        assert_eq!(
            check_field(FieldKind::Price, "P", "abc"),
            Some("Field \"P\" must be a number.".to_string())
        );
        assert_eq!(
            check_field(FieldKind::Price, "P", "-5"),
            Some("Field \"P\" must be a positive number.".to_string())
        );
        assert_eq!(
            check_field(FieldKind::Price, "P", "0"),
            Some("Field \"P\" must be a positive number.".to_string())
        );
    }

    #[test]
    fn test_blank_is_one_presence_error() {
        let mut dishes = vec![dish(0, "   ", "4")];
        let report = validate_dishes(&mut dishes).unwrap_err();
        assert_eq!(report.messages, vec!["Field \"Dish name 1:\" must not be empty.".to_string()]);
        assert!(dishes[0].name_errored);
        assert!(!dishes[0].price_errored);
    }

    #[test]
    fn test_valid_single_dish_passes() {
        let mut dishes = vec![dish(0, "Soup", "9.99")];
        assert_eq!(validate_dishes(&mut dishes), Ok(()));
        assert!(!dishes[0].name_errored && !dishes[0].price_errored);
    }

    #[test]
    fn test_errors_follow_field_order() {
        let mut dishes = vec![dish(0, "", "-1")];
        let report = validate_dishes(&mut dishes).unwrap_err();
        assert_eq!(
            report.joined(),
            "Field \"Dish name 1:\" must not be empty.\nField \"Price 1:\" must be a positive number."
        );
    }

    #[test]
    fn test_bom_only_is_empty() {
        assert_eq!(
            check_field(FieldKind::Name, "N", "\u{FEFF}"),
            Some("Field \"N\" must not be empty.".to_string())
        );
        assert_eq!(
            check_field(FieldKind::Price, "P", "\u{FEFF}"),
            Some("Field \"P\" must not be empty.".to_string())
        );
    }

    #[test]
    fn test_no_dishes() {
        let mut dishes: Vec<DishEntry> = Vec::new();
        let report = validate_dishes(&mut dishes).unwrap_err();
        assert_eq!(report.messages, vec![MIN_ONE_DISH.to_string()]);
    }

    #[test]
    fn test_markers_survive_later_pass() {
        let mut dishes = vec![dish(0, "Tea1", "2")];
        assert!(validate_dishes(&mut dishes).is_err());
        dishes[0].name = "Tea".to_string();
        assert_eq!(validate_dishes(&mut dishes), Ok(()));
        assert!(dishes[0].name_errored);
    }
}
