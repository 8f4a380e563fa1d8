//! Form Models
//!
//! Value records behind the rendered dish blocks.

use serde::{Deserialize, Serialize};

use crate::config::{
    DISH_NAME_PREFIX, DISH_PRICE_PREFIX, EDIT_PATH_MARKER, NAME_LABEL, PRICE_LABEL,
};
use crate::render::field_index;

/// Trim like the browser does: Unicode whitespace plus the BOM
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Whether the page composes a new order or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    /// Decide from the page path; any occurrence of the marker means edit
    pub fn from_path(path: &str) -> Self {
        if path.contains(EDIT_PATH_MARKER) {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Fewest dish blocks a removal may leave behind
    pub fn min_dishes(&self) -> usize {
        match self {
            FormMode::Create => 1,
            FormMode::Edit => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Create => "create",
            FormMode::Edit => "edit",
        }
    }
}

/// The two required inputs of a dish block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Price,
}

impl FieldKind {
    /// Required fields in document order
    pub const REQUIRED: [FieldKind; 2] = [FieldKind::Name, FieldKind::Price];

    pub fn name_prefix(&self) -> &'static str {
        match self {
            FieldKind::Name => DISH_NAME_PREFIX,
            FieldKind::Price => DISH_PRICE_PREFIX,
        }
    }
}

/// One order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishEntry {
    /// Internal identity for routing removal clicks; never submitted
    pub key: u32,
    /// Index baked into field names at creation; not kept in sync
    pub index: usize,
    pub name: String,
    pub price: String,
    /// Hidden identifying value
    pub dish_id: String,
    pub name_label: String,
    pub price_label: String,
    pub name_errored: bool,
    pub price_errored: bool,
}

impl DishEntry {
    /// Create an empty block for position `index`
    pub fn new(key: u32, index: usize) -> Self {
        Self {
            key,
            index,
            name: String::new(),
            price: String::new(),
            dish_id: index.to_string(),
            name_label: format!("{} {}:", NAME_LABEL, index + 1),
            price_label: format!("{} {}:", PRICE_LABEL, index + 1),
            name_errored: false,
            price_errored: false,
        }
    }

    /// Rebuild a server-rendered block; the index comes from the name
    /// field's suffix and empty label texts keep the defaults
    pub fn from_rendered(
        key: u32,
        fallback_index: usize,
        name: RenderedField,
        price: Option<RenderedField>,
        dish_id: Option<String>,
    ) -> Self {
        let index = field_index(&name.name, DISH_NAME_PREFIX).unwrap_or(fallback_index);
        let mut entry = Self::new(key, index);
        entry.name = name.value;
        if !name.label.is_empty() {
            entry.name_label = name.label;
        }
        if let Some(price) = price {
            entry.price = price.value;
            if !price.label.is_empty() {
                entry.price_label = price.label;
            }
        }
        if let Some(dish_id) = dish_id {
            entry.dish_id = dish_id;
        }
        entry
    }

    pub fn value(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Price => &self.price,
        }
    }

    pub fn set_value(&mut self, kind: FieldKind, value: String) {
        match kind {
            FieldKind::Name => self.name = value,
            FieldKind::Price => self.price = value,
        }
    }

    pub fn label(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name_label,
            FieldKind::Price => &self.price_label,
        }
    }

    pub fn is_errored(&self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Name => self.name_errored,
            FieldKind::Price => self.price_errored,
        }
    }

    /// Set the error marker; nothing in the form clears it again
    pub fn mark_errored(&mut self, kind: FieldKind) {
        match kind {
            FieldKind::Name => self.name_errored = true,
            FieldKind::Price => self.price_errored = true,
        }
    }
}

/// An input found in a server-rendered block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedField {
    /// `name` attribute
    pub name: String,
    pub value: String,
    /// Text of the element right before the input
    pub label: String,
}

/// Inputs found in one server-rendered `.dish` block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedBlock {
    pub name: Option<RenderedField>,
    pub price: Option<RenderedField>,
    pub dish_id: Option<String>,
}

/// Records for the blocks that can be taken over, paired with their
/// position among `blocks`. Blocks without a name field are left out.
pub fn seed_dishes(blocks: Vec<RenderedBlock>) -> Vec<(usize, DishEntry)> {
    let mut seeded: Vec<(usize, DishEntry)> = Vec::new();
    for (position, block) in blocks.into_iter().enumerate() {
        let Some(name) = block.name else {
            continue;
        };
        let key = seeded.len() as u32;
        let entry = DishEntry::from_rendered(key, seeded.len(), name, block.price, block.dish_id);
        seeded.push((position, entry));
    }
    seeded
}

/// Name/price pair as logged on a successful submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedLine<'a> {
    pub index: usize,
    pub name: &'a str,
    pub price: &'a str,
}

impl<'a> From<&'a DishEntry> for SubmittedLine<'a> {
    fn from(entry: &'a DishEntry) -> Self {
        Self {
            index: entry.index,
            name: trim_field(&entry.name),
            price: trim_field(&entry.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_path() {
        assert_eq!(FormMode::from_path("/orders/create/"), FormMode::Create);
        assert_eq!(FormMode::from_path("/orders/5/edit/"), FormMode::Edit);
        assert_eq!(FormMode::from_path("/orders/worker_edit"), FormMode::Edit);
        assert_eq!(FormMode::Create.min_dishes(), 1);
        assert_eq!(FormMode::Edit.min_dishes(), 0);
    }

    #[test]
    fn test_new_entry() {
        let entry = DishEntry::new(4, 2);
        assert_eq!(entry.dish_id, "2");
        assert_eq!(entry.name_label, "Dish name 3:");
        assert_eq!(entry.price_label, "Price 3:");
        assert!(!entry.is_errored(FieldKind::Name));
    }

    #[test]
    fn test_error_marker_sticks() {
        let mut entry = DishEntry::new(0, 0);
        entry.mark_errored(FieldKind::Price);
        entry.set_value(FieldKind::Price, "5".to_string());
        assert!(entry.is_errored(FieldKind::Price));
        assert!(!entry.is_errored(FieldKind::Name));
    }

    fn rendered(name: &str, value: &str, label: &str) -> RenderedField {
        RenderedField {
            name: name.to_string(),
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_from_rendered_keeps_server_values() {
        let entry = DishEntry::from_rendered(
            0,
            0,
            rendered("dish_name_3", "Borscht", "Dish name 4:"),
            Some(rendered("dish_price_3", "7.50", "Price 4:")),
            Some("42".to_string()),
        );
        assert_eq!(entry.index, 3);
        assert_eq!(entry.name, "Borscht");
        assert_eq!(entry.price, "7.50");
        assert_eq!(entry.name_label, "Dish name 4:");
        assert_eq!(entry.dish_id, "42");
    }

    #[test]
    fn test_from_rendered_defaults() {
        let entry = DishEntry::from_rendered(1, 2, rendered("dish_name_x", "Tea", ""), None, None);
        assert_eq!(entry.index, 2);
        assert_eq!(entry.name_label, "Dish name 3:");
        assert_eq!(entry.price_label, "Price 3:");
        assert_eq!(entry.price, "");
        assert_eq!(entry.dish_id, "2");
    }

    #[test]
    fn test_seed_skips_blocks_without_name() {
        let blocks = vec![
            RenderedBlock {
                name: None,
                price: Some(rendered("dish_price_0", "5", "Price 1:")),
                dish_id: Some("0".to_string()),
            },
            RenderedBlock {
                name: Some(rendered("dish_name_1", "Soup", "Dish name 2:")),
                ..Default::default()
            },
        ];
        let seeded = seed_dishes(blocks);
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded[0].0, 1);
        assert_eq!(seeded[0].1.index, 1);
        assert_eq!(seeded[0].1.key, 0);
    }

    #[test]
    fn test_trim_field_strips_bom() {
        assert_eq!(trim_field("\u{FEFF} Soup \u{FEFF}"), "Soup");
        assert_eq!(trim_field("\u{00A0}\t"), "");
    }

    #[test]
    fn test_submitted_line_trims() {
        let mut entry = DishEntry::new(0, 0);
        entry.name = "  Soup ".to_string();
        entry.price = "9.99".to_string();
        let json = serde_json::to_string(&SubmittedLine::from(&entry)).unwrap();
        assert_eq!(json, r#"{"index":0,"name":"Soup","price":"9.99"}"#);
    }
}
