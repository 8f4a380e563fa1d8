//! Form State Store
//!
//! Uses Leptos reactive_stores so blocks re-render per field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::{FormError, FormResult, ValidationReport};
use crate::models::{DishEntry, FieldKind, FormMode};
use crate::price::order_total;
use crate::validation::validate_dishes;

/// Dish blocks plus the page mode they were loaded under
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    /// Create or edit, fixed once at startup
    pub mode: FormMode,
    /// Blocks in display order
    pub dishes: Vec<DishEntry>,
}

impl FormState {
    pub fn new(mode: FormMode, dishes: Vec<DishEntry>) -> Self {
        Self { mode, dishes }
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// List Operations
// ========================

/// Append an empty block; its index is the current block count.
///
/// Existing blocks are never renumbered, so the new index may repeat one
/// that is still on the page after earlier removals.
pub fn add_dish(dishes: &mut Vec<DishEntry>) -> usize {
    let index = dishes.len();
    let key = dishes.iter().map(|d| d.key).max().map_or(0, |k| k + 1);
    dishes.push(DishEntry::new(key, index));
    index
}

/// Remove the block with `key` unless that breaks the mode's floor
pub fn remove_dish(dishes: &mut Vec<DishEntry>, mode: FormMode, key: u32) -> FormResult<()> {
    let floor = mode.min_dishes();
    if floor > 0 && dishes.len() <= floor {
        return Err(FormError::BelowMinimum);
    }
    let position = dishes
        .iter()
        .position(|d| d.key == key)
        .ok_or(FormError::UnknownDish(key))?;
    dishes.remove(position);
    Ok(())
}

// ========================
// Store Helper Functions
// ========================

/// Append a block to the store, returning its index
pub fn store_add_dish(store: &FormStore) -> usize {
    add_dish(&mut store.dishes().write())
}

/// Remove a block; the store is left untouched when refused
pub fn store_remove_dish(store: &FormStore, key: u32) -> FormResult<()> {
    let mode = store.mode().get_untracked();
    let mut dishes = store.dishes().get_untracked();
    remove_dish(&mut dishes, mode, key)?;
    store.dishes().set(dishes);
    Ok(())
}

/// Record what the user typed into a field
pub fn store_set_field(store: &FormStore, key: u32, kind: FieldKind, value: String) {
    store.dishes().write().iter_mut()
        .find(|dish| dish.key == key)
        .map(|dish| dish.set_value(kind, value));
}

/// Run validation and publish the new error markers
pub fn store_validate(store: &FormStore) -> Result<(), ValidationReport> {
    let mut dishes = store.dishes().get_untracked();
    let result = validate_dishes(&mut dishes);
    if result.is_err() {
        store.dishes().set(dishes);
    }
    result
}

pub fn store_mode(store: &FormStore) -> FormMode {
    store.mode().get_untracked()
}

/// Tracked snapshot of all blocks
pub fn store_dishes(store: &FormStore) -> Vec<DishEntry> {
    store.dishes().get()
}

/// Untracked snapshot, for event handlers
pub fn store_dishes_untracked(store: &FormStore) -> Vec<DishEntry> {
    store.dishes().get_untracked()
}

/// Tracked error marker of one field
pub fn store_is_errored(store: &FormStore, key: u32, kind: FieldKind) -> bool {
    store.dishes().read().iter()
        .find(|dish| dish.key == key)
        .map(|dish| dish.is_errored(kind))
        .unwrap_or(false)
}

/// Tracked block count and running total
pub fn store_summary(store: &FormStore) -> (usize, f64) {
    let dishes = store.dishes().read();
    (dishes.len(), order_total(&dishes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> Vec<DishEntry> {
        let mut dishes = Vec::new();
        for _ in 0..count {
            add_dish(&mut dishes);
        }
        dishes
    }

    #[test]
    fn test_add_uses_block_count() {
        let mut dishes = Vec::new();
        assert_eq!(add_dish(&mut dishes), 0);
        assert_eq!(add_dish(&mut dishes), 1);
        assert_eq!(dishes[1].dish_id, "1");
        assert_ne!(dishes[0].key, dishes[1].key);
    }

    #[test]
    fn test_count_after_adds_and_removes() {
        let mut dishes = filled(5);
        for _ in 0..3 {
            let key = dishes[0].key;
            remove_dish(&mut dishes, FormMode::Create, key).unwrap();
        }
        assert_eq!(dishes.len(), 2);
    }

    #[test]
    fn test_create_keeps_last_dish() {
        let mut dishes = filled(1);
        let before = dishes.clone();
        let key = dishes[0].key;
        assert_eq!(remove_dish(&mut dishes, FormMode::Create, key), Err(FormError::BelowMinimum));
        assert_eq!(dishes, before);
    }

    #[test]
    fn test_edit_allows_empty() {
        let mut dishes = filled(2);
        while let Some(key) = dishes.first().map(|d| d.key) {
            remove_dish(&mut dishes, FormMode::Edit, key).unwrap();
        }
        assert!(dishes.is_empty());
    }

    #[test]
    fn test_unknown_key() {
        let mut dishes = filled(2);
        assert_eq!(remove_dish(&mut dishes, FormMode::Edit, 99), Err(FormError::UnknownDish(99)));
        assert_eq!(dishes.len(), 2);
    }

    #[test]
    fn test_remove_later_block_keeps_earlier_names() {
        let mut dishes = filled(3);
        let last = dishes[2].key;
        remove_dish(&mut dishes, FormMode::Create, last).unwrap();
        let indices: Vec<usize> = dishes.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
