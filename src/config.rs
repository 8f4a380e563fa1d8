//! Form Configuration
//!
//! Identifiers and text shared with the server-rendered page.

/// Id of the `<form>` element
pub const FORM_ID: &str = "order-form";
/// Id of the element holding the dish blocks
pub const DISHES_CONTAINER_ID: &str = "dishes";
/// Id of the "add dish" control
pub const ADD_DISH_ID: &str = "add-dish";

/// Class of every dish block
pub const DISH_BLOCK_CLASS: &str = "dish";
/// Marker class of removal controls (matched wherever it appears)
pub const REMOVE_MARKER_CLASS: &str = "remove-dish";
/// Class added to invalid fields
pub const ERROR_CLASS: &str = "error";
/// Class of the totals line under the blocks
pub const SUMMARY_CLASS: &str = "order-summary";

/// Path substring that selects the edit context
pub const EDIT_PATH_MARKER: &str = "edit";

// Field naming: `<prefix><index>`, ids get `id_` in front
pub const DISH_NAME_PREFIX: &str = "dish_name_";
pub const DISH_PRICE_PREFIX: &str = "dish_price_";
pub const DISH_ID_PREFIX: &str = "dish_id_";
pub const FIELD_ID_PREFIX: &str = "id_";

/// Label texts for a new block; the number is `index + 1`
pub const NAME_LABEL: &str = "Dish name";
pub const PRICE_LABEL: &str = "Price";

pub const NAME_PLACEHOLDER: &str = "Enter dish name";
pub const PRICE_PLACEHOLDER: &str = "Enter price";
pub const PRICE_STEP: &str = "0.01";

/// Tag prepended to console output
pub const LOG_TAG: &str = "[ORDER]";
