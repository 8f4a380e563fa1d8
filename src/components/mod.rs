//! UI Components
//!
//! Leptos components rendered inside the dish container.

mod dish_block;
mod order_summary;

pub use dish_block::DishBlock;
pub use order_summary::OrderSummary;
