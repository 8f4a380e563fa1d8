//! Order Summary Component
//!
//! Dish count and running total under the blocks.

use leptos::prelude::*;

use crate::config::SUMMARY_CLASS;
use crate::price::format_price;
use crate::store::{store_summary, use_form_store};

/// `3 dishes, total 27.50`
pub fn summary_text(count: usize, total: f64) -> String {
    let noun = if count == 1 { "dish" } else { "dishes" };
    format!("{} {}, total {}", count, noun, format_price(&total.to_string()))
}

#[component]
pub fn OrderSummary() -> impl IntoView {
    let store = use_form_store();

    view! {
        <p class=SUMMARY_CLASS>
            {move || {
                let (count, total) = store_summary(&store);
                summary_text(count, total)
            }}
        </p>
    }
}
