//! Order Form App
//!
//! Root component mounted into the dish container.

use leptos::prelude::*;

use crate::components::{DishBlock, OrderSummary};
use crate::store::{store_dishes, use_form_store};

/// All dish blocks followed by the running total
#[component]
pub fn DishList() -> impl IntoView {
    let store = use_form_store();

    view! {
        <For
            each=move || store_dishes(&store)
            key=|dish| dish.key
            children=move |dish| view! { <DishBlock dish=dish /> }
        />
        <OrderSummary />
    }
}
