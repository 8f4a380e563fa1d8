#![allow(warnings)]
//! Order Form Frontend Entry Point

mod config;
mod error;
mod models;
mod price;
mod validation;
mod render;
mod store;
mod components;
mod app;
mod controller;

fn main() {
    console_error_panic_hook::set_once();
    controller::start();
}
