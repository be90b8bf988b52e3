//! Shared Dioxus components and D3.js bridge for the campaign dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals and the user intents
//! - `hooks`: the count-up animation driver
//! - `components`: Reusable RSX components (cards, table, timeline, etc.)

pub mod components;
pub mod hooks;
pub mod js_bridge;
pub mod state;
