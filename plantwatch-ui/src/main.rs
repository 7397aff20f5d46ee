//! Plantwatch Dashboard
//!
//! Plant moisture monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Status summary and a searchable, filterable plant table
//! - Add/edit plant forms with linked ideal-range sliders
//! - Reading entry, optionally scoped to one plant
//! - Per-plant details with the full reading history
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state lives in the view-models of the `plantwatch`
//! crate; this crate binds them to components and talks to the backend over
//! HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod dialog;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
