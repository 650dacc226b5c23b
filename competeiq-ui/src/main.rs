//! CompeteIQ Frontend
//!
//! Competitor intelligence workspace built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard of competitor briefs
//! - Guided brief creation and editing
//! - Research hub with exact-match lookup over the collection
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The entire Brief collection lives in the browser: the core
//! record store persists into `localStorage` through a backend implemented
//! in this crate. There is no server.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
