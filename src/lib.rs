//! StayBooker web front-end - navigation bar and page shell
//!
//! This library provides:
//! - A renderer-free navigation core (entries, active path, logout flow)
//! - The Dioxus client app with router-backed navigation bar
//! - Server-side rendered pages and a status endpoint (feature `server`)

pub mod app;
pub mod nav;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
