//! Durable storage behind the UI.

pub mod store;
