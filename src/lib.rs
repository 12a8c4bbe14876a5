// ABOUTME: Library crate for the Atelier storefront exposing public API for testing and external use

#![allow(missing_docs)]

pub mod app;
pub mod checkout;
pub mod components;
pub mod config;
pub mod models;
