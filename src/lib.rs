//! spec-maker: terminal wizard for building project specifications
//!
//! This crate provides a keyboard-driven wizard that walks a user from
//! template selection through guided questions to a reviewed, exportable
//! specification.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;
pub mod ui;

pub use app::App;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use store::SpecStore;
