//! Create/edit user dialogs for an admin interface.
//!
//! [`dialogs`] holds the validation, role reconciliation and submission
//! state machine. [`handlers`] hosts the dialogs over HTTP; [`models`] has the
//! Postgres-backed role directory and user store.

pub mod auth;
pub mod config;
pub mod db;
pub mod dialogs;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
