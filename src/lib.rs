// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Expose modules to the server binary and integration tests

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
