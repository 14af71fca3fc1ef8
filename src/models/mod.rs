// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod geocode;
pub mod place;
pub mod route;

pub use geocode::*;
pub use place::*;
pub use route::*;
