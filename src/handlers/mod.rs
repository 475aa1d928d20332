// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod admin;
pub mod cards;
pub mod health;
pub mod pages;
pub mod teams;

pub use admin::config as admin_config;
pub use health::config as health_config;
pub use pages::config as pages_config;
