// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod content_service;
pub mod forms;
pub mod uploads;

pub use content_service::*;
pub use forms::*;
pub use uploads::*;
