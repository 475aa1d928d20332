// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod card;
pub mod team;

pub use card::*;
pub use team::*;

use serde::Serialize;

/// Response of GET /admin/allData
#[derive(Debug, Clone, Serialize)]
pub struct AllData {
    pub teams: Vec<TeamMember>,
    pub cards: Vec<Card>,
}

/// Response of POST /admin/{collection}
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Response of update and delete operations
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
