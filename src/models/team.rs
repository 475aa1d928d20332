// src/models/team.rs
// DOCUMENTATION: Data structures for team members
// PURPOSE: Row mapping for the Team table and create/update request models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::AdminError;

/// A row of the Team table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    /// Auto-increment identity, never reused
    pub id: i64,
    pub name: String,
    pub role: String,
    /// Stored file name under images/assets
    pub photo: Option<String>,
}

/// Scalar fields of a new team member (photo is attached separately)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTeamMember {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

/// Independently updatable columns of the Team table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    Name,
    Role,
    Photo,
}

impl TeamField {
    pub fn column(self) -> &'static str {
        match self {
            TeamField::Name => "name",
            TeamField::Role => "role",
            TeamField::Photo => "photo",
        }
    }
}

impl fmt::Display for TeamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for TeamField {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(TeamField::Name),
            "role" => Ok(TeamField::Role),
            "photo" => Ok(TeamField::Photo),
            other => Err(AdminError::InvalidInput(format!(
                "Unknown team field: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        assert_eq!("role".parse::<TeamField>().unwrap(), TeamField::Role);
        assert_eq!("photo".parse::<TeamField>().unwrap(), TeamField::Photo);
        assert!("title".parse::<TeamField>().is_err());
        assert!("id".parse::<TeamField>().is_err());
    }

    #[test]
    fn test_presence_validation() {
        let ok = NewTeamMember {
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
        };
        assert!(ok.validate().is_ok());

        let missing_role = NewTeamMember {
            name: "Ada".to_string(),
            role: String::new(),
        };
        assert!(missing_role.validate().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let member = TeamMember {
            id: 1,
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
            photo: Some("a.png".to_string()),
        };
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Ada", "role": "Engineer", "photo": "a.png"})
        );
    }
}
