// src/models/card.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::AdminError;

/// A row of the Cards table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub photo: Option<String>,
}

/// Scalar fields of a new card
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCard {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

/// Independently updatable columns of the Cards table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Title,
    Description,
    Photo,
}

impl CardField {
    pub fn column(self) -> &'static str {
        match self {
            CardField::Title => "title",
            CardField::Description => "description",
            CardField::Photo => "photo",
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for CardField {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(CardField::Title),
            "description" => Ok(CardField::Description),
            "photo" => Ok(CardField::Photo),
            other => Err(AdminError::InvalidInput(format!(
                "Unknown card field: {}",
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
        assert_eq!(
            "description".parse::<CardField>().unwrap(),
            CardField::Description
        );
        assert!("role".parse::<CardField>().is_err());
    }

    #[test]
    fn test_presence_validation() {
        let blank_title = NewCard {
            title: String::new(),
            description: "Fast delivery".to_string(),
        };
        let errors = blank_title.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
