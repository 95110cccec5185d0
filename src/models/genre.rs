//! Genre model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::{generate_id, Timestamps};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Genre {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            description: None,
            timestamps: Timestamps::now(),
        }
    }
}
