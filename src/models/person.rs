//! Person model (actors, directors, writers)

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::{generate_id, Timestamps};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Person {
    pub id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Person {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            full_name: full_name.into(),
            timestamps: Timestamps::now(),
        }
    }
}
