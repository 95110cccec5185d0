//! Field groups shared by catalog entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Creation and last-modification instants carried by every top-level entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
        }
    }
}

/// Generate a fresh primary key. Keys are never reassigned once issued.
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}
