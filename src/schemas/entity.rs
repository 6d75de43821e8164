//! Entity record schema - the status-bearing row a transition writes to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status snapshot of a fleet or HR entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub entity_type: String,

    pub entity_id: String,

    /// Current status (vocabulary depends on the entity type)
    pub status: String,

    /// Incremented on every status write; used for compare-and-set
    pub revision: u64,

    pub updated_at: DateTime<Utc>,
}

impl EntityRecord {
    pub fn new(entity_type: &str, entity_id: &str, status: &str) -> Self {
        EntityRecord {
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            status: status.to_string(),
            revision: 0,
            updated_at: Utc::now(),
        }
    }

    /// Returns a copy with the new status and the next revision
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self.revision += 1;
        self.updated_at = Utc::now();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_status_bumps_revision() {
        let record = EntityRecord::new("employee", "e-1", "new");
        let next = record.clone().with_status("under_review");
        assert_eq!(next.status, "under_review");
        assert_eq!(next.revision, record.revision + 1);
        assert!(next.updated_at >= record.updated_at);
        assert_eq!(record.status, "new");
    }
}
