use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные записи, которые ведёт бэкенд (lifecycle tracking)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
