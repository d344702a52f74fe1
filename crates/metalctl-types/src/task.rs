use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Entity, EntityKind};

/// A background task of the API server's work queues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskInfo {
    /// Time based UUID, the issue time is encoded in it.
    pub id: String,
    pub queue: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub state: TaskState,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub payload: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub result: String,
}

impl TaskInfo {
    /// Issue time taken from the id, `None` for ids without a timestamp.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        let (secs, nanos) = Uuid::parse_str(&self.id).ok()?.get_timestamp()?.to_unix();
        DateTime::from_timestamp(i64::try_from(secs).ok()?, nanos)
    }
}

impl Entity for TaskInfo {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    Active = 1,
    Pending = 2,
    Scheduled = 3,
    Retry = 4,
    Archived = 5,
    Completed = 6,
    Aggregating = 7,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(TaskState {
    Unspecified => "unspecified",
    Active => "active",
    Pending => "pending",
    Scheduled => "scheduled",
    Retry => "retry",
    Archived => "archived",
    Completed => "completed",
    Aggregating => "aggregating",
});
