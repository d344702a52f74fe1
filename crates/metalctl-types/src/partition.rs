use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Partition {
    pub id: String,
    pub description: String,
    pub meta: Meta,
}

impl Entity for Partition {
    const KIND: EntityKind = EntityKind::Partition;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Machine capacity of one partition, broken down by size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartitionCapacity {
    pub partition: String,
    pub machine_size_capacities: Vec<MachineSizeCapacity>,
}

impl PartitionCapacity {
    /// Size ids in declaration order, used as the secondary sort field.
    pub fn size_ids(&self) -> Vec<&str> {
        self.machine_size_capacities
            .iter()
            .map(|c| c.size.as_str())
            .collect()
    }
}

impl Entity for PartitionCapacity {
    const KIND: EntityKind = EntityKind::PartitionCapacity;

    fn id(&self) -> &str {
        &self.partition
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineSizeCapacity {
    pub size: String,
    pub total: i64,
    pub free: i64,
    pub allocated: i64,
    pub reservations: i64,
    pub used_reservations: i64,
    pub faulty: i64,
    pub unavailable: i64,
    pub phoned_home: i64,
    pub waiting: i64,
    pub other: i64,
}
