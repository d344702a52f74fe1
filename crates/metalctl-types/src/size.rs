use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Size {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub constraints: Vec<SizeConstraint>,
    pub meta: Meta,
}

impl Size {
    pub fn constraint(&self, kind: SizeConstraintType) -> Option<&SizeConstraint> {
        self.constraints.iter().find(|c| c.constraint_type == kind)
    }
}

impl Entity for Size {
    const KIND: EntityKind = EntityKind::Size;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeConstraint {
    #[serde(rename = "type")]
    pub constraint_type: SizeConstraintType,
    pub min: u64,
    pub max: u64,
    /// Only set for GPU constraints, e.g. `AD102GL [RTX 6000 Ada Generation]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeConstraintType {
    Cores = 1,
    Memory = 2,
    Storage = 3,
    Gpu = 4,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(SizeConstraintType {
    Unspecified => "unspecified",
    Cores => "cores",
    Memory => "memory",
    Storage => "storage",
    Gpu => "gpu",
});
