use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

/// A named API endpoint the CLI can talk to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl Entity for Context {
    const KIND: EntityKind = EntityKind::Context;

    fn id(&self) -> &str {
        &self.name
    }
}

/// All configured contexts plus the active one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contexts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    pub contexts: Vec<Context>,
}

impl Contexts {
    pub fn is_current(&self, name: &str) -> bool {
        self.current_context.as_deref() == Some(name)
    }

    pub fn get(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    pub fn current(&self) -> Option<&Context> {
        self.current_context.as_deref().and_then(|name| self.get(name))
    }
}
