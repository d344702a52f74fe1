use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind, Meta};

/// An operating system image machines and firewalls are installed with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<ImageFeature>,
    pub classification: ImageClassification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub meta: Meta,
}

impl Image {
    /// `machine,firewall`
    pub fn feature_list(&self) -> String {
        self.features
            .iter()
            .map(ImageFeature::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Entity for Image {
    const KIND: EntityKind = EntityKind::Image;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFeature {
    Machine = 1,
    Firewall = 2,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(ImageFeature {
    Unspecified => "unspecified",
    Machine => "machine",
    Firewall => "firewall",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageClassification {
    Preview = 1,
    Supported = 2,
    Deprecated = 3,
    #[default]
    #[serde(other)]
    Unspecified = 0,
}

string_enum!(ImageClassification {
    Unspecified => "unspecified",
    Preview => "preview",
    Supported => "supported",
    Deprecated => "deprecated",
});
