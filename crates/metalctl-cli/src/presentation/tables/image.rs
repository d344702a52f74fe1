use super::{RenderContext, Renderable};
use metalctl_engine::humanize::humanize_duration;
use metalctl_types::Image;

impl Renderable for Image {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["ID", "Name", "Description", "Features", "Expiration", "Status"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let expires_in = self
            .expires_at
            .map(|t| humanize_duration(t.signed_duration_since(ctx.now)))
            .unwrap_or_default();

        vec![vec![
            self.id.clone(),
            self.name.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
            self.feature_list(),
            expires_in,
            self.classification.to_string(),
        ]]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;
    use chrono::TimeDelta;
    use metalctl_types::{ImageClassification, ImageFeature};

    #[test]
    fn test_image_rows() {
        let images = [
            Image {
                id: "ubuntu-24.04.20240601".to_string(),
                name: Some("Ubuntu 24.04".to_string()),
                features: vec![ImageFeature::Machine],
                classification: ImageClassification::Supported,
                expires_at: Some(test_now() + TimeDelta::days(30) + TimeDelta::hours(2)),
                ..Default::default()
            },
            Image {
                id: "firewall-ubuntu-3.0".to_string(),
                description: Some("firewall".to_string()),
                features: vec![ImageFeature::Firewall, ImageFeature::Machine],
                classification: ImageClassification::Deprecated,
                ..Default::default()
            },
        ];

        insta::assert_snapshot!(render_plain(&images, &RenderContext::new(test_now())), @r"
        |ID|Name|Description|Features|Expiration|Status|
        |ubuntu-24.04.20240601|Ubuntu 24.04||machine|30d 2h|supported|
        |firewall-ubuntu-3.0||firewall|firewall,machine||deprecated|
        ");
    }
}
