use anyhow::Result;
use serde::Serialize;

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

pub fn yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metalctl_types::TenantMember;

    #[test]
    fn test_yaml_uses_api_field_names() {
        let member = TenantMember {
            id: "alice".to_string(),
            ..Default::default()
        };
        let out = yaml(&member).unwrap();
        assert_eq!(out, "id: alice\nrole: unspecified\n");
    }

    #[test]
    fn test_json_list() {
        let out = json(&[1, 2]).unwrap();
        assert_eq!(out, "[\n  1,\n  2\n]\n");
    }
}
