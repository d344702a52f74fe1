use super::{RenderContext, Renderable};
use crate::presentation::formatters::time;
use metalctl_types::Token;

impl Renderable for Token {
    const AUTO_WRAP: bool = false;

    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["Type", "ID", "Admin", "User", "Description", "Roles", "Perms", "Expires"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.token_type.to_string(),
            self.uuid.clone(),
            self.admin_role.map(|r| r.to_string()).unwrap_or_default(),
            self.user_id.clone(),
            self.description.clone(),
            self.role_count().to_string(),
            self.permissions.len().to_string(),
            time::expiry(self.expires, ctx.now),
        ]]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;
    use chrono::TimeDelta;
    use metalctl_types::{AdminRole, MethodPermission, TokenType};

    #[test]
    fn test_token_rows() {
        let tokens = [
            Token {
                uuid: "t-1".to_string(),
                user_id: "alice".to_string(),
                description: "ci".to_string(),
                token_type: TokenType::Api,
                tenant_roles: [("acme".to_string(), "owner".to_string())].into_iter().collect(),
                project_roles: [("p-1".to_string(), "editor".to_string())].into_iter().collect(),
                permissions: vec![MethodPermission {
                    subject: "p-1".to_string(),
                    methods: vec!["/metalstack.api.v2.IPService/Get".to_string()],
                }],
                expires: Some(test_now() + TimeDelta::days(3)),
                ..Default::default()
            },
            Token {
                uuid: "t-2".to_string(),
                user_id: "bob".to_string(),
                token_type: TokenType::Console,
                admin_role: Some(AdminRole::Viewer),
                expires: Some(test_now() - TimeDelta::hours(1)),
                ..Default::default()
            },
        ];

        insta::assert_snapshot!(render_plain(&tokens, &RenderContext::new(test_now())), @r"
        |Type|ID|Admin|User|Description|Roles|Perms|Expires|
        |api|t-1||alice|ci|2|1|2024-06-18 12:00:00 UTC (in 3d)|
        |console|t-2|viewer|bob||0|0|2024-06-15 11:00:00 UTC (expired 1h ago)|
        ");
    }
}
