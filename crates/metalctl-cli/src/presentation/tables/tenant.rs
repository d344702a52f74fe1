use super::{RenderContext, Renderable};
use metalctl_engine::humanize::relative_time;
use metalctl_types::{Tenant, TenantInvite, TenantMember};

impl Renderable for Tenant {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Registered", "Coupons", "Terms And Conditions"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.login.clone(),
            self.name.clone(),
            self.email.clone(),
            self.meta
                .created_at
                .map(|t| relative_time(t, ctx.now))
                .unwrap_or_default(),
            // coupons and terms are not part of the tenant model yet
            "-".to_string(),
            String::new(),
        ]]
    }
}

impl Renderable for TenantMember {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["ID", "Role", "Since"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.role.to_string(),
            self.created_at
                .map(|t| relative_time(t, ctx.now))
                .unwrap_or_default(),
        ]]
    }
}

impl Renderable for TenantInvite {
    const AUTO_WRAP: bool = false;

    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["Secret", "Tenant", "Invited By", "Role", "Expires in"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.secret.clone(),
            self.target_tenant.clone(),
            self.tenant.clone(),
            self.role.to_string(),
            self.expires_at
                .map(|t| relative_time(t, ctx.now))
                .unwrap_or_default(),
        ]]
    }
}

#[cfg(test)]
mod tests {
    use super::super::{render_plain, test_now};
    use super::*;
    use chrono::TimeDelta;
    use metalctl_types::{Meta, TenantRole};

    #[test]
    fn test_tenant_row() {
        let tenant = Tenant {
            login: "acme".to_string(),
            name: "ACME Corp".to_string(),
            email: "ops@acme.example".to_string(),
            meta: Meta {
                created_at: Some(test_now() - TimeDelta::days(400)),
                ..Default::default()
            },
        };

        insta::assert_snapshot!(render_plain(&[tenant], &RenderContext::new(test_now())), @r"
        |ID|Name|Email|Registered|Coupons|Terms And Conditions|
        |acme|ACME Corp|ops@acme.example|1 year ago|-||
        ");
    }

    #[test]
    fn test_members_and_invites() {
        let ctx = RenderContext::new(test_now());
        let members = [
            TenantMember {
                id: "alice".to_string(),
                role: TenantRole::Owner,
                created_at: Some(test_now() - TimeDelta::days(10)),
            },
            TenantMember {
                id: "carol".to_string(),
                role: TenantRole::Guest,
                created_at: Some(test_now() - TimeDelta::minutes(1)),
            },
        ];
        insta::assert_snapshot!(render_plain(&members, &ctx), @r"
        |ID|Role|Since|
        |alice|owner|1 week ago|
        |carol|guest|1 minute ago|
        ");

        let invite = TenantInvite {
            secret: "inv-1".to_string(),
            target_tenant: "acme".to_string(),
            tenant: "alice".to_string(),
            role: TenantRole::Viewer,
            expires_at: Some(test_now() + TimeDelta::hours(5)),
            ..Default::default()
        };
        let table = TenantInvite::table(&[invite], &ctx);
        assert!(!table.auto_wrap);
        assert_eq!(table.rows[0], ["inv-1", "acme", "alice", "viewer", "5 hours from now"]);
    }
}
