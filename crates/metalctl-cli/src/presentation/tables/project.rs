use super::{RenderContext, Renderable};
use crate::presentation::formatters::time;
use metalctl_engine::humanize::{relative_time, truncate_end};
use metalctl_types::{Project, ProjectInvite, ProjectMember};

const DESCRIPTION_WIDTH: usize = 80;

impl Renderable for Project {
    const AUTO_WRAP: bool = false;

    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["ID", "Tenant", "Name", "Description", "Creation Date"]
    }

    fn rows(&self, _ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.uuid.clone(),
            self.tenant.clone(),
            self.name.clone(),
            truncate_end(&self.description, DESCRIPTION_WIDTH),
            self.meta.created_at.map(time::date_time).unwrap_or_default(),
        ]]
    }
}

impl Renderable for ProjectInvite {
    const AUTO_WRAP: bool = false;

    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["Secret", "Project", "Role", "Expires in"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.secret.clone(),
            self.project.clone(),
            self.role.to_string(),
            self.expires_at
                .map(|t| relative_time(t, ctx.now))
                .unwrap_or_default(),
        ]]
    }
}

impl Renderable for ProjectMember {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec!["ID", "Role", "Inherited", "Since"]
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        vec![vec![
            self.id.clone(),
            self.role.to_string(),
            self.inherited_membership.to_string(),
            self.created_at
                .map(|t| relative_time(t, ctx.now))
                .unwrap_or_default(),
        ]]
    }
}
