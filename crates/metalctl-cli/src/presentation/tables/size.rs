use super::{RenderContext, Renderable};
use metalctl_engine::humanize::humanize_bytes;
use metalctl_types::{Size, SizeConstraintType};

impl Renderable for Size {
    fn header(_wide: bool) -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Description",
            "CPU Range",
            "Memory Range",
            "Storage Range",
            "GPU Range",
        ]
    }

    fn rows(&self, _ctx: &RenderContext) -> Vec<Vec<String>> {
        let (mut cpu, mut memory, mut storage, mut gpu) =
            (String::new(), String::new(), String::new(), String::new());

        for c in &self.constraints {
            match c.constraint_type {
                SizeConstraintType::Cores => cpu = format!("{} - {}", c.min, c.max),
                SizeConstraintType::Memory => {
                    memory = format!("{} - {}", humanize_bytes(c.min), humanize_bytes(c.max))
                }
                SizeConstraintType::Storage => {
                    storage = format!("{} - {}", humanize_bytes(c.min), humanize_bytes(c.max))
                }
                SizeConstraintType::Gpu => {
                    gpu = format!(
                        "{}: {} - {}",
                        c.identifier.as_deref().unwrap_or_default(),
                        c.min,
                        c.max
                    )
                }
                SizeConstraintType::Unspecified => {}
            }
        }

        vec![vec![
            self.id.clone(),
            self.name.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
            cpu,
            memory,
            storage,
            gpu,
        ]]
    }
}
