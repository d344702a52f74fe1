use super::{RenderContext, Renderable};
use crate::presentation::formatters::time;
use metalctl_types::TaskInfo;

impl Renderable for TaskInfo {
    fn header(wide: bool) -> Vec<&'static str> {
        let mut header = vec!["ID", "Queue", "When", "Type", "State"];
        if wide {
            header.extend(["Issued At", "Payload", "Result"]);
        }
        header
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let issued_at = self.issued_at();

        let mut row = vec![
            self.id.clone(),
            self.queue.clone(),
            time::age(issued_at, ctx.now),
            self.task_type.clone(),
            self.state.to_string(),
        ];
        if ctx.wide {
            row.extend([
                issued_at.map(time::date_time).unwrap_or_default(),
                self.payload.clone(),
                self.result.clone(),
            ]);
        }
        vec![row]
    }
}
