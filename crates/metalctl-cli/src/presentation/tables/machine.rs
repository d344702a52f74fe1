use super::{RenderContext, Renderable};
use crate::presentation::formatters::time;
use metalctl_engine::humanize::{humanize_duration, truncate_end};
use metalctl_engine::status::machine_indicator;
use metalctl_types::Machine;

const HOSTNAME_WIDTH: usize = 30;

impl Renderable for Machine {
    fn header(wide: bool) -> Vec<&'static str> {
        if wide {
            vec![
                "ID",
                "Last Event",
                "When",
                "Age",
                "Description",
                "Name",
                "Hostname",
                "Project",
                "IPs",
                "Size",
                "Image",
                "Partition",
                "Rack",
                "Started",
                "Tags",
                "Lock/Reserve",
            ]
        } else {
            vec![
                "ID",
                "",
                "Last Event",
                "When",
                "Age",
                "Hostname",
                "Project",
                "Size",
                "Image",
                "Partition",
                "Rack",
            ]
        }
    }

    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>> {
        let led_on = self
            .status
            .as_ref()
            .and_then(|s| s.led_state.as_ref())
            .is_some_and(|led| led.is_on());
        let id = if led_on {
            ctx.palette.blue(&self.uuid)
        } else {
            self.uuid.clone()
        };

        let alloc = self.allocation.clone().unwrap_or_default();
        let image = alloc
            .image
            .as_ref()
            .and_then(|i| i.name.clone())
            .unwrap_or_default();

        let (last_event, when) = match &self.recent_provisioning_events {
            Some(events) if !events.events.is_empty() => (
                events.events[0].event.clone(),
                events
                    .last_event_time
                    .map(|t| humanize_duration(ctx.now.signed_duration_since(t)))
                    .unwrap_or_default(),
            ),
            _ => (String::new(), String::new()),
        };

        let started = self.allocated_at();
        let age = time::age(started, ctx.now);

        if !ctx.wide {
            let indicator =
                machine_indicator(self, ctx.now, ctx.last_event_error_threshold);
            return vec![vec![
                id,
                indicator.short(),
                last_event,
                when,
                age,
                truncate_end(&alloc.hostname, HOSTNAME_WIDTH),
                alloc.project,
                self.size_id().to_string(),
                image,
                self.partition_id().to_string(),
                self.rack.clone(),
            ]];
        }

        let ips: Vec<&str> = alloc
            .networks
            .iter()
            .flat_map(|nw| nw.ips.iter().map(String::as_str))
            .collect();
        let lock_reserve = self
            .status
            .as_ref()
            .and_then(|s| s.condition.as_ref())
            .map(|c| format!("{}:{}", c.state, c.description))
            .unwrap_or_default();

        vec![vec![
            id,
            last_event,
            when,
            age,
            alloc.description,
            alloc.name,
            alloc.hostname,
            alloc.project,
            ips.join("\n"),
            self.size_id().to_string(),
            image,
            self.partition_id().to_string(),
            self.rack.clone(),
            started.map(time::rfc3339).unwrap_or_default(),
            self.meta.label_pairs().join(","),
            lock_reserve,
        ]]
    }
}
