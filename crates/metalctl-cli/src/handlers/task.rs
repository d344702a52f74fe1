use crate::args::FileArgs;
use crate::source::EntitySource;
use anyhow::Result;
use metalctl_types::TaskInfo;
use std::collections::BTreeSet;

/// Distinct queue names of the loaded tasks, sorted.
fn queue_names(tasks: &[TaskInfo]) -> Vec<&str> {
    tasks
        .iter()
        .map(|t| t.queue.as_str())
        .filter(|q| !q.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn queues(source: &FileArgs) -> Result<()> {
    let tasks: Vec<TaskInfo> = super::source(source).load()?;
    for queue in queue_names(&tasks) {
        println!("{}", queue);
    }
    Ok(())
}
