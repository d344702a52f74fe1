use super::filters::Filter;
use crate::args::{FileArgs, ListArgs, SwitchFilter};
use crate::context::ExecutionContext;
use crate::presentation::SwitchDetail;
use crate::source::{EntitySource, FileSource};
use anyhow::Result;
use metalctl_types::{Switch, SwitchWithMachines};

pub fn connected_machines(
    ctx: &ExecutionContext,
    args: &FileArgs,
    filter: &SwitchFilter,
) -> Result<()> {
    let mut switches: Vec<SwitchWithMachines> = FileSource::new(&args.file).load()?;
    switches.retain(|s| filter.matches(s));
    switches.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(switches = switches.len(), "loaded switches with machines");
    ctx.printer(false)?.print_list(&switches)
}

pub fn detail(ctx: &ExecutionContext, args: &ListArgs, filter: &SwitchFilter) -> Result<()> {
    let switches = super::load_sorted::<Switch, _>(ctx, args, filter)?;
    let details: Vec<SwitchDetail> = switches.into_iter().map(SwitchDetail).collect();
    ctx.printer(false)?.print_list(&details)
}
