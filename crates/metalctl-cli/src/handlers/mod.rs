pub mod context;
pub mod filters;
pub mod health;
pub mod partition;
pub mod switch;
pub mod task;

use crate::args::{DescribeArgs, FileArgs, ListArgs};
use crate::context::ExecutionContext;
use crate::presentation::Renderable;
use crate::source::{EntitySource, FileSource};
use anyhow::Result;
use filters::Filter;
use metalctl_engine::Sortable;
use metalctl_types::Entity;
use serde::Serialize;
use serde::de::DeserializeOwned;

fn source(args: &FileArgs) -> FileSource {
    FileSource::new(&args.file)
}

/// Loads, filters and sorts the entities of a list command.
///
/// Sort keys are resolved before anything is reordered; an unknown key fails
/// the command with the list of available keys.
pub fn load_sorted<T, F>(ctx: &ExecutionContext, args: &ListArgs, filter: &F) -> Result<Vec<T>>
where
    T: Sortable + DeserializeOwned,
    F: Filter<T>,
{
    let mut items: Vec<T> = source(&args.source).load()?;
    let loaded = items.len();
    items.retain(|item| filter.matches(item));

    let sorter = ctx.sorter::<T>()?;
    sorter.sort_by(&mut items, &args.sort_by)?;

    let keys = if args.sort_by.is_empty() {
        sorter.default_keys()
    } else {
        args.sort_by.as_slice()
    };
    tracing::debug!(
        kind = %T::KIND,
        loaded,
        shown = items.len(),
        keys = ?keys.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "sorted entities"
    );

    Ok(items)
}

pub fn list<T, F>(ctx: &ExecutionContext, args: &ListArgs, filter: &F) -> Result<()>
where
    T: Sortable + Renderable + Serialize + DeserializeOwned,
    F: Filter<T>,
{
    let items: Vec<T> = load_sorted(ctx, args, filter)?;
    ctx.printer(false)?.print_list(&items)
}

pub fn describe<T>(ctx: &ExecutionContext, args: &DescribeArgs) -> Result<()>
where
    T: Entity + Renderable + Serialize + DeserializeOwned,
{
    let item: T = source(&args.source).find(&args.id)?;
    ctx.printer(true)?.print_one(&item)
}
