use crate::args::FileArgs;
use crate::context::ExecutionContext;
use crate::source::{EntitySource, FileSource};
use anyhow::{Context, Result};
use metalctl_types::Health;

pub fn handle(ctx: &ExecutionContext, args: &FileArgs) -> Result<()> {
    let source = FileSource::new(&args.file);
    let health: Health = source
        .load()?
        .into_iter()
        .next()
        .with_context(|| format!("no health report in {}", source.path().display()))?;
    ctx.printer(false)?.print_one(&health)
}
