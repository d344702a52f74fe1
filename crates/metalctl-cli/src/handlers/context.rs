use crate::context::ExecutionContext;
use anyhow::{Result, bail};
use metalctl_types::Context;

pub fn list(ctx: &ExecutionContext) -> Result<()> {
    let mut contexts = ctx.config()?.contexts();
    ctx.sorter::<Context>()?.sort(&mut contexts.contexts)?;
    ctx.printer(false)?.print_list(&[contexts])
}

pub fn switch(ctx: &ExecutionContext, name: &str) -> Result<()> {
    let mut config = ctx.config()?.clone();
    if config.current_context.as_deref() == Some(name) {
        println!("Context {:?} already active", name);
        return Ok(());
    }

    config.switch_context(name)?;
    config.save_to(ctx.config_path())?;
    tracing::debug!(path = %ctx.config_path().display(), context = name, "saved config");
    println!("Switched context to {:?}", name);
    Ok(())
}

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let contexts = ctx.config()?.contexts();
    let Some(current) = contexts.current() else {
        bail!("no context is active, add one to {}", ctx.config_path().display());
    };
    println!("{}", current.name);
    Ok(())
}
