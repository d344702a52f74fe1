use clap::Parser;
use metalctl_cli::{Cli, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

/// Sort key mistakes are usage errors, like the ones clap reports itself.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<metalctl_engine::Error>() {
        Some(e) if e.is_usage() => 2,
        _ => 1,
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
