use std::io;
use std::process::ExitCode;

use clap::Parser;

use dealership_console::{Args, Outcome};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    dealership_observability::init(args.log_format.into());

    let outcome = dealership_console::run(&args, io::stdin().lock(), io::stdout().lock())?;

    Ok(match outcome {
        Outcome::Exited | Outcome::Exported { .. } => ExitCode::SUCCESS,
        Outcome::AuthenticationFailed => ExitCode::from(1),
    })
}
