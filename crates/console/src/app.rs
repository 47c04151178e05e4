//! Wiring of one full run: authenticate, serve the menu, export the ledger.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use dealership_auth::UserDirectory;
use dealership_export::export_ledger;
use dealership_inventory::Catalog;
use dealership_sales::{DealershipState, DefaultConfirmationService};

use crate::config::Args;
use crate::login::{Welcome, authenticate};
use crate::prompt::Prompter;
use crate::session::Session;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The operator left from the welcome screen; nothing was exported.
    Exited,
    /// Authentication failed; nothing was exported.
    AuthenticationFailed,
    /// The session ran and the ledger was exported.
    Exported { rows: usize },
}

pub fn run<R: BufRead, W: Write>(args: &Args, input: R, output: W) -> Result<Outcome> {
    let mut prompter = Prompter::new(input, output);
    let mut directory = UserDirectory::with_defaults();

    let operator = match authenticate(&mut prompter, &mut directory, args.auth_attempts)
        .context("welcome screen failed")?
    {
        Welcome::Authenticated(operator) => operator,
        Welcome::Exited => return Ok(Outcome::Exited),
        Welcome::Failed => return Ok(Outcome::AuthenticationFailed),
    };
    info!(operator = %operator, fleet_size = args.fleet_size, "session started");

    let catalog = Catalog::standard();
    let confirmation = DefaultConfirmationService;
    let mut session = Session::new(
        prompter,
        &catalog,
        &confirmation,
        DealershipState::new(args.fleet_size),
    );
    session.run().context("session aborted")?;
    let (state, mut prompter) = session.into_parts();

    let rows = export_ledger(state.ledger(), args.format.into(), &args.export_path)
        .with_context(|| format!("failed to export to {}", args.export_path.display()))?;
    prompter
        .say(format!(
            "Data written to {} successfully.",
            args.export_path.display()
        ))
        .context("failed to write to console")?;

    info!(operator = %operator, rows, "session finished");
    Ok(Outcome::Exported { rows })
}
