//! Bayline CLI - signal wiring and link-consistency tool
//!
//! Usage: bayline <COMMAND>
//!
//! Commands:
//!   validate       Structural validation of the link graph
//!   pending        Pending endpoint counters
//!   replicate      Clone a whole bay with identity remapping
//!   remove-signal  Delete a signal and every endpoint referencing it

use std::process::ExitCode;

use clap::Parser;

use bayline::cli::{Cli, Commands};
use bayline::commands;
use bayline::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code.min(u8::MAX as i32) as u8),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = Config::load(&std::env::current_dir()?)?;
    let project_path = commands::resolve_project_path(cli.project, &config)?;

    match cli.command {
        Commands::Validate { bay, strict } => {
            commands::validate::run(&project_path, bay.as_deref(), strict, cli.json)
        }
        Commands::Pending { bay } => {
            commands::pending::run(&project_path, bay.as_deref(), cli.json)
        }
        Commands::Replicate {
            source,
            name,
            src_token,
            dst_token,
            dx,
            dy,
            mask_external,
            output,
        } => commands::replicate::run(
            &project_path,
            &config.replicate,
            commands::replicate::ReplicateArgs {
                source: &source,
                name: &name,
                src_token: &src_token,
                dst_token: &dst_token,
                dx,
                dy,
                mask_external,
                output: output.as_deref(),
            },
            cli.json,
        ),
        Commands::RemoveSignal {
            bay,
            signal,
            all_bays,
            yes,
        } => commands::remove_signal::run(&project_path, &bay, &signal, all_bays, yes),
    }
}
