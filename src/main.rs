use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use create_component::{
    args::Args,
    config::Config,
    confirm::{ask_yes_no, print_group},
    engine::{CookiecutterCli, ScaffoldEngine, ScaffoldRequest, TEMPLATE_URI},
    error, log,
};

fn app() -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current dir")?;
    let config = Config::load(&cwd)?;

    let command = config.apply_defaults(Args::command());
    let matches = command
        .try_get_matches_from(std::env::args_os())
        .unwrap_or_else(|err| err.exit());
    let args = Args::from_arg_matches(&matches)?;

    let (options, context) = args.split();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    print_group(&mut out, "Scaffolder options", &options.entries())?;
    print_group(&mut out, "Template variables", context.pairs())?;

    let stdin = std::io::stdin();
    let confirmed = ask_yes_no("Confirm?", Some(true), stdin.lock(), &mut out)?;
    if !confirmed {
        writeln!(out, "Creation aborted. Bye!")?;
        return Ok(ExitCode::SUCCESS);
    }

    log::init_verbosity(options.verbose);

    let engine = CookiecutterCli::from_env();
    let request = ScaffoldRequest {
        template: TEMPLATE_URI,
        options: &options,
        context: &context,
    };

    // Engine failures are reported but still exit 0, matching the behavior
    // scripts already depend on. See DESIGN.md before changing the policy.
    match engine.generate(&request) {
        Ok(()) => writeln!(out, "Done!")?,
        Err(err) => writeln!(out, "{err:#}")?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match app() {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
