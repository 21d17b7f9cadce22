//! CLI definitions and entry point
//!
//! All outcomes funnel through [`run`]: the version pre-check, argument
//! parsing, dispatch, and the single place where errors and interrupts are
//! mapped to exit codes.

use std::env;
use std::ffi::OsString;

use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, Parser, Subcommand};

use super::commands;
use flow::templates;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for errors and interrupts
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for bad usage (no subcommand given)
pub const EXIT_USAGE: i32 = 2;

/// flow - initialize workflow projects from templates
#[derive(Parser, Debug)]
#[command(
    name = "flow",
    about = "A program that aids workflows",
    long_about = "A program that aids workflows.\n\n\
                  Projects are initialized from a fixed set of templates;\n\
                  each template scaffolds a ready-to-edit project module."
)]
pub struct Cli {
    /// Show full diagnostics on error for debugging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Display the version number and exit
    #[arg(long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a workflow project
    Init {
        /// Name of the project to initialize
        alias: Option<String>,

        /// Template to initialize the project from
        #[arg(
            short,
            long,
            default_value = templates::DEFAULT_TEMPLATE,
            value_parser = PossibleValuesParser::new(templates::names())
        )]
        template: String,
    },
}

/// Run the CLI, returning the process exit code.
#[must_use]
pub fn run() -> i32 {
    run_from(env::args_os())
}

/// Run the CLI against an explicit argument list.
#[must_use]
pub fn run_from<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();

    // --version short-circuits all other processing, wherever it appears
    if args.iter().any(|a| a.as_os_str() == "--version") {
        println!("flow {}", env!("CARGO_PKG_VERSION"));
        return EXIT_SUCCESS;
    }

    let cli = Cli::try_parse_from(&args).unwrap_or_else(|err| err.exit());

    if cli.version {
        println!("flow {}", env!("CARGO_PKG_VERSION"));
        return EXIT_SUCCESS;
    }

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        return EXIT_USAGE;
    };

    // In debug mode the default signal disposition stays in place, so an
    // interrupt surfaces with its full diagnostics instead of a one-liner.
    if !cli.debug {
        if let Err(err) = ctrlc::set_handler(|| {
            eprintln!();
            eprintln!("Interrupted.");
            std::process::exit(EXIT_FAILURE);
        }) {
            log::warn!("could not install interrupt handler: {err}");
        }
    }

    match dispatch(command) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            if cli.debug {
                eprintln!("{err:?}");
            } else {
                eprintln!("{err}");
            }
            EXIT_FAILURE
        }
    }
}

/// Invoke the handler bound to the parsed subcommand.
fn dispatch(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Init { alias, template } => commands::init(alias.as_deref(), &template),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_init_with_defaults() {
        let cli = Cli::try_parse_from(["flow", "init"]).unwrap();
        match cli.command {
            Some(Command::Init { alias, template }) => {
                assert!(alias.is_none());
                assert_eq!(template, "minimal");
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_alias_and_template() {
        let cli = Cli::try_parse_from(["flow", "init", "studies", "-t", "example"]).unwrap();
        match cli.command {
            Some(Command::Init { alias, template }) => {
                assert_eq!(alias.as_deref(), Some("studies"));
                assert_eq!(template, "example");
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_template_outside_the_registry() {
        assert!(Cli::try_parse_from(["flow", "init", "-t", "bogus"]).is_err());
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::try_parse_from(["flow", "init", "--debug"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn no_subcommand_parses_to_none() {
        let cli = Cli::try_parse_from(["flow"]).unwrap();
        assert!(cli.command.is_none());
    }
}
