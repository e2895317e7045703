use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hansen - Hansen Solubility Parameter (HSP) compatibility screening between a solute and candidate solvents.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a solute against a set of solvents: Hansen distance, RED,
    /// classification, temperature-corrected solubility, and 3D plot data.
    Eval(EvalArgs),
    /// Query the solvent reference table.
    Solvents(SolventsArgs),
    /// Query the solute reference table.
    Solutes(SolutesArgs),
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Solute name from the reference table.
    #[arg(long, value_name = "NAME", conflicts_with = "solute_params")]
    pub solute: Option<String>,

    /// Explicit solute parameters as four comma-separated numbers: D,P,H,RO.
    #[arg(long, value_name = "D,P,H,RO")]
    pub solute_params: Option<String>,

    /// Candidate solvent name; repeat the flag to select several.
    #[arg(short = 's', long = "solvent", value_name = "NAME")]
    pub solvents: Vec<String>,

    /// Evaluate against every solvent in the reference table.
    #[arg(long, conflicts_with = "solvents")]
    pub all_solvents: bool,

    /// Temperature for the solubility correction (reference: 25).
    #[arg(short, long, value_name = "DEGREES", default_value_t = 25.0)]
    pub temperature: f64,

    /// Merge a TOML table file over the built-in reference tables.
    #[arg(long, value_name = "PATH")]
    pub tables: Option<PathBuf>,

    /// Import additional solvents from a CSV file (header: name,d,p,h).
    #[arg(long, value_name = "PATH")]
    pub solvents_csv: Option<PathBuf>,

    /// Write the full JSON report (results, plot data, temperature curves).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the per-solvent records as CSV.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// Arguments for the `solvents` subcommand.
#[derive(Args, Debug)]
pub struct SolventsArgs {
    #[command(subcommand)]
    pub command: SolventsCommands,
}

#[derive(Subcommand, Debug)]
pub enum SolventsCommands {
    /// List every solvent with its HSP components.
    List {
        /// Merge a TOML table file over the built-in reference tables.
        #[arg(long, value_name = "PATH")]
        tables: Option<PathBuf>,
    },
    /// Case-insensitive substring search over solvent names.
    Search {
        query: String,
        #[arg(long, value_name = "PATH")]
        tables: Option<PathBuf>,
    },
    /// Show one solvent entry.
    Show {
        name: String,
        #[arg(long, value_name = "PATH")]
        tables: Option<PathBuf>,
    },
}

/// Arguments for the `solutes` subcommand.
#[derive(Args, Debug)]
pub struct SolutesArgs {
    #[command(subcommand)]
    pub command: SolutesCommands,
}

#[derive(Subcommand, Debug)]
pub enum SolutesCommands {
    /// List every solute with its HSP components and interaction radius.
    List {
        #[arg(long, value_name = "PATH")]
        tables: Option<PathBuf>,
    },
    /// Show one solute entry.
    Show {
        name: String,
        #[arg(long, value_name = "PATH")]
        tables: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn eval_accepts_repeated_solvent_flags() {
        let cli = Cli::parse_from([
            "hansen",
            "eval",
            "--solute",
            "Curcumin",
            "-s",
            "Ethanol",
            "-s",
            "Acetone",
            "--temperature",
            "40",
        ]);
        let Commands::Eval(args) = cli.command else {
            panic!("expected eval command");
        };
        assert_eq!(args.solute.as_deref(), Some("Curcumin"));
        assert_eq!(args.solvents, vec!["Ethanol", "Acetone"]);
        assert_eq!(args.temperature, 40.0);
    }

    #[test]
    fn solute_name_and_explicit_params_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "hansen",
            "eval",
            "--solute",
            "Curcumin",
            "--solute-params",
            "18.2,8.6,11.5,5.5",
            "-s",
            "Ethanol",
        ]);
        assert!(result.is_err());
    }
}
