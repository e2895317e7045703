use crate::cli::{SolventsArgs, SolventsCommands};
use crate::error::{CliError, Result};

pub fn run(args: SolventsArgs) -> Result<()> {
    match args.command {
        SolventsCommands::List { tables } => {
            let repository = super::load_repository(tables.as_deref())?;
            println!("{:<44} {:>6} {:>6} {:>6}", "Solvent", "δD", "δP", "δH");
            for (name, hsp) in repository.solvents() {
                println!("{:<44} {:>6.1} {:>6.1} {:>6.1}", name, hsp.d, hsp.p, hsp.h);
            }
            println!("\n{} solvent(s).", repository.solvent_count());
        }
        SolventsCommands::Search { query, tables } => {
            let repository = super::load_repository(tables.as_deref())?;
            let matches = repository.search_solvents(&query);
            for name in &matches {
                println!("{}", name);
            }
            println!("\n{} match(es) for '{}'.", matches.len(), query);
        }
        SolventsCommands::Show { name, tables } => {
            let repository = super::load_repository(tables.as_deref())?;
            let hsp = repository
                .solvent(&name)
                .ok_or_else(|| CliError::Argument(format!("unknown solvent '{}'", name)))?;
            println!("{}", name);
            println!("  δD (Dispersion):        {:.1}", hsp.d);
            println!("  δP (Polar):             {:.1}", hsp.p);
            println!("  δH (Hydrogen Bonding):  {:.1}", hsp.h);
        }
    }
    Ok(())
}
