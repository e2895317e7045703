use crate::cli::{SolutesArgs, SolutesCommands};
use crate::error::{CliError, Result};

pub fn run(args: SolutesArgs) -> Result<()> {
    match args.command {
        SolutesCommands::List { tables } => {
            let repository = super::load_repository(tables.as_deref())?;
            println!(
                "{:<24} {:>6} {:>6} {:>6} {:>6}",
                "Solute", "δD", "δP", "δH", "Ro"
            );
            for (name, record) in repository.solutes() {
                println!(
                    "{:<24} {:>6.1} {:>6.1} {:>6.1} {:>6.1}",
                    name, record.hsp.d, record.hsp.p, record.hsp.h, record.ro
                );
            }
            println!("\n{} solute(s).", repository.solute_count());
        }
        SolutesCommands::Show { name, tables } => {
            let repository = super::load_repository(tables.as_deref())?;
            let record = repository
                .solute(&name)
                .ok_or_else(|| CliError::Argument(format!("unknown solute '{}'", name)))?;
            println!("{}", name);
            println!("  δD (Dispersion):        {:.1}", record.hsp.d);
            println!("  δP (Polar):             {:.1}", record.hsp.p);
            println!("  δH (Hydrogen Bonding):  {:.1}", record.hsp.h);
            println!("  Ro (Interaction radius): {:.2}", record.ro);
        }
    }
    Ok(())
}
