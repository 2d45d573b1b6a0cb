//! proteus-deploy CLI - install an application to the Proteus SD card
//!
//! Usage: proteus-deploy <app-name>
//!
//! Run without arguments for an overview of what the tool does.

use std::process::ExitCode;

use clap::Parser;

use proteus_deploy::deploy;

/// Install a built application image onto the Proteus SD card
#[derive(Parser, Debug)]
#[command(name = "proteus-deploy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the application to install (basename of its directory)
    app_name: Option<String>,
}

const OVERVIEW: &str = "\
OVERVIEW: A tool to install an application to the Proteus SD card.

<app-name> is the name of the application to be installed. This is equivalent
to the basename of the directory containing the application.
If the SD card is not inserted, the tool will exit with an error message.
Otherwise, the .s19 file corresponding to the application is copied to the
SD card as CODE.S19.

USAGE: proteus-deploy <app-name>";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(app_name) = cli.app_name else {
        println!("{}", OVERVIEW);
        return ExitCode::SUCCESS;
    };

    match deploy::deploy(&app_name) {
        Ok(outcome) => {
            println!(
                "Copying <{}> to <{}>... done",
                outcome.source.display(),
                outcome.dest.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
