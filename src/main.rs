use std::error::Error;
use std::io;

use clap::Parser;
use log::info;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use mirrorbox::output::{save_outcome, write_outcome};
use mirrorbox::{Scene, simulate};

fn main() {
    let args = Args::parse();

    init_logger(args.log_level());

    // Log application startup with version information
    info!("Mirrorbox - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Load, simulate and record; nothing is written unless the simulation succeeds.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let scene = Scene::load(&args.input)?;
    let outcome = simulate(&scene)?;

    if args.stdout {
        write_outcome(&mut io::stdout().lock(), &outcome)?;
    } else {
        save_outcome(&args.output, &outcome)?;
    }
    Ok(())
}
