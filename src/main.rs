use daily_commit::cli::Opt;
use env_logger::{Builder, Env};
use std::error::Error;
use structopt::StructOpt;

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();

    if let Err(e) = opt.execute() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
