use std::io;

use clap::Parser;
use trek_cli::{run, Args, CliError, RunConfig};

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = RunConfig::from(args);
    let result = run(&config, &mut io::stdout().lock(), &mut io::stderr().lock());

    if let Err(e) = result {
        // Invalid paths have already been explained on stderr.
        if !matches!(e, CliError::InvalidPath(_)) {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}
