//! Entry point for the `viram` binary.

use clap::Parser;
use viram_cli::commands::HyphenateArgs;

fn main() {
    let args = HyphenateArgs::parse();

    if let Err(err) = args.execute() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
