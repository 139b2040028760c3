mod cli;

use clap::Parser;

fn main() {
    env_logger::init();
    let args = cli::Cli::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
