use clap::Parser;
use roster::error::Result;
use std::io;

mod cli;
use cli::args::Cli;
use cli::setup::{build_shell, init_tracing, resolve_config};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = build_shell(&config, stdin.lock(), stdout.lock());
    shell.run()
}
