use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod loader;
mod parsing;

fn main() -> anyhow::Result<()> {
    let args = cli::normalize_legacy_args(std::env::args_os());
    let cli = cli::Cli::parse_from(args);

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("mum_finder=debug,info")
    } else {
        EnvFilter::new("mum_finder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
