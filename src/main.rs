use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = routepatch::cli::parse(None) {
        eprintln!("{}", format!("fatal: {e}").red());
        std::process::exit(1);
    }
}
