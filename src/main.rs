use cave_paths::app::{self, Cli};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Err(e) = cave_paths::logging::init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }
    app::run_app(cli)?;
    Ok(())
}
