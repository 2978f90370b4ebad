use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `CAVE_PATHS_LOG` is set.
const DEFAULT_FILTER: &str = "cave_paths=warn";

/// Installs a compact stderr subscriber for the library's diagnostics.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("CAVE_PATHS_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
