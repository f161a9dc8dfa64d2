use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DIMS_SORTER_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber. `DIMS_SORTER_LOG` wins over `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
