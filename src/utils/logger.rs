use crate::utils::config::get_env_or_default;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initializes the global tracing subscriber
///
/// The level is taken from the `TDA_LOG_LEVEL` environment variable
/// (trace|debug|info|warn|error), defaulting to info. Safe to call more
/// than once; subsequent calls are no-ops.
pub fn setup_logger() {
    let level = get_env_or_default("TDA_LOG_LEVEL", Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
