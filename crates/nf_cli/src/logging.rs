use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Installs the fmt subscriber once; later calls are no-ops.
pub fn init_logging(level: Level) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .init();
        });
    }
}

pub fn parse_level(level: &str) -> Result<Level, String> {
    level
        .parse::<Level>()
        .map_err(|_| format!("Invalid log level: {} (use trace, debug, info, warn or error)", level))
}
