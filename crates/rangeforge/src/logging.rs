//! Log output for RangeForge.
//!
//! The algorithm crates only emit `tracing` events; nothing is printed
//! until a subscriber is installed. [`init`] installs a formatted one.
//!
//! ## Log Levels
//!
//! - **DEBUG**: Unmet capability requirements converted into errors
//! - **TRACE**: Action start/end and sort entry

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "rangeforge=info";

/// Installs a global subscriber that formats RangeForge events.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVES`]. Safe to call
/// multiple times - only the first call has effect, and an already
/// installed global subscriber is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
        install(filter);
    });
}

/// Like [`init`], but with explicit filter directives such as
/// `"rangeforge_algorithm=trace"`.
pub fn init_with_directives(directives: &str) {
    INIT.get_or_init(|| install(EnvFilter::new(directives)));
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}
