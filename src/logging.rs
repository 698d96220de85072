// src/logging.rs
use env_logger::{Builder, Env};

/// Level shown when `RUST_LOG` is unset; not-found diagnostics are `warn!`
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Logger settings read from `env`, falling back to `DEFAULT_LOG_FILTER`
pub fn builder_from(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_LOG_FILTER))
}

/// Install the global logger; `RUST_LOG` overrides the default filter
pub fn init() {
    builder_from(Env::default()).init();
}
