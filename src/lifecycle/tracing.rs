//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the binary.
//!
//! The shell owns stdout for its menus and tables, so log lines go to **stderr**.
//! The format is compact and hides module paths (`with_target(false)`); the
//! structured fields (`dish_id`, `order_id`, `entity_type`, ...) carry the context.
//!
//! ## What Gets Traced
//!
//! - **Data file**: load (restored or fresh) and save, with dish and order counts
//! - **Menu**: dishes added, removed, and availability changes
//! - **Orders**: orders received or rejected, status changes
//! - **Store**: every create/update/delete with its payload at `debug` level
//!
//! ## Usage Examples
//!
//! ```bash
//! # Errors only (default)
//! cargo run
//!
//! # One line per change
//! RUST_LOG=info cargo run
//!
//! # Full payloads
//! cargo run -- --log debug
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `filter` takes `EnvFilter` directives (e.g. `info`, `canteen::orders=debug`).
/// When it is `None` the `RUST_LOG` environment variable is consulted instead.
pub fn setup_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .unwrap_or_else(EnvFilter::from_default_env);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
