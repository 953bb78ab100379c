//! Integration tests for Makh Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p makh-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `delivery_scheduling` - Schedule loading from disk and end-to-end
//!   delivery date computation and formatting
//! - `cart_persistence` - Cart sessions over the file-backed slot, including
//!   rehydration and corrupt-payload recovery

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Install a test subscriber so `tracing` output from the crates under test
/// shows up with `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
