//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. The
//! filter comes from `RUST_LOG` when it is set, otherwise `rocket_cart=info`
//! (or `rocket_cart=debug` with `--verbose`).
//!
//! ```bash
//! # Show every request the cart actor handles
//! RUST_LOG=rocket_cart=debug rocket-cart add 1
//!
//! # Only the actor loop
//! RUST_LOG=rocket_cart::framework=debug rocket-cart show
//! ```
//!
//! Logs carry structured fields rather than interpolated strings, e.g.
//!
//! ```text
//! DEBUG Action entity_type="Cart" id=cart_1 action=AddProduct(ProductId(1))
//! INFO Action ok entity_type="Cart" id=cart_1
//! WARN Cart operation rejected error=Insufficient stock for product_1: requested 2, available 1
//! ```
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn setup_tracing(verbose: bool) {
    let default_filter = if verbose {
        "rocket_cart=debug"
    } else {
        "rocket_cart=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false) // Don't show module paths - we use entity_type instead
                .compact(),
        )
        .init();
}
