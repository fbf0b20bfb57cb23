//! Runtime orchestration and lifecycle management.
//!
//! - [`CartSystem`] - builds the catalog and storage from configuration, loads
//!   the persisted cart, spawns the cart actor and shuts it down again
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use self::tracing::*;
