//! Generic single-writer actor framework.
//!
//! This module provides the building blocks the cart is built on: an entity
//! trait, a generic actor that owns a store of entities and processes requests
//! one at a time, and a clonable client that talks to it over channels.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns entities and serializes every request
//! - [`ResourceClient`] - Type-safe handle for sending requests to a [`ResourceActor`]
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
