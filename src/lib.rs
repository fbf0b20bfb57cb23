//! # Rocket Cart
//!
//! > **A shopping cart that never sells what is not in stock.**
//!
//! The cart holds line items for a storefront. Every change is checked against
//! a remote stock service, written to a local key-value store, and only then
//! committed in memory. A cart view on top derives formatted prices and totals
//! and turns failures into short notices for the shopper.
//!
//! ## 🚀 Core Concepts
//!
//! ### One Writer
//! The cart is a single entity owned by a generic `ResourceActor<Cart>`. Clients
//! send [`CartAction`](cart_actor::CartAction)s over a channel and the actor
//! handles them one at a time, stock lookups included. Two quick clicks on
//! "add" are two queued actions, never two overlapping read-modify-writes.
//!
//! ### Results, Not Panics
//! Every cart operation returns `Result<_, CartError>`. The view is the only
//! place that turns an error into something user-facing, picking the
//! out-of-stock notice for [`CartError::StockExceeded`](cart_actor::CartError::StockExceeded)
//! and a generic one otherwise.
//!
//! ### Persist, Then Commit
//! A mutation works on a copy of the cart. If saving the copy fails, the
//! in-memory cart is left exactly as it was.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor loop, client, and mocks.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Cart ([`cart_actor`], [`model`])
//! The `ActorEntity` implementation for [`Cart`](model::Cart) and its actions.
//!
//! ### 3. The Edges ([`catalog`], [`storage`])
//! The stock service behind the [`Catalog`](catalog::Catalog) trait and the
//! persistent store behind [`KeyValueStore`](storage::KeyValueStore).
//!
//! ### 4. The Interface ([`clients`], [`view`], [`notify`])
//! [`CartClient`](clients::CartClient) for code, [`CartView`](view::CartView) for people.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`CartSystem`](lifecycle::CartSystem) wires everything from a [`CartConfig`](config::CartConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Against a stock service on localhost:3333
//! cargo run -- add 1
//! cargo run -- increment 1
//! RUST_LOG=rocket_cart=debug cargo run -- show
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod storage;
pub mod view;
