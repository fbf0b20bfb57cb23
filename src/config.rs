//! Command-line configuration for the cart front end.

use crate::model::ProductId;
use crate::storage::DEFAULT_CART_KEY;
use clap::{Parser, Subcommand};
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Shopping cart backed by a stock service and a local store")]
pub struct CartConfig {
    /// Base URL of the stock service.
    #[arg(long, default_value = "http://localhost:3333")]
    pub api_url: String,

    /// JSON file holding the persisted cart.
    #[arg(long, default_value = "./cart.json")]
    pub storage_path: String,

    #[arg(long, default_value = DEFAULT_CART_KEY)]
    pub storage_key: String,

    #[arg(long, default_value = "10")]
    pub request_timeout_secs: u64,

    /// Capacity of the cart actor's request queue.
    #[arg(long, default_value = "32")]
    pub buffer_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the cart.
    Show,
    /// Add one unit of a product.
    Add { id: u32 },
    /// Remove a product line.
    Remove { id: u32 },
    /// Set the quantity of a product line.
    Update {
        id: u32,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Add one unit to an existing line.
    Increment { id: u32 },
    /// Take one unit from an existing line.
    Decrement { id: u32 },
}

impl Command {
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            Command::Show => None,
            Command::Add { id }
            | Command::Remove { id }
            | Command::Update { id, .. }
            | Command::Increment { id }
            | Command::Decrement { id } => Some(ProductId(*id)),
        }
    }
}

impl CartConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| ConfigError::invalid("api_url", &self.api_url, e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::invalid(
                    "api_url",
                    &self.api_url,
                    format!("Unsupported URL scheme: {}", scheme),
                ))
            }
        }

        if self.storage_path.trim().is_empty() {
            return Err(ConfigError::invalid("storage_path", &self.storage_path, "Path cannot be empty"));
        }
        if self.storage_path.contains('\0') {
            return Err(ConfigError::invalid("storage_path", &self.storage_path, "Path contains null bytes"));
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::invalid("storage_key", &self.storage_key, "Key cannot be empty"));
        }
        if self.request_timeout_secs < 1 {
            return Err(ConfigError::invalid(
                "request_timeout_secs",
                self.request_timeout_secs,
                "Value must be at least 1",
            ));
        }
        if self.buffer_size < 1 {
            return Err(ConfigError::invalid("buffer_size", self.buffer_size, "Value must be at least 1"));
        }
        Ok(())
    }
}
