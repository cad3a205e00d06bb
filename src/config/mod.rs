//! Configuration module for the blog pipeline
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and resolving which content API endpoint the runtime host should talk to.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_blog::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("blog.toml")).unwrap();
//! println!("Articles per page: {}", config.blog.page_size);
//! ```

mod endpoint;
mod parser;
mod types;
mod validation;

// Re-export types
pub use endpoint::{resolve_endpoint, Endpoint};
pub use types::{ApiConfig, BlogConfig, Config};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
