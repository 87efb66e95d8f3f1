//! Configuration management module.
//!
//! Loads the server settings from a TOML file (`config.toml` by default),
//! lets command line flags override them and validates the result before
//! anything is started.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **bind_address**: HTTPS listen address
//! - **ssl_cert** / **ssl_key**: PEM files watched by the certificate reloader
//! - **reload_interval**: seconds between two certificate reads (default 60; the
//!   reloader itself defaults to one day when used as a library)
//! - **verbose**: log every reload decision
//! - **threads**, **keep_alive**, **request_timeout**, **disconnect_timeout**: HTTP server tuning
//!
//! # Example
//!
//! ```rust,ignore
//! use certreloader::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! let interval = config.reload_interval_duration();
//! ```

/// Configuration error types.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
