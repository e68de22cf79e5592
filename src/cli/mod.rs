//! # CLI Module
//!
//! Command-line interface of the `crudgen` binary.
//!
//! ## Commands
//!
//! ### `init`
//!
//! Write a starter configuration with two sample entities:
//!
//! ```bash
//! crudgen init --package-base com.kanstad.task
//! ```
//!
//! ### `generate`
//!
//! Generate a module per configured entity:
//!
//! ```bash
//! crudgen generate --config module_config.json
//! ```
//!
//! Options:
//! - `--config <FILE>` - configuration document (default: `module_config.json`)
//! - `--output <DIR>` - output root, overriding `base_path`
//! - `--resources <DIR>` - directory of `messages.properties`
//! - `--entity <NAME>` - restrict generation (repeatable, comma-separated)
//!
//! ### `preview`
//!
//! Print a single rendered file:
//!
//! ```bash
//! crudgen preview --entity Producto --file service
//! ```
//!
//! Add `-v` to any command for debug logging on stderr.

mod commands;


pub use commands::{run, run_cli, Cli, Commands, PreviewFile};
