//! # crudgen
//!
//! **crudgen** scaffolds layered Spring CRUD modules from a declarative
//! description of business entities.
//!
//! ## Overview
//!
//! Given a JSON (or YAML) document listing entities and their fields, crudgen
//! writes for each entity a JPA entity, a validated DTO, a MapStruct mapper, a
//! Spring Data repository, a service and a REST controller. It also maintains
//! a shared `exception` package and the `messages.properties` catalog that
//! holds the `not-found` message of every entity.
//!
//! Generation is additive: files that already exist are never overwritten and
//! catalog keys are never duplicated, so the generator can be re-run after
//! adding entities or after hand-editing generated code.
//!
//! ## Architecture
//!
//! - **[`config`]** - configuration document, defaults and validation
//! - **[`naming`]** - identifier case conversions (snake, kebab, capitalized)
//! - **[`generator`]** - field rendering, Askama templates, idempotent writes
//!   and the message catalog merge
//! - **[`cli`]** - the `crudgen` command-line interface
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(crudgen)
//!     participant Config as config::load_config
//!     participant Gen as generator::ModuleGenerator
//!     participant Templates as generator::templates
//!     participant FS as File System
//!
//!     User->>CLI: crudgen generate --config module_config.json
//!     CLI->>Config: load_config(path)
//!     Config-->>CLI: GeneratorConfig
//!     loop each entity
//!         CLI->>Gen: generate_module(session, entity)
//!         Gen->>Templates: assemble(config, entity)
//!         Templates-->>Gen: ModuleFiles
//!         Gen->>FS: exception package (once per session)
//!         Gen->>FS: merge messages.properties entry
//!         Gen->>FS: write six files if absent
//!     end
//!     CLI-->>User: summary
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! crudgen init --package-base com.kanstad.task
//! crudgen generate --config module_config.json
//! ```
//!
//! ## Library Use
//!
//! ```rust,no_run
//! use crudgen::config::parse_config;
//! use crudgen::config::ConfigFormat;
//! use crudgen::generator::assemble;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = parse_config(
//!     r#"{"package_base": "com.acme", "entities": [{"name": "Marca", "fields": []}]}"#,
//!     ConfigFormat::Json,
//!     "inline",
//! )?;
//! let files = assemble(&config, &config.entities[0])?;
//! println!("{}", files.controller);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod naming;

pub use config::{load_config, GeneratorConfig};
pub use generator::{GenerationSession, ModuleGenerator};
