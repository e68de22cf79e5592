//! # Configuration Module
//!
//! Typed view of the generator's input document.
//!
//! ## Document
//!
//! ```json
//! {
//!   "base_path": "src/main/java",
//!   "package_base": "com.kanstad.task",
//!   "entities": [
//!     {
//!       "name": "Producto",
//!       "id_prefix": "pro",
//!       "fields": [
//!         { "name": "codigo", "value_type": "String", "column": "codigo",
//!           "required": true, "max_length": 20 },
//!         { "name": "categoria", "type": "relation", "relation_class": "Categoria",
//!           "column": "categoria_id", "required": true }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Files ending in `.yaml` or `.yml` are read as YAML with the same shape.
//!
//! Only `package_base`, each entity's `name` and `fields`, and each field's
//! `name` and `column` are mandatory. See [`GeneratorConfig`] for the defaults
//! applied to everything else.

mod error;
mod load;
mod types;

pub use error::ConfigError;
pub use load::{load_config, parse_config, ConfigFormat};
pub use types::*;
