//! # Generator Module
//!
//! Scaffolds a layered Spring CRUD module for each configured entity.
//!
//! ## Overview
//!
//! For every entity the generator writes six Java sources:
//! - **Entity** - JPA `@Entity` with sequence-backed id and one column per field
//! - **DTO** - transfer object with bean-validation annotations
//! - **Mapper** - MapStruct interface between entity and DTO
//! - **Repository** - Spring Data `JpaRepository`
//! - **Service** - paging, lookup, create, update and delete
//! - **Controller** - `@RestController` exposing the service under `/api/{endpoint}`
//!
//! It also keeps two pieces of shared project state:
//! - the `exception` package (`NotFoundException` + `GlobalExceptionHandler`),
//!   written once per session
//! - `messages.properties`, to which each entity's `{entity}.not-found` key is
//!   appended at most once
//!
//! ## Architecture
//!
//! ```text
//! GeneratorConfig → render (per-field fragments) → templates (Askama) → writer / catalog
//! ```
//!
//! 1. **render** - turns each field into entity, DTO, mapper and service fragments
//! 2. **templates** - splices fragments into the Askama templates under `templates/`
//! 3. **writer** - creates files that do not exist yet, never overwrites
//! 4. **catalog** - read-check-append merge into the message catalog
//! 5. **project** - [`ModuleGenerator`] drives the above for each entity
//!
//! ## Generated Structure
//!
//! ```text
//! src/main/java/com/kanstad/task/
//! ├── exception/
//! │   ├── NotFoundException.java
//! │   └── GlobalExceptionHandler.java
//! └── producto/
//!     ├── Producto.java
//!     ├── dto/ProductoDTO.java
//!     ├── mappers/ProductoMapper.java
//!     ├── repositories/ProductoRepository.java
//!     ├── services/ProductoService.java
//!     └── controller/ProductoController.java
//! src/main/resources/messages.properties
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen::config::load_config;
//! use crudgen::generator::{GenerationSession, ModuleGenerator};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = load_config(Path::new("module_config.json"))?;
//! let generator = ModuleGenerator::new(config);
//! let mut session = GenerationSession::new();
//! generator.generate_all(&mut session, None, &[])?;
//! println!("{}", session.summary());
//! # Ok(())
//! # }
//! ```
//!
//! Running the generator again is safe: every existing file is reported as
//! skipped and the catalog is left unchanged.

mod catalog;
mod kind;
mod project;
mod render;
mod session;
mod templates;
mod writer;
#[cfg(test)]
mod tests;

pub use catalog::*;
pub use kind::FileKind;
pub use project::ModuleGenerator;
pub use render::*;
pub use session::*;
pub use templates::*;
pub use writer::*;
