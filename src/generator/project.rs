use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::catalog::{merge_message_entry, resolve_resources_dir, CATALOG_FILE_NAME};
use super::kind::FileKind;
use super::session::{GenerationSession, Outcome};
use super::templates::{assemble, shared_files};
use super::writer::write_if_absent;
use crate::config::{ConfigError, EntityConfig, GeneratorConfig};

/// Generates CRUD modules for the entities of one configuration
///
/// Holds the immutable configuration only; per-run state lives in the
/// [`GenerationSession`] passed to each call.
#[derive(Debug, Clone)]
pub struct ModuleGenerator {
    config: GeneratorConfig,
}

impl ModuleGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// `{output_base}/{modules_base_path}`
    pub fn modules_root(&self, output_base: &Path) -> PathBuf {
        output_base.join(self.config.modules_base_path())
    }

    /// Directory of one entity's module.
    pub fn module_dir(&self, output_base: &Path, entity: &EntityConfig) -> PathBuf {
        self.modules_root(output_base)
            .join(entity.package_segment())
    }

    /// Directory of the shared exception package.
    pub fn exception_dir(&self, output_base: &Path) -> PathBuf {
        self.modules_root(output_base).join("exception")
    }

    /// Location of `messages.properties` for an output tree.
    pub fn catalog_path(&self, output_base: &Path) -> PathBuf {
        resolve_resources_dir(self.config.resources_path.as_deref(), output_base)
            .join(CATALOG_FILE_NAME)
    }

    /// Paths of the six module files, in write order.
    pub fn module_paths(&self, output_base: &Path, entity: &EntityConfig) -> Vec<(FileKind, PathBuf)> {
        let dir = self.module_dir(output_base, entity);
        let class_name = entity.class_name();
        FileKind::MODULE
            .into_iter()
            .map(|kind| (kind, kind.module_path(&dir, &class_name)))
            .collect()
    }

    /// Write `NotFoundException` and `GlobalExceptionHandler` if absent.
    ///
    /// Does nothing when the session already attempted it.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn ensure_shared_exception_files(
        &self,
        session: &mut GenerationSession,
        output_base: &Path,
    ) -> anyhow::Result<()> {
        if session.shared_files_attempted() {
            return Ok(());
        }
        session.mark_shared_files_attempted();

        let files = shared_files(&self.config)?;
        let dir = self.exception_dir(output_base);
        for (kind, content) in [
            (FileKind::NotFoundException, &files.not_found_exception),
            (FileKind::ExceptionHandler, &files.exception_handler),
        ] {
            let path = dir.join(kind.file_name(""));
            let outcome = write_if_absent(&path, content)?;
            session.record(kind, &path, outcome);
        }
        Ok(())
    }

    /// Merge the entity's `not-found` entry into the message catalog.
    ///
    /// Failures are logged and recorded as warnings; they never abort the run.
    pub fn update_message_catalog(
        &self,
        session: &mut GenerationSession,
        entity: &EntityConfig,
        output_base: &Path,
    ) {
        let path = self.catalog_path(output_base);
        let key = entity.not_found_key();
        let message = self.config.not_found_message(&entity.name);
        match merge_message_entry(&path, &key, &message) {
            Ok(outcome) => session.record(FileKind::MessageCatalog, &path, outcome),
            Err(e) => {
                warn!(
                    catalog = %path.display(),
                    key = %key,
                    error = %format!("{e:#}"),
                    "could not update message catalog, continuing"
                );
                session.record(FileKind::MessageCatalog, &path, Outcome::Failed);
            }
        }
    }

    /// Generate one entity's module under `output_base`.
    ///
    /// All six files are rendered before anything is written. Existing files
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or a module/shared file cannot be
    /// written. Catalog failures are not errors.
    pub fn generate_module(
        &self,
        session: &mut GenerationSession,
        entity: &EntityConfig,
        output_base: &Path,
    ) -> anyhow::Result<()> {
        info!(entity = %entity.name, output = %output_base.display(), "generating module");
        let files = assemble(&self.config, entity)?;

        self.ensure_shared_exception_files(session, output_base)?;
        self.update_message_catalog(session, entity, output_base);

        for (kind, path) in self.module_paths(output_base, entity) {
            let Some(content) = files.get(kind) else {
                continue;
            };
            let outcome = write_if_absent(&path, content)?;
            session.record(kind, &path, outcome);
        }
        Ok(())
    }

    /// Generate every configured entity, or only those named in `only`.
    ///
    /// `output_base` overrides the configured `base_path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEntity`] (before writing anything) when
    /// `only` names an entity that is not configured, otherwise the errors of
    /// [`ModuleGenerator::generate_module`].
    pub fn generate_all(
        &self,
        session: &mut GenerationSession,
        output_base: Option<&Path>,
        only: &[String],
    ) -> anyhow::Result<()> {
        let output_base = output_base.unwrap_or(self.config.base_path.as_path());
        let entities = self.select_entities(only)?;
        for entity in entities {
            println!("Generating module for: {}", entity.name);
            println!("{}", "=".repeat(60));
            self.generate_module(session, entity, output_base)?;
            println!();
        }
        Ok(())
    }

    /// Entities to generate, in configuration order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEntity`] for names not in the configuration.
    pub fn select_entities(&self, only: &[String]) -> Result<Vec<&EntityConfig>, ConfigError> {
        if only.is_empty() {
            return Ok(self.config.entities.iter().collect());
        }
        if let Some(missing) = only.iter().find(|name| self.config.entity(name).is_none()) {
            return Err(ConfigError::UnknownEntity {
                name: missing.clone(),
            });
        }
        Ok(self
            .config
            .entities
            .iter()
            .filter(|e| only.contains(&e.name))
            .collect())
    }
}
