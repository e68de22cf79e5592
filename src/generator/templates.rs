use anyhow::Context;
use askama::Template;
use std::collections::BTreeSet;
use std::path::Path;

use super::kind::FileKind;
use super::render::{
    create_assignment, dto_field, entity_field, relation_import, relation_lookup,
    relation_mappings, relation_repository_import, repository_var, update_assignment,
    validation_imports,
};
use super::writer::{write_if_absent, WriteOutcome};
use crate::config::{EntityConfig, GeneratorConfig};

/// Template data for the JPA entity
#[derive(Template)]
#[template(path = "entity.java.txt", escape = "none")]
pub struct EntityTemplateData {
    /// Java package of the module root
    pub package: String,
    /// Sorted, de-duplicated imports
    pub imports: Vec<String>,
    pub table_name: String,
    pub schema: String,
    pub class_name: String,
    /// Fully qualified id sequence (`schema.table_prefix_id_seq`)
    pub sequence_name: String,
    pub id_prefix: String,
    /// Rendered field blocks, in declaration order
    pub fields: Vec<String>,
}

/// Template data for the transfer object
#[derive(Template)]
#[template(path = "dto.java.txt", escape = "none")]
pub struct DtoTemplateData {
    pub package: String,
    pub imports: Vec<String>,
    pub class_name: String,
    /// Rendered properties with their validation annotations
    pub fields: Vec<String>,
}

/// Template data for the MapStruct mapper
#[derive(Template)]
#[template(path = "mapper.java.txt", escape = "none")]
pub struct MapperTemplateData {
    pub package: String,
    pub imports: Vec<String>,
    pub entity_class: String,
    pub dto_class: String,
    /// Parameter name of the mapping methods
    pub param: String,
    pub to_dto_mappings: Vec<String>,
    pub to_entity_mappings: Vec<String>,
}

/// Template data for the Spring Data repository
#[derive(Template)]
#[template(path = "repository.java.txt", escape = "none")]
pub struct RepositoryTemplateData {
    pub package: String,
    pub imports: Vec<String>,
    pub entity_class: String,
}

/// Template data for the service
#[derive(Template)]
#[template(path = "service.java.txt", escape = "none")]
pub struct ServiceTemplateData {
    pub package: String,
    pub imports: Vec<String>,
    pub entity_class: String,
    pub dto_class: String,
    pub var_name: String,
    /// Catalog key thrown when the entity itself is missing
    pub not_found_key: String,
    /// Injected repositories of related entities
    pub repositories: Vec<String>,
    /// Relation lookups run before create and update
    pub lookups: Vec<String>,
    pub create_assignments: Vec<String>,
    pub update_assignments: Vec<String>,
}

/// Template data for the REST controller
#[derive(Template)]
#[template(path = "controller.java.txt", escape = "none")]
pub struct ControllerTemplateData {
    pub package: String,
    pub imports: Vec<String>,
    pub entity_class: String,
    pub dto_class: String,
    pub service_class: String,
    pub var_name: String,
    /// Path segment under `/api/`
    pub endpoint: String,
}

/// Shared `NotFoundException`
#[derive(Template)]
#[template(path = "not_found_exception.java.txt", escape = "none")]
pub struct NotFoundExceptionTemplate {
    pub package: String,
}

/// Shared `@RestControllerAdvice` mapping exceptions to responses
#[derive(Template)]
#[template(path = "global_exception_handler.java.txt", escape = "none")]
pub struct ExceptionHandlerTemplate {
    pub package: String,
}

/// Starter configuration written by `crudgen init`
#[derive(Template)]
#[template(path = "module_config.json.txt", escape = "none")]
pub struct ExampleConfigTemplate {
    pub package_base: String,
}

/// Rendered contents of the six per-entity files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFiles {
    pub entity: String,
    pub dto: String,
    pub mapper: String,
    pub repository: String,
    pub service: String,
    pub controller: String,
}

impl ModuleFiles {
    /// Content of one module file; `None` for shared kinds.
    pub fn get(&self, kind: FileKind) -> Option<&str> {
        match kind {
            FileKind::Entity => Some(&self.entity),
            FileKind::Dto => Some(&self.dto),
            FileKind::Mapper => Some(&self.mapper),
            FileKind::Repository => Some(&self.repository),
            FileKind::Service => Some(&self.service),
            FileKind::Controller => Some(&self.controller),
            _ => None,
        }
    }

    /// `(kind, content)` pairs in write order.
    pub fn iter(&self) -> impl Iterator<Item = (FileKind, &str)> {
        FileKind::MODULE
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|content| (kind, content)))
    }
}

/// Rendered contents of the shared exception package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFiles {
    pub not_found_exception: String,
    pub exception_handler: String,
}

/// Package names of one module
struct Packages {
    root: String,
    base: String,
}

impl Packages {
    fn new(config: &GeneratorConfig, entity: &EntityConfig) -> Self {
        Self {
            root: format!("{}.{}", config.package_base, entity.package_segment()),
            base: config.package_base.clone(),
        }
    }

    fn of(&self, kind: FileKind) -> String {
        match kind.sub_package() {
            Some(sub) => format!("{}.{sub}", self.root),
            None => self.root.clone(),
        }
    }

    fn class(&self, kind: FileKind, class_name: &str) -> String {
        let file = kind.file_name(class_name);
        let simple = file.strip_suffix(".java").unwrap_or(&file);
        format!("{}.{simple}", self.of(kind))
    }

    fn not_found_exception(&self) -> String {
        format!("{}.exception.NotFoundException", self.base)
    }
}

fn sorted(imports: BTreeSet<String>) -> Vec<String> {
    imports.into_iter().collect()
}

fn with_trailing_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

/// Render the JPA entity.
pub fn render_entity(config: &GeneratorConfig, entity: &EntityConfig) -> askama::Result<String> {
    let packages = Packages::new(config, entity);
    let mut imports: BTreeSet<String> = [
        "jakarta.persistence.Column",
        "jakarta.persistence.Entity",
        "jakarta.persistence.GeneratedValue",
        "jakarta.persistence.GenerationType",
        "jakarta.persistence.Id",
        "jakarta.persistence.SequenceGenerator",
        "jakarta.persistence.Table",
        "lombok.AllArgsConstructor",
        "lombok.Builder",
        "lombok.Data",
        "lombok.NoArgsConstructor",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    for rel in entity.relations() {
        imports.insert("jakarta.persistence.JoinColumn".to_string());
        imports.insert("jakarta.persistence.ManyToOne".to_string());
        imports.insert(relation_import(&config.package_base, rel));
    }

    let schema = config.schema_for(entity);
    let table_name = entity.table_name();
    let id_prefix = entity.id_prefix();
    EntityTemplateData {
        package: packages.of(FileKind::Entity),
        imports: sorted(imports),
        sequence_name: format!("{schema}.{table_name}_{id_prefix}_id_seq"),
        fields: entity
            .fields
            .iter()
            .map(|f| entity_field(f, &id_prefix))
            .collect(),
        table_name,
        schema,
        class_name: entity.class_name(),
        id_prefix,
    }
    .render()
    .map(with_trailing_newline)
}

/// Render the transfer object.
pub fn render_dto(config: &GeneratorConfig, entity: &EntityConfig) -> askama::Result<String> {
    let packages = Packages::new(config, entity);
    let mut imports: BTreeSet<String> = [
        "lombok.AllArgsConstructor",
        "lombok.Getter",
        "lombok.NoArgsConstructor",
        "lombok.Setter",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    imports.extend(
        entity
            .fields
            .iter()
            .flat_map(validation_imports)
            .map(String::from),
    );

    DtoTemplateData {
        package: packages.of(FileKind::Dto),
        imports: sorted(imports),
        class_name: format!("{}DTO", entity.class_name()),
        fields: entity.fields.iter().map(dto_field).collect(),
    }
    .render()
    .map(with_trailing_newline)
}

/// Render the MapStruct mapper.
pub fn render_mapper(config: &GeneratorConfig, entity: &EntityConfig) -> askama::Result<String> {
    let packages = Packages::new(config, entity);
    let class_name = entity.class_name();
    let (to_dto_mappings, to_entity_mappings): (Vec<String>, Vec<String>) =
        entity.relations().map(relation_mappings).unzip();

    let mut imports = BTreeSet::from([
        "org.mapstruct.Mapper".to_string(),
        packages.class(FileKind::Entity, &class_name),
        packages.class(FileKind::Dto, &class_name),
    ]);
    if !to_dto_mappings.is_empty() {
        imports.insert("org.mapstruct.Mapping".to_string());
    }

    MapperTemplateData {
        package: packages.of(FileKind::Mapper),
        imports: sorted(imports),
        dto_class: format!("{class_name}DTO"),
        entity_class: class_name,
        param: entity.package_segment(),
        to_dto_mappings,
        to_entity_mappings,
    }
    .render()
    .map(with_trailing_newline)
}

/// Render the repository interface.
pub fn render_repository(
    config: &GeneratorConfig,
    entity: &EntityConfig,
) -> askama::Result<String> {
    let packages = Packages::new(config, entity);
    let class_name = entity.class_name();
    let imports = BTreeSet::from([
        "org.springframework.data.jpa.repository.JpaRepository".to_string(),
        "org.springframework.stereotype.Repository".to_string(),
        packages.class(FileKind::Entity, &class_name),
    ]);

    RepositoryTemplateData {
        package: packages.of(FileKind::Repository),
        imports: sorted(imports),
        entity_class: class_name,
    }
    .render()
    .map(with_trailing_newline)
}

/// Render the service.
///
/// Related repositories are injected once per related class; a relation back
/// to the entity itself reuses the entity's own repository.
pub fn render_service(config: &GeneratorConfig, entity: &EntityConfig) -> askama::Result<String> {
    let packages = Packages::new(config, entity);
    let class_name = entity.class_name();
    let var_name = entity.var_name();
    let own_repository = repository_var(&class_name);

    let mut imports: BTreeSet<String> = [
        "lombok.RequiredArgsConstructor",
        "org.springframework.data.domain.Page",
        "org.springframework.data.domain.Pageable",
        "org.springframework.stereotype.Service",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    imports.insert(packages.not_found_exception());
    for kind in [
        FileKind::Entity,
        FileKind::Dto,
        FileKind::Mapper,
        FileKind::Repository,
    ] {
        imports.insert(packages.class(kind, &class_name));
    }

    let mut injected = BTreeSet::new();
    let mut repositories = Vec::new();
    let mut lookups = Vec::new();
    let mut create_assignments = Vec::new();
    for rel in entity.relations() {
        imports.insert(relation_import(&config.package_base, rel));
        imports.insert(relation_repository_import(&config.package_base, rel));
        let repo = repository_var(&rel.relation_class);
        if repo != own_repository && injected.insert(repo.clone()) {
            repositories.push(format!(
                "    private final {}Repository {repo};",
                rel.relation_class
            ));
        }
        lookups.push(relation_lookup(rel));
        create_assignments.push(create_assignment(rel, &var_name));
    }

    let existing = format!("existing{class_name}");
    let update_assignments = entity
        .fields
        .iter()
        .map(|f| update_assignment(f, &existing))
        .collect();

    ServiceTemplateData {
        package: packages.of(FileKind::Service),
        imports: sorted(imports),
        dto_class: format!("{class_name}DTO"),
        entity_class: class_name,
        var_name,
        not_found_key: entity.not_found_key(),
        repositories,
        lookups,
        create_assignments,
        update_assignments,
    }
    .render()
    .map(with_trailing_newline)
}

/// Render the REST controller.
pub fn render_controller(
    config: &GeneratorConfig,
    entity: &EntityConfig,
) -> askama::Result<String> {
    let packages = Packages::new(config, entity);
    let class_name = entity.class_name();
    let mut imports: BTreeSet<String> = [
        "jakarta.validation.Valid",
        "java.net.URI",
        "lombok.RequiredArgsConstructor",
        "org.springframework.data.domain.Page",
        "org.springframework.data.domain.Pageable",
        "org.springframework.http.ResponseEntity",
        "org.springframework.web.bind.annotation.DeleteMapping",
        "org.springframework.web.bind.annotation.GetMapping",
        "org.springframework.web.bind.annotation.PathVariable",
        "org.springframework.web.bind.annotation.PostMapping",
        "org.springframework.web.bind.annotation.PutMapping",
        "org.springframework.web.bind.annotation.RequestBody",
        "org.springframework.web.bind.annotation.RequestMapping",
        "org.springframework.web.bind.annotation.RestController",
        "org.springframework.web.util.UriComponentsBuilder",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    imports.insert(packages.class(FileKind::Dto, &class_name));
    imports.insert(packages.class(FileKind::Service, &class_name));

    ControllerTemplateData {
        package: packages.of(FileKind::Controller),
        imports: sorted(imports),
        dto_class: format!("{class_name}DTO"),
        service_class: format!("{class_name}Service"),
        var_name: entity.var_name(),
        endpoint: entity.endpoint(),
        entity_class: class_name,
    }
    .render()
    .map(with_trailing_newline)
}

/// Render all six module files for an entity.
///
/// Pure: nothing touches the filesystem.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn assemble(config: &GeneratorConfig, entity: &EntityConfig) -> anyhow::Result<ModuleFiles> {
    let ctx = |kind: FileKind| format!("Failed to render {kind} for entity '{}'", entity.name);
    Ok(ModuleFiles {
        entity: render_entity(config, entity).with_context(|| ctx(FileKind::Entity))?,
        dto: render_dto(config, entity).with_context(|| ctx(FileKind::Dto))?,
        mapper: render_mapper(config, entity).with_context(|| ctx(FileKind::Mapper))?,
        repository: render_repository(config, entity)
            .with_context(|| ctx(FileKind::Repository))?,
        service: render_service(config, entity).with_context(|| ctx(FileKind::Service))?,
        controller: render_controller(config, entity)
            .with_context(|| ctx(FileKind::Controller))?,
    })
}

/// Render the shared exception package.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn shared_files(config: &GeneratorConfig) -> anyhow::Result<SharedFiles> {
    let package = format!("{}.exception", config.package_base);
    Ok(SharedFiles {
        not_found_exception: NotFoundExceptionTemplate {
            package: package.clone(),
        }
        .render()
        .map(with_trailing_newline)
        .context("Failed to render NotFoundException")?,
        exception_handler: ExceptionHandlerTemplate { package }
            .render()
            .map(with_trailing_newline)
            .context("Failed to render GlobalExceptionHandler")?,
    })
}

/// Preview a single rendered file without writing anything.
///
/// # Errors
///
/// Returns an error for [`FileKind::MessageCatalog`], which has no template,
/// or if rendering fails.
pub fn render_file(
    config: &GeneratorConfig,
    entity: &EntityConfig,
    kind: FileKind,
) -> anyhow::Result<String> {
    match kind {
        FileKind::NotFoundException => Ok(shared_files(config)?.not_found_exception),
        FileKind::ExceptionHandler => Ok(shared_files(config)?.exception_handler),
        FileKind::MessageCatalog => {
            anyhow::bail!("the message catalog is merged, not rendered from a template")
        }
        module_kind => {
            let files = assemble(config, entity)?;
            files
                .get(module_kind)
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("no template for {module_kind}"))
        }
    }
}

/// Write the starter configuration
///
/// Never overwrites an existing file unless `force` is set.
///
/// # Errors
///
/// Returns an error if rendering or file writing fails
pub fn write_example_config(
    path: &Path,
    package_base: &str,
    force: bool,
) -> anyhow::Result<WriteOutcome> {
    let rendered = ExampleConfigTemplate {
        package_base: package_base.to_string(),
    }
    .render()
    .map(with_trailing_newline)?;
    if force && path.exists() {
        std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to overwrite {}", path.display()))?;
        println!("✅ Overwrote example config → {}", path.display());
        return Ok(WriteOutcome::Created);
    }
    let outcome = write_if_absent(path, &rendered)?;
    match outcome {
        WriteOutcome::Created => println!("✅ Wrote example config → {}", path.display()),
        WriteOutcome::Skipped => println!(
            "ℹ️  Config already present at {} (use --force to overwrite)",
            path.display()
        ),
    }
    Ok(outcome)
}
