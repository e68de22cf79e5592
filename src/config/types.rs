use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

use super::error::ConfigError;
use crate::naming::{capitalize, decapitalize, id_prefix, kebab_case, lower, snake_case};

/// Default output root for generated Java sources
pub const DEFAULT_BASE_PATH: &str = "src/main/java";
/// Database schema used when neither the entity nor the document names one
pub const DEFAULT_SCHEMA: &str = "public";
/// Column a relation joins on when `referenced_column` is not given
pub const DEFAULT_REFERENCED_COLUMN: &str = "id";
/// Message stored in the catalog for `{entity}.not-found` keys
///
/// `{entity}` is replaced with the lower-cased entity name; `{0}` is left for
/// the runtime message formatter.
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "El {entity} con id {0} no existe.";

fn default_base_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_PATH)
}

/// Top-level configuration document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorConfig {
    /// Root directory the module tree is written under
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,
    /// Java package every module lives under (e.g. `com.kanstad.task`)
    pub package_base: String,
    /// Directory of `package_base` relative to `base_path`
    ///
    /// Derived from `package_base` when absent.
    #[serde(default)]
    pub modules_base_path: Option<String>,
    /// Explicit directory holding `messages.properties`
    #[serde(default)]
    pub resources_path: Option<PathBuf>,
    /// Schema for entities that do not declare one
    #[serde(default)]
    pub default_schema: Option<String>,
    /// Catalog message template, see [`DEFAULT_NOT_FOUND_MESSAGE`]
    #[serde(default)]
    pub not_found_message: Option<String>,
    /// Entities to scaffold, in generation order
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

impl GeneratorConfig {
    /// Module root relative to the output base, without leading or trailing `/`.
    pub fn modules_base_path(&self) -> String {
        match &self.modules_base_path {
            Some(path) => path.trim_matches('/').to_string(),
            None => self.package_base.replace('.', "/"),
        }
    }

    /// Effective schema for an entity.
    pub fn schema_for(&self, entity: &EntityConfig) -> String {
        entity
            .schema
            .as_deref()
            .or(self.default_schema.as_deref())
            .unwrap_or(DEFAULT_SCHEMA)
            .to_string()
    }

    /// Catalog message for an entity's `not-found` key.
    pub fn not_found_message(&self, entity_name: &str) -> String {
        self.not_found_message
            .as_deref()
            .unwrap_or(DEFAULT_NOT_FOUND_MESSAGE)
            .replace("{entity}", &lower(entity_name))
    }

    /// Look up an entity by exact name.
    pub fn entity(&self, name: &str) -> Option<&EntityConfig> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Check the values the deserializer cannot.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in document order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package_base.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                location: "document root".to_string(),
                key: "package_base",
            });
        }

        let mut seen = HashSet::new();
        for (i, entity) in self.entities.iter().enumerate() {
            let location = format!("entities[{i}]");
            if entity.name.is_empty() {
                return Err(ConfigError::EmptyValue {
                    location,
                    key: "name",
                });
            }
            if !is_java_identifier(&entity.name) {
                return Err(ConfigError::InvalidEntityName {
                    name: entity.name.clone(),
                });
            }
            // Entities share a package segment when their lower-cased names match.
            if !seen.insert(lower(&entity.name)) {
                return Err(ConfigError::DuplicateEntity {
                    name: entity.name.clone(),
                });
            }
            for (j, field) in entity.fields.iter().enumerate() {
                field.validate(&format!("{location}.fields[{j}]"))?;
            }
        }
        Ok(())
    }
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One business entity to scaffold a module for
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityConfig {
    /// Entity name as written by the user (`SubSistema`, `producto`)
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldConfig>,
    /// Database schema
    #[serde(default)]
    pub schema: Option<String>,
    /// Table name, `snake_case(name)` when absent
    #[serde(default)]
    pub table_name: Option<String>,
    /// Column prefix, first three letters of the name when absent or empty
    #[serde(default)]
    pub id_prefix: Option<String>,
    /// REST path segment under `/api/`, `kebab-case(name)` when absent
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl EntityConfig {
    /// Java class name of the entity.
    pub fn class_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Java variable name used for the entity in services and controllers.
    pub fn var_name(&self) -> String {
        decapitalize(&self.name)
    }

    /// Package segment and directory name of the module.
    pub fn package_segment(&self) -> String {
        lower(&self.name)
    }

    pub fn table_name(&self) -> String {
        self.table_name
            .clone()
            .unwrap_or_else(|| snake_case(&self.name))
    }

    pub fn id_prefix(&self) -> String {
        match self.id_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => prefix.to_string(),
            _ => id_prefix(&self.name),
        }
    }

    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| kebab_case(&self.name))
    }

    /// Key of this entity's entry in the message catalog.
    pub fn not_found_key(&self) -> String {
        not_found_key(&self.name)
    }

    /// Relation fields, in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = &RelationField> {
        self.fields.iter().filter_map(|f| match f {
            FieldConfig::Relation(rel) => Some(rel),
            FieldConfig::Scalar(_) => None,
        })
    }
}

/// Catalog key for an entity name: `{lowercase}.not-found`.
pub fn not_found_key(entity_name: &str) -> String {
    format!("{}.not-found", lower(entity_name))
}

/// A field holding a plain value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarField {
    pub name: String,
    /// Java type written verbatim (`String`, `Double`, `LocalDate`)
    pub value_type: String,
    pub column: String,
    pub required: bool,
    pub max_length: Option<u32>,
}

/// A many-to-one association to another generated entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationField {
    pub name: String,
    /// Class name of the related entity
    pub relation_class: String,
    pub column: String,
    pub referenced_column: Option<String>,
    /// Fully qualified import of the related class, when it does not live at
    /// `{package_base}.{relation_lower}.{RelationClass}`
    pub relation_package: Option<String>,
    pub required: bool,
}

impl RelationField {
    pub fn referenced_column(&self) -> &str {
        self.referenced_column
            .as_deref()
            .unwrap_or(DEFAULT_REFERENCED_COLUMN)
    }
}

/// A field declaration: either a scalar value or a relation
///
/// In the document a relation is marked with `"type": "relation"`; fields
/// without a `type` are scalars.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawField")]
pub enum FieldConfig {
    Scalar(ScalarField),
    Relation(RelationField),
}

impl FieldConfig {
    pub fn name(&self) -> &str {
        match self {
            FieldConfig::Scalar(f) => &f.name,
            FieldConfig::Relation(f) => &f.name,
        }
    }

    pub fn column(&self) -> &str {
        match self {
            FieldConfig::Scalar(f) => &f.column,
            FieldConfig::Relation(f) => &f.column,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            FieldConfig::Scalar(f) => f.required,
            FieldConfig::Relation(f) => f.required,
        }
    }

    fn validate(&self, location: &str) -> Result<(), ConfigError> {
        let empty = |key: &'static str| ConfigError::EmptyValue {
            location: location.to_string(),
            key,
        };
        if self.name().is_empty() {
            return Err(empty("name"));
        }
        if self.column().is_empty() {
            return Err(empty("column"));
        }
        match self {
            FieldConfig::Scalar(f) if f.value_type.is_empty() => Err(empty("value_type")),
            FieldConfig::Relation(f) if f.relation_class.is_empty() => {
                Err(empty("relation_class"))
            }
            _ => Ok(()),
        }
    }
}

/// Wire shape of a field before it is split into [`FieldConfig`] variants
#[derive(Deserialize)]
struct RawField {
    name: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default, alias = "java_type", alias = "valueType")]
    value_type: Option<String>,
    column: String,
    #[serde(default)]
    required: bool,
    #[serde(default, alias = "maxLength")]
    max_length: Option<u32>,
    #[serde(default, alias = "relationClass")]
    relation_class: Option<String>,
    #[serde(default, alias = "referencedColumn")]
    referenced_column: Option<String>,
    #[serde(default, alias = "relationPackage")]
    relation_package: Option<String>,
}

impl TryFrom<RawField> for FieldConfig {
    type Error = String;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        match raw.kind.as_deref() {
            None => {
                let value_type = raw.value_type.ok_or_else(|| {
                    format!("scalar field `{}` is missing `value_type`", raw.name)
                })?;
                Ok(FieldConfig::Scalar(ScalarField {
                    name: raw.name,
                    value_type,
                    column: raw.column,
                    required: raw.required,
                    max_length: raw.max_length,
                }))
            }
            Some("relation") => {
                let relation_class = raw.relation_class.ok_or_else(|| {
                    format!("relation field `{}` is missing `relation_class`", raw.name)
                })?;
                Ok(FieldConfig::Relation(RelationField {
                    name: raw.name,
                    relation_class,
                    column: raw.column,
                    referenced_column: raw.referenced_column,
                    relation_package: raw.relation_package,
                    required: raw.required,
                }))
            }
            Some(other) => Err(format!(
                "field `{}` has unknown type `{other}` (only `relation` is recognised)",
                raw.name
            )),
        }
    }
}
