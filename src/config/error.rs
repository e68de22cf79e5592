use std::fmt;
use std::io;
use std::path::PathBuf;

/// Configuration error
///
/// Returned when the configuration document cannot be read, does not parse,
/// or is missing a value the generator needs. Every variant aborts the run.
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The document is not valid JSON/YAML or does not match the schema
    ///
    /// Missing required keys (`package_base`, an entity's `name`, a field's
    /// `column`, ...) are reported through this variant by the deserializer.
    Parse {
        /// Where the document came from (a path or `<inline>`)
        origin: String,
        /// Deserializer message
        message: String,
    },
    /// A required value is present but empty
    EmptyValue {
        /// Human-readable location, e.g. `entities[1].fields[0]`
        location: String,
        /// Key that is empty
        key: &'static str,
    },
    /// Entity name is not usable as a Java class name
    InvalidEntityName {
        /// The offending name
        name: String,
    },
    /// Two entities would generate into the same package
    DuplicateEntity {
        /// The entity name (as written the second time)
        name: String,
    },
    /// An entity was requested by name but is not configured
    UnknownEntity {
        /// The requested name
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(
                    f,
                    "configuration error: cannot read {}: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Parse { origin, message } => {
                write!(f, "configuration error: invalid document {origin}: {message}")
            }
            ConfigError::EmptyValue { location, key } => {
                write!(f, "configuration error: `{key}` must not be empty at {location}")
            }
            ConfigError::InvalidEntityName { name } => {
                write!(
                    f,
                    "configuration error: entity name '{name}' must start with an ASCII letter \
                    and contain only letters, digits or underscores"
                )
            }
            ConfigError::DuplicateEntity { name } => {
                write!(
                    f,
                    "configuration error: entity '{name}' is declared more than once \
                    (names are compared case-insensitively)"
                )
            }
            ConfigError::UnknownEntity { name } => {
                write!(f, "configuration error: no entity named '{name}' in configuration")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
