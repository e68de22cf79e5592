use std::fmt;
use std::path::{Path, PathBuf};

/// Every file the generator produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileKind {
    Entity,
    Dto,
    Mapper,
    Repository,
    Service,
    Controller,
    NotFoundException,
    ExceptionHandler,
    MessageCatalog,
}

impl FileKind {
    /// The six per-entity files, in write order.
    pub const MODULE: [FileKind; 6] = [
        FileKind::Entity,
        FileKind::Dto,
        FileKind::Mapper,
        FileKind::Repository,
        FileKind::Service,
        FileKind::Controller,
    ];

    /// Sub-package of the module the file lives in (`None` for the module root).
    pub fn sub_package(self) -> Option<&'static str> {
        match self {
            FileKind::Dto => Some("dto"),
            FileKind::Mapper => Some("mappers"),
            FileKind::Repository => Some("repositories"),
            FileKind::Service => Some("services"),
            FileKind::Controller => Some("controller"),
            _ => None,
        }
    }

    /// Java source file name for an entity class.
    ///
    /// Shared files ignore `class_name`.
    pub fn file_name(self, class_name: &str) -> String {
        match self {
            FileKind::Entity => format!("{class_name}.java"),
            FileKind::Dto => format!("{class_name}DTO.java"),
            FileKind::Mapper => format!("{class_name}Mapper.java"),
            FileKind::Repository => format!("{class_name}Repository.java"),
            FileKind::Service => format!("{class_name}Service.java"),
            FileKind::Controller => format!("{class_name}Controller.java"),
            FileKind::NotFoundException => "NotFoundException.java".to_string(),
            FileKind::ExceptionHandler => "GlobalExceptionHandler.java".to_string(),
            FileKind::MessageCatalog => super::catalog::CATALOG_FILE_NAME.to_string(),
        }
    }

    /// Location of a module file below the module directory.
    pub fn module_path(self, module_dir: &Path, class_name: &str) -> PathBuf {
        let dir = match self.sub_package() {
            Some(sub) => module_dir.join(sub),
            None => module_dir.to_path_buf(),
        };
        dir.join(self.file_name(class_name))
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::Entity => "entity",
            FileKind::Dto => "dto",
            FileKind::Mapper => "mapper",
            FileKind::Repository => "repository",
            FileKind::Service => "service",
            FileKind::Controller => "controller",
            FileKind::NotFoundException => "exception",
            FileKind::ExceptionHandler => "exception handler",
            FileKind::MessageCatalog => "message catalog",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
