use crate::config::{load_config, ConfigError, GeneratorConfig};
use crate::generator::{
    render_file, write_example_config, FileKind, GenerationSession, ModuleGenerator,
};
use crate::logging::{init_logging, init_logging_with_config, LogConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Command-line interface for crudgen
///
/// Scaffolds Spring CRUD modules (entity, DTO, mapper, repository, service
/// and controller) from a JSON or YAML description of the entities.
#[derive(Parser)]
#[command(name = "crudgen", version)]
#[command(about = "Spring CRUD module scaffolding", long_about = None)]
pub struct Cli {
    /// Log at debug level (overrides CRUDGEN_LOG_LEVEL)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate modules for the configured entities
    ///
    /// Existing files are never overwritten; re-running reports them as skipped.
    Generate {
        /// Path to the configuration document (JSON, or YAML by extension)
        #[arg(short, long, default_value = "module_config.json")]
        config: PathBuf,

        /// Output root, overriding `base_path` from the configuration
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory holding messages.properties, overriding `resources_path`
        #[arg(long)]
        resources: Option<PathBuf>,

        /// Only generate these entities (comma-separated or repeated)
        #[arg(short, long = "entity", value_delimiter = ',')]
        entities: Vec<String>,
    },
    /// Write a starter configuration with two sample entities
    Init {
        /// Where to write the configuration
        #[arg(short, long, default_value = "module_config.json")]
        config: PathBuf,

        /// Java package of the generated modules
        #[arg(long, default_value = "com.example.app")]
        package_base: String,

        /// Overwrite an existing configuration
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Print one rendered file to stdout without writing anything
    Preview {
        /// Path to the configuration document
        #[arg(short, long, default_value = "module_config.json")]
        config: PathBuf,

        /// Entity to render
        #[arg(short, long)]
        entity: String,

        /// Which file to render
        #[arg(long, value_enum, default_value_t = PreviewFile::Entity)]
        file: PreviewFile,
    },
}

/// Files that can be previewed
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PreviewFile {
    /// JPA entity
    Entity,
    /// Transfer object with validation
    Dto,
    /// MapStruct mapper
    Mapper,
    /// Spring Data repository
    Repository,
    /// Service with CRUD operations
    Service,
    /// REST controller
    Controller,
    /// Shared NotFoundException
    NotFoundException,
    /// Shared GlobalExceptionHandler
    ExceptionHandler,
}

impl From<PreviewFile> for FileKind {
    fn from(file: PreviewFile) -> Self {
        match file {
            PreviewFile::Entity => FileKind::Entity,
            PreviewFile::Dto => FileKind::Dto,
            PreviewFile::Mapper => FileKind::Mapper,
            PreviewFile::Repository => FileKind::Repository,
            PreviewFile::Service => FileKind::Service,
            PreviewFile::Controller => FileKind::Controller,
            PreviewFile::NotFoundException => FileKind::NotFoundException,
            PreviewFile::ExceptionHandler => FileKind::ExceptionHandler,
        }
    }
}

/// Parse arguments, set up logging and execute the command
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the command fails.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging("debug")?;
    } else {
        init_logging_with_config(&LogConfig::from_env())?;
    }
    run(&cli)
}

/// Execute an already parsed command
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is missing, malformed or invalid
/// - An `--entity` name is not configured
/// - A generated file cannot be written
///
/// Message catalog failures are reported as warnings and do not fail the run.
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Generate {
            config,
            output,
            resources,
            entities,
        } => {
            let mut generator_config = load_existing_config(config)?;
            if let Some(resources) = resources {
                generator_config.resources_path = Some(resources.clone());
            }
            debug!(
                config = %config.display(),
                entities = generator_config.entities.len(),
                "starting generation"
            );
            let generator = ModuleGenerator::new(generator_config);
            let mut session = GenerationSession::new();
            generator.generate_all(&mut session, output.as_deref(), entities)?;
            println!("Done: {}", session.summary());
            Ok(())
        }
        Commands::Init {
            config,
            package_base,
            force,
        } => {
            write_example_config(config, package_base, *force)?;
            Ok(())
        }
        Commands::Preview {
            config,
            entity,
            file,
        } => {
            let generator_config = load_existing_config(config)?;
            let entity_config =
                generator_config
                    .entity(entity)
                    .ok_or_else(|| ConfigError::UnknownEntity {
                        name: entity.clone(),
                    })?;
            let rendered = render_file(&generator_config, entity_config, (*file).into())?;
            print!("{rendered}");
            Ok(())
        }
    }
}

fn load_existing_config(path: &Path) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!(
            "configuration file {} not found (run `crudgen init` to create one)",
            path.display()
        )
        .into());
    }
    Ok(load_config(path)?)
}
