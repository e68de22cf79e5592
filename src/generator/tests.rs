#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::config::{parse_config, ConfigFormat, GeneratorConfig};
use std::fs;

fn config(json: &str) -> GeneratorConfig {
    parse_config(json, ConfigFormat::Json, "test").unwrap()
}

fn sample() -> GeneratorConfig {
    config(
        r#"{
        "package_base": "com.kanstad.task",
        "entities": [
            {
                "name": "SubSistema",
                "fields": [
                    { "name": "nombre", "value_type": "String", "column": "nombre",
                      "required": true, "max_length": 50 },
                    { "name": "sistema", "type": "relation", "relation_class": "Sistema",
                      "column": "sistema_id", "required": true }
                ]
            },
            {
                "name": "Producto",
                "id_prefix": "pro",
                "fields": [
                    { "name": "codigo", "value_type": "String", "column": "codigo",
                      "required": true, "max_length": 20 },
                    { "name": "precio", "value_type": "Double", "column": "precio" },
                    { "name": "categoria", "type": "relation", "relation_class": "Categoria",
                      "column": "categoria_id", "required": true }
                ]
            },
            {
                "name": "Empleado",
                "fields": [
                    { "name": "jefe", "type": "relation", "relation_class": "Empleado",
                      "column": "jefe_id" },
                    { "name": "mentor", "type": "relation", "relation_class": "Empleado",
                      "column": "mentor_id" },
                    { "name": "area", "type": "relation", "relation_class": "Area",
                      "column": "area_id" },
                    { "name": "areaSecundaria", "type": "relation", "relation_class": "Area",
                      "column": "area_secundaria_id" }
                ]
            }
        ]
    }"#,
    )
}

fn imports(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter(|l| l.starts_with("import "))
        .collect()
}

#[test]
fn test_dto_validation_annotations() {
    let config = sample();
    let files = assemble(&config, config.entity("SubSistema").unwrap()).unwrap();

    assert_eq!(files.dto.matches("@NotBlank").count(), 1);
    assert_eq!(files.dto.matches("@NotNull").count(), 1);
    assert!(files.dto.contains(
        "@Size(max = 50, message = \"El nombre no puede tener más de 50 caracteres\")"
    ));
    assert!(files.dto.contains("    private Long sistemaId;"));
    assert!(files.dto.contains("public class SubSistemaDTO {"));
    assert!(files
        .dto
        .contains("import jakarta.validation.constraints.NotNull;"));
}

#[test]
fn test_entity_columns_use_prefix() {
    let config = sample();
    let files = assemble(&config, config.entity("Producto").unwrap()).unwrap();

    assert!(files.entity.starts_with("package com.kanstad.task.producto;\n"));
    assert!(files
        .entity
        .contains("@Table(name = \"producto\", schema = \"public\")"));
    assert!(files.entity.contains("@Column(name = \"pro_id\")"));
    assert!(files.entity.contains("@Column(name = \"pro_codigo\")"));
    assert!(files.entity.contains(
        "@JoinColumn(name = \"pro_categoria_id\", referencedColumnName = \"id\")"
    ));
    assert!(files
        .entity
        .contains("sequenceName = \"public.producto_pro_id_seq\""));
    assert!(files
        .entity
        .contains("import com.kanstad.task.categoria.Categoria;"));
}

#[test]
fn test_entity_derived_names() {
    let config = sample();
    let files = assemble(&config, config.entity("SubSistema").unwrap()).unwrap();
    assert!(files.entity.contains("@Table(name = \"sub_sistema\""));
    assert!(files.entity.contains("@Column(name = \"sub_nombre\")"));
    assert!(files
        .controller
        .contains("@RequestMapping(\"/api/sub-sistema\")"));
}

#[test]
fn test_entity_without_fields() {
    let config = config(
        r#"{ "package_base": "com.acme", "entities": [ { "name": "Marca", "fields": [] } ] }"#,
    );
    let files = assemble(&config, config.entity("Marca").unwrap()).unwrap();

    assert_eq!(files.iter().count(), 6);
    assert!(files.entity.contains("private Long id;\n}"));
    assert!(files.dto.contains("private Long id;\n}"));
    assert!(!files.dto.contains("jakarta.validation"));
    assert!(!files.mapper.contains("@Mapping"));
    assert!(!files.mapper.contains("import org.mapstruct.Mapping;"));
    assert!(!files.entity.contains("ManyToOne"));
}

#[test]
fn test_imports_sorted_and_unique() {
    let config = sample();
    for entity in &config.entities {
        let files = assemble(&config, entity).unwrap();
        for (kind, content) in files.iter() {
            let found = imports(content);
            let mut expected = found.clone();
            expected.sort_unstable();
            expected.dedup();
            assert_eq!(found, expected, "{kind} of {}", entity.name);
        }
    }
}

#[test]
fn test_files_end_with_newline() {
    let config = sample();
    let files = assemble(&config, config.entity("Producto").unwrap()).unwrap();
    for (kind, content) in files.iter() {
        assert!(content.ends_with("}\n"), "{kind}");
    }
    let shared = shared_files(&config).unwrap();
    assert!(shared.not_found_exception.ends_with('\n'));
    assert!(shared.exception_handler.ends_with('\n'));
}

#[test]
fn test_mapper_relation_mappings() {
    let config = sample();
    let files = assemble(&config, config.entity("Producto").unwrap()).unwrap();
    assert!(files
        .mapper
        .contains("@Mapping(source = \"categoria.id\", target = \"categoriaId\")"));
    assert!(files
        .mapper
        .contains("@Mapping(source = \"categoriaId\", target = \"categoria.id\")"));
    assert!(files
        .mapper
        .contains("ProductoDTO toDto(Producto producto);"));
    assert!(files.mapper.contains("import org.mapstruct.Mapping;"));
}

#[test]
fn test_service_lookups_and_keys() {
    let config = sample();
    let files = assemble(&config, config.entity("SubSistema").unwrap()).unwrap();

    assert!(files
        .service
        .contains("private final SistemaRepository sistemaRepository;"));
    assert!(files
        .service
        .contains("new NotFoundException(\"sistema.not-found\", dto.getSistemaId())"));
    assert!(files
        .service
        .contains("new NotFoundException(\"subsistema.not-found\", id)"));
    assert!(files
        .service
        .contains("existingSubSistema.setSistema(sistema);"));
    assert!(files.service.contains("subSistema.setSistema(sistema);"));
    assert!(files
        .service
        .contains("import com.kanstad.task.exception.NotFoundException;"));
}

#[test]
fn test_service_dedupes_repositories() {
    let config = sample();
    let files = assemble(&config, config.entity("Empleado").unwrap()).unwrap();

    assert_eq!(
        files
            .service
            .matches("private final AreaRepository areaRepository;")
            .count(),
        1
    );
    assert_eq!(
        files
            .service
            .matches("private final EmpleadoRepository empleadoRepository;")
            .count(),
        1
    );
    assert!(files.service.contains("empleadoRepository.findById(dto.getJefeId())"));
}

#[test]
fn test_controller_wiring() {
    let config = sample();
    let files = assemble(&config, config.entity("Producto").unwrap()).unwrap();
    assert!(files
        .controller
        .starts_with("package com.kanstad.task.producto.controller;\n"));
    assert!(files.controller.contains("@RequestMapping(\"/api/producto\")"));
    assert!(files
        .controller
        .contains("private final ProductoService productoService;"));
    assert!(files
        .controller
        .contains("import com.kanstad.task.producto.services.ProductoService;"));
}

#[test]
fn test_render_file_matches_assemble() {
    let config = sample();
    let entity = config.entity("Producto").unwrap();
    let files = assemble(&config, entity).unwrap();
    assert_eq!(
        render_file(&config, entity, FileKind::Service).unwrap(),
        files.service
    );
    assert!(render_file(&config, entity, FileKind::NotFoundException)
        .unwrap()
        .contains("package com.kanstad.task.exception;"));
    assert!(render_file(&config, entity, FileKind::MessageCatalog).is_err());
}

#[test]
fn test_module_paths() {
    let config = sample();
    let generator = ModuleGenerator::new(config.clone());
    let base = std::path::Path::new("out");
    let paths = generator.module_paths(base, config.entity("SubSistema").unwrap());
    let rendered: Vec<String> = paths
        .iter()
        .map(|(_, p)| p.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "out/com/kanstad/task/subsistema/SubSistema.java",
            "out/com/kanstad/task/subsistema/dto/SubSistemaDTO.java",
            "out/com/kanstad/task/subsistema/mappers/SubSistemaMapper.java",
            "out/com/kanstad/task/subsistema/repositories/SubSistemaRepository.java",
            "out/com/kanstad/task/subsistema/services/SubSistemaService.java",
            "out/com/kanstad/task/subsistema/controller/SubSistemaController.java",
        ]
    );
}

#[test]
fn test_generate_module_writes_tree() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample();
    let generator = ModuleGenerator::new(config.clone());
    let mut session = GenerationSession::new();
    generator
        .generate_module(&mut session, config.entity("Producto").unwrap(), dir.path())
        .unwrap();

    // two shared files, one catalog, six module files
    assert_eq!(session.reports().len(), 9);
    assert_eq!(session.count(Outcome::Created), 9);
    let catalog = fs::read_to_string(dir.path().join("resources/messages.properties")).unwrap();
    assert_eq!(catalog, "producto.not-found=El producto con id {0} no existe.\n");
    assert!(dir
        .path()
        .join("com/kanstad/task/exception/GlobalExceptionHandler.java")
        .is_file());
}

#[test]
fn test_unknown_entity_filter() {
    let generator = ModuleGenerator::new(sample());
    let err = generator
        .select_entities(&["Proveedor".to_string()])
        .unwrap_err();
    assert!(matches!(
        err,
        crate::config::ConfigError::UnknownEntity { ref name } if name == "Proveedor"
    ));
    let selected = generator
        .select_entities(&["Empleado".to_string(), "SubSistema".to_string()])
        .unwrap();
    let names: Vec<&str> = selected.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["SubSistema", "Empleado"]);
}

#[test]
fn test_example_config_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("module_config.json");
    assert_eq!(
        write_example_config(&path, "com.acme.app", false).unwrap(),
        WriteOutcome::Created
    );
    assert_eq!(
        write_example_config(&path, "com.other", false).unwrap(),
        WriteOutcome::Skipped
    );
    let parsed = config(&fs::read_to_string(&path).unwrap());
    assert_eq!(parsed.package_base, "com.acme.app");
    assert!(!parsed.entities.is_empty());

    write_example_config(&path, "com.other", true).unwrap();
    let parsed = config(&fs::read_to_string(&path).unwrap());
    assert_eq!(parsed.package_base, "com.other");
}
