//! Per-field code fragments.
//!
//! Each function turns one [`FieldConfig`] into the lines it contributes to a
//! generated file. Fragments carry their own indentation so templates can
//! splice them in verbatim.

use crate::config::{not_found_key, FieldConfig, RelationField, ScalarField};
use crate::naming::{capitalize, decapitalize, lower};

const INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";
const CHAIN_INDENT: &str = "                ";

/// Storage column for a field: `{id_prefix}_{column}`.
pub fn column_name(id_prefix: &str, column: &str) -> String {
    format!("{id_prefix}_{column}")
}

/// JPA mapping of a field, annotations included.
pub fn entity_field(field: &FieldConfig, id_prefix: &str) -> String {
    match field {
        FieldConfig::Scalar(f) => format!(
            "{INDENT}@Column(name = \"{}\")\n{INDENT}private {} {};",
            column_name(id_prefix, &f.column),
            f.value_type,
            f.name
        ),
        FieldConfig::Relation(f) => format!(
            "{INDENT}@ManyToOne\n{INDENT}@JoinColumn(name = \"{}\", referencedColumnName = \"{}\")\n{INDENT}private {} {};",
            column_name(id_prefix, &f.column),
            f.referenced_column(),
            f.relation_class,
            f.name
        ),
    }
}

/// Name of the DTO property backing a field (`{name}Id` for relations).
pub fn dto_property(field: &FieldConfig) -> String {
    match field {
        FieldConfig::Scalar(f) => f.name.clone(),
        FieldConfig::Relation(f) => format!("{}Id", f.name),
    }
}

/// Bean-validation annotations for a DTO property, without indentation.
pub fn validation_annotations(field: &FieldConfig) -> Vec<String> {
    let mut annotations = Vec::new();
    match field {
        FieldConfig::Relation(f) => {
            if f.required {
                annotations.push(format!(
                    "@NotNull(message = \"El {} no puede ser nulo\")",
                    f.name
                ));
            }
        }
        FieldConfig::Scalar(f) => {
            if f.required {
                annotations.push(format!(
                    "@NotBlank(message = \"El {} no puede estar en blanco\")",
                    f.name
                ));
            }
            if let Some(max) = f.max_length {
                annotations.push(format!(
                    "@Size(max = {max}, message = \"El {} no puede tener más de {max} caracteres\")",
                    f.name
                ));
            }
        }
    }
    annotations
}

/// Validation imports a field needs in the DTO.
pub fn validation_imports(field: &FieldConfig) -> Vec<&'static str> {
    let mut imports = Vec::new();
    match field {
        FieldConfig::Relation(f) if f.required => {
            imports.push("jakarta.validation.constraints.NotNull");
        }
        FieldConfig::Scalar(ScalarField {
            required,
            max_length,
            ..
        }) => {
            if *required {
                imports.push("jakarta.validation.constraints.NotBlank");
            }
            if max_length.is_some() {
                imports.push("jakarta.validation.constraints.Size");
            }
        }
        FieldConfig::Relation(_) => {}
    }
    imports
}

/// DTO property with its validation annotations.
pub fn dto_field(field: &FieldConfig) -> String {
    let ty = match field {
        FieldConfig::Scalar(f) => f.value_type.as_str(),
        FieldConfig::Relation(_) => "Long",
    };
    let mut lines: Vec<String> = validation_annotations(field)
        .into_iter()
        .map(|a| format!("{INDENT}{a}"))
        .collect();
    lines.push(format!("{INDENT}private {ty} {};", dto_property(field)));
    lines.join("\n")
}

/// MapStruct `@Mapping` pairs for a relation: `(toDto, toEntity)`.
pub fn relation_mappings(field: &RelationField) -> (String, String) {
    (
        format!(
            "@Mapping(source = \"{name}.id\", target = \"{name}Id\")",
            name = field.name
        ),
        format!(
            "@Mapping(source = \"{name}Id\", target = \"{name}.id\")",
            name = field.name
        ),
    )
}

/// Variable name of the repository serving a related class.
pub fn repository_var(class_name: &str) -> String {
    format!("{}Repository", decapitalize(class_name))
}

/// Import of a related entity class.
pub fn relation_import(package_base: &str, field: &RelationField) -> String {
    field.relation_package.clone().unwrap_or_else(|| {
        format!(
            "{package_base}.{}.{}",
            lower(&field.relation_class),
            field.relation_class
        )
    })
}

/// Import of the repository serving a related class.
pub fn relation_repository_import(package_base: &str, field: &RelationField) -> String {
    format!(
        "{package_base}.{}.repositories.{}Repository",
        lower(&field.relation_class),
        field.relation_class
    )
}

/// Service statement resolving a relation from the DTO identifier.
///
/// Throws `NotFoundException` keyed by the related entity when the row is
/// missing.
pub fn relation_lookup(field: &RelationField) -> String {
    let getter = format!("dto.get{}Id()", capitalize(&field.name));
    format!(
        "{BODY_INDENT}{class} {name} = {repo}.findById({getter})\n{CHAIN_INDENT}.orElseThrow(() -> new NotFoundException(\"{key}\", {getter}));",
        class = field.relation_class,
        name = field.name,
        repo = repository_var(&field.relation_class),
        key = not_found_key(&field.relation_class),
    )
}

/// Assignment copying a field onto an existing entity during update.
///
/// Relations assign the instance resolved by [`relation_lookup`].
pub fn update_assignment(field: &FieldConfig, target: &str) -> String {
    let setter = format!("set{}", capitalize(field.name()));
    match field {
        FieldConfig::Scalar(f) => format!(
            "{BODY_INDENT}{target}.{setter}(dto.get{}());",
            capitalize(&f.name)
        ),
        FieldConfig::Relation(f) => format!("{BODY_INDENT}{target}.{setter}({});", f.name),
    }
}

/// Assignment attaching a resolved relation to a freshly mapped entity.
pub fn create_assignment(field: &RelationField, target: &str) -> String {
    format!(
        "{BODY_INDENT}{target}.set{}({});",
        capitalize(&field.name),
        field.name
    )
}
