#![allow(dead_code, clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crudgen::config::{parse_config, ConfigFormat, GeneratorConfig};

/// Two related entities with the common field shapes
pub const SAMPLE_CONFIG: &str = r#"{
    "package_base": "com.kanstad.task",
    "default_schema": "configuracion",
    "entities": [
        {
            "name": "Categoria",
            "id_prefix": "cat",
            "fields": [
                { "name": "nombre", "value_type": "String", "column": "nombre",
                  "required": true, "max_length": 80 }
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
        }
    ]
}"#;

pub fn sample_config() -> GeneratorConfig {
    parse_config(SAMPLE_CONFIG, ConfigFormat::Json, "sample").unwrap()
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Every regular file under `root`, keyed by relative path, with its content
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, String> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let content = std::fs::read_to_string(entry.path()).unwrap();
            (rel, content)
        })
        .collect()
}
