//! Catalog document loading

use anyhow::{Context, Result};
use catalog_api::Catalog;
use clap::ValueEnum;
use std::path::Path;
use tracing::debug;

/// Catalog document format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pick from the file extension: .yaml/.yml is YAML, anything else JSON
    #[default]
    Auto,
    Json,
    Yaml,
}

impl Format {
    /// Resolve `Auto` against a path
    pub fn for_path(self, path: &Path) -> Format {
        match self {
            Format::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some("yaml") | Some("yml") => Format::Yaml,
                _ => Format::Json,
            },
            explicit => explicit,
        }
    }
}

/// Read and decode a catalog document
pub fn load_catalog(path: &Path, format: Format) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;

    let format = format.for_path(path);
    let catalog = match format {
        Format::Yaml => Catalog::from_yaml_str(&contents),
        _ => Catalog::from_json_str(&contents),
    }
    .with_context(|| format!("failed to decode catalog {}", path.display()))?;

    debug!(
        "Loaded {} services ({:?}) from {}",
        catalog.len(),
        format,
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_for_path() {
        assert_eq!(Format::Auto.for_path(Path::new("catalog.yaml")), Format::Yaml);
        assert_eq!(Format::Auto.for_path(Path::new("catalog.yml")), Format::Yaml);
        assert_eq!(Format::Auto.for_path(Path::new("catalog.json")), Format::Json);
        assert_eq!(Format::Auto.for_path(Path::new("catalog")), Format::Json);
        assert_eq!(Format::Yaml.for_path(Path::new("catalog.json")), Format::Yaml);
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "- type: compute\n  name: nova\n  endpoints:\n    - region: RegionOne\n      interface: public\n      url: https://nova.example/v2"
        )
        .unwrap();

        let catalog = load_catalog(file.path(), Format::Auto).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.services()[0].endpoints[0].url, "https://nova.example/v2");
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"catalog": [{{"type": "identity", "endpoints": [{{"interface": "admin", "url": "https://keystone/v3"}}]}}]}}"#
        )
        .unwrap();

        let catalog = load_catalog(file.path(), Format::Json).unwrap();
        assert_eq!(catalog.service_types(), vec!["identity"]);
    }

    #[test]
    fn test_load_errors() {
        assert!(load_catalog(Path::new("/nonexistent/catalog.json"), Format::Auto).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a catalog").unwrap();
        let err = load_catalog(file.path(), Format::Json).unwrap_err();
        assert!(err.to_string().starts_with("failed to decode catalog"));
    }
}
