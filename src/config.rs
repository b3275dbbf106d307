//! Build configuration.
//!
//! The pipeline takes an explicit `BuildConfig` value rather than reading
//! process-wide constants, so several configurations can run in the same
//! process without interference. Defaults match the conventional layout
//! (`icons/` sources, `dist/` output, both formats, all six variants);
//! an optional `icongen.toml` at the project root overrides defaults, and
//! CLI flags override the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::component::types::ModuleFormat;
use crate::error::Error;
use crate::variant::Variant;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "icongen.toml";

/// How the working set of icon base names is discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Enumerate one variant's directory; its listing drives the whole run.
    Reference(String),
    /// Enumerate the union of every requested variant's directory.
    Union,
}

/// Fully resolved configuration for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root of the per-variant icon source tree.
    pub icons_dir: PathBuf,
    /// Output root. With both formats requested, CJS lands here and ESM
    /// under an `esm/` sub-root; with a single format, that format lands
    /// here directly.
    pub out_dir: PathBuf,
    /// Module formats to emit, in emission order.
    pub formats: Vec<ModuleFormat>,
    /// Variant tags to process, validated against the vocabulary before
    /// any file I/O.
    pub variants: Vec<String>,
    /// Base-name discovery mode.
    pub scan: ScanMode,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            icons_dir: PathBuf::from("icons"),
            out_dir: PathBuf::from("dist"),
            formats: vec![ModuleFormat::Cjs, ModuleFormat::Esm],
            variants: Variant::ALL.iter().map(|v| v.tag().to_string()).collect(),
            scan: ScanMode::Reference("Bold".to_string()),
        }
    }
}

/// Raw `icongen.toml` contents. Every field is optional; unset fields keep
/// their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Icon source root, relative to the project path.
    pub icons_dir: Option<PathBuf>,
    /// Output root, relative to the project path.
    pub out_dir: Option<PathBuf>,
    /// Module formats to emit: `"esm"` and/or `"cjs"`.
    pub formats: Option<Vec<String>>,
    /// Variant tags to process.
    pub variants: Option<Vec<String>>,
    /// Variant whose directory drives icon enumeration.
    pub reference_variant: Option<String>,
    /// Enumerate every variant directory instead of the reference one.
    pub scan_all: Option<bool>,
}

impl ConfigFile {
    /// Read `icongen.toml` from the project root, if present.
    pub fn load(project_root: &Path) -> Result<Option<Self>, Error> {
        let path = project_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path).map_err(|source| Error::Scan {
            path: path.clone(),
            source,
        })?;
        let file = toml::from_str(&content).map_err(|err| Error::Config {
            message: format!("{}: {err}", path.display()),
        })?;
        Ok(Some(file))
    }
}

/// Parse configured format names into `ModuleFormat`s, preserving order.
pub fn parse_formats(names: &[String]) -> Result<Vec<ModuleFormat>, Error> {
    if names.is_empty() {
        return Err(Error::Config {
            message: "at least one module format is required".to_string(),
        });
    }
    names.iter().map(|name| ModuleFormat::from_name(name)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.icons_dir, PathBuf::from("icons"));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.formats, vec![ModuleFormat::Cjs, ModuleFormat::Esm]);
        assert_eq!(config.variants.len(), 6);
        assert_eq!(config.scan, ScanMode::Reference("Bold".to_string()));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(ConfigFile::load(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
icons_dir = "assets/icons"
formats = ["esm"]
variants = ["Bold", "Linear"]
scan_all = true
"#,
        )
        .unwrap();

        let file = ConfigFile::load(tmp.path()).unwrap().unwrap();
        assert_eq!(file.icons_dir, Some(PathBuf::from("assets/icons")));
        assert_eq!(file.formats.as_deref(), Some(&["esm".to_string()][..]));
        assert_eq!(file.scan_all, Some(true));
        assert!(file.out_dir.is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "icon_dir = \"typo\"\n").unwrap();
        let err = ConfigFile::load(tmp.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_parse_formats() {
        let formats = parse_formats(&["esm".to_string(), "cjs".to_string()]).unwrap();
        assert_eq!(formats, vec![ModuleFormat::Esm, ModuleFormat::Cjs]);
        assert!(parse_formats(&["umd".to_string()]).is_err());
        assert!(parse_formats(&[]).is_err());
    }
}
