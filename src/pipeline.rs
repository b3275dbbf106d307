//! The full generation run.
//!
//! Single-threaded and run-to-completion: pairs are processed in a fixed
//! nested order (sorted unique base names outer, requested variants inner)
//! and each pair finishes before the next begins. A missing asset is a
//! silent skip; a parse or render failure loses only its pair; a write
//! failure aborts the run. Reruns overwrite existing files and never clear
//! the output directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::component::emit::{emit_component, emit_type_declaration};
use crate::component::svg::parse_svg;
use crate::component::transform::transform_document;
use crate::component::types::{ComponentModule, ModuleFormat};
use crate::config::{BuildConfig, ScanMode};
use crate::error::Error;
use crate::manifest::Manifest;
use crate::name::component_name;
use crate::scanner;
use crate::variant::Variant;

/// Counters describing one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Components emitted (one per successful pair, across all formats).
    pub emitted: usize,
    /// Pairs skipped because the variant's asset does not exist.
    pub skipped: usize,
    /// Pairs lost to parse or render failures.
    pub failed: usize,
}

/// Run one full build.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary, Error> {
    // Resolve every configured tag first: a bad variant configuration must
    // abort before any file I/O happens.
    let variants = config
        .variants
        .iter()
        .map(|tag| Variant::from_tag(tag))
        .collect::<Result<Vec<_>, _>>()?;

    let base_names = match &config.scan {
        ScanMode::Reference(tag) => {
            let reference = Variant::from_tag(tag)?;
            scanner::scan_reference(&config.icons_dir, reference)?
        }
        ScanMode::Union => scanner::scan_union(&config.icons_dir, &variants)?,
    };
    debug!(icons = base_names.len(), "discovered icon base names");

    let format_roots = format_roots(config);
    for (_, root) in &format_roots {
        ensure_dir(root)?;
    }

    let mut manifest = Manifest::default();
    let mut summary = BuildSummary::default();

    for base_name in &base_names {
        for variant in &variants {
            // Identifier derivation re-validates the tag before the
            // existence check, keeping name generation total over the
            // vocabulary.
            let name = component_name(base_name, variant.tag())?;

            let asset = asset_path(&config.icons_dir, base_name, *variant);
            if !asset.exists() {
                debug!(icon = %base_name, variant = variant.tag(), "asset missing, skipping");
                summary.skipped += 1;
                continue;
            }

            match generate_pair(&name, *variant, &asset, &format_roots) {
                Ok(()) => {
                    manifest.register(name.clone(), format!("{name}.js"));
                    summary.emitted += 1;
                }
                Err(PairError::Fatal(err)) => return Err(err),
                Err(PairError::Pair(error)) => {
                    warn!(
                        icon = %base_name,
                        variant = variant.tag(),
                        %error,
                        "pair failed, continuing"
                    );
                    summary.failed += 1;
                }
            }
        }
    }

    for (format, root) in &format_roots {
        debug!(format = format.name(), root = %root.display(), "writing index files");
        write_file(&root.join("index.js"), &manifest.index_source(*format))?;
        write_file(&root.join("index.d.ts"), &manifest.type_declarations())?;
    }
    debug!(
        emitted = summary.emitted,
        skipped = summary.skipped,
        failed = summary.failed,
        "build finished"
    );

    Ok(summary)
}

/// Path of one variant's asset for a base name.
pub fn asset_path(icons_dir: &Path, base_name: &str, variant: Variant) -> PathBuf {
    icons_dir
        .join(variant.dir_name())
        .join(format!("{base_name}.svg"))
}

enum PairError {
    /// Loses only this pair.
    Pair(Error),
    /// Aborts the run.
    Fatal(Error),
}

fn generate_pair(
    name: &str,
    variant: Variant,
    asset: &Path,
    format_roots: &[(ModuleFormat, PathBuf)],
) -> Result<(), PairError> {
    let raw = fs::read_to_string(asset).map_err(|err| {
        PairError::Pair(Error::Parse {
            path: asset.to_path_buf(),
            message: format!("unreadable source: {err}"),
        })
    })?;
    let document = parse_svg(&raw).map_err(|message| {
        PairError::Pair(Error::Parse {
            path: asset.to_path_buf(),
            message,
        })
    })?;
    let body = transform_document(&document);

    // Render every requested format before writing anything, so a render
    // failure leaves no partial output for the pair.
    let mut rendered = Vec::with_capacity(format_roots.len());
    for (format, root) in format_roots {
        let module = ComponentModule {
            name: name.to_string(),
            variant,
            format: *format,
            body: body.clone(),
        };
        let source = emit_component(&module).map_err(|message| {
            PairError::Pair(Error::Render {
                name: name.to_string(),
                message,
            })
        })?;
        rendered.push((root.clone(), source));
    }

    let typing = emit_type_declaration(name);
    for (root, source) in rendered {
        write_file(&root.join(format!("{name}.js")), &source).map_err(PairError::Fatal)?;
        write_file(&root.join(format!("{name}.d.ts")), &typing).map_err(PairError::Fatal)?;
    }
    Ok(())
}

/// Map each requested format to its output root: CJS at the output root
/// and ESM under `esm/` when both are requested, the output root itself
/// for a single format.
pub fn format_roots(config: &BuildConfig) -> Vec<(ModuleFormat, PathBuf)> {
    if config.formats.len() == 1 {
        return vec![(config.formats[0], config.out_dir.clone())];
    }
    config
        .formats
        .iter()
        .map(|format| {
            let root = match format {
                ModuleFormat::Cjs => config.out_dir.clone(),
                ModuleFormat::Esm => config.out_dir.join("esm"),
            };
            (*format, root)
        })
        .collect()
}

fn ensure_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path_layout() {
        let path = asset_path(Path::new("icons"), "arrow-left", Variant::TwoTone);
        assert_eq!(path, Path::new("icons/twotone/arrow-left.svg"));
    }

    #[test]
    fn test_format_roots_dual() {
        let config = BuildConfig {
            out_dir: PathBuf::from("dist"),
            ..BuildConfig::default()
        };
        let roots = format_roots(&config);
        assert_eq!(
            roots,
            vec![
                (ModuleFormat::Cjs, PathBuf::from("dist")),
                (ModuleFormat::Esm, PathBuf::from("dist/esm")),
            ]
        );
    }

    #[test]
    fn test_format_roots_single() {
        let config = BuildConfig {
            formats: vec![ModuleFormat::Esm],
            out_dir: PathBuf::from("out"),
            ..BuildConfig::default()
        };
        assert_eq!(
            format_roots(&config),
            vec![(ModuleFormat::Esm, PathBuf::from("out"))]
        );
    }
}
