//! Icon source enumeration.
//!
//! Directory read order is platform-dependent, so both scan modes sort the
//! collected base names lexicographically before deduplicating. Manifest
//! ordering is derived from this order and stays stable across
//! filesystems.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Error;
use crate::variant::Variant;

/// List the SVG base names inside one reference variant's directory.
pub fn scan_reference(icons_dir: &Path, reference: Variant) -> Result<Vec<String>, Error> {
    let dir = icons_dir.join(reference.dir_name());
    let mut names = Vec::new();
    let entries = fs::read_dir(&dir).map_err(|source| Error::Scan {
        path: dir.clone(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| Error::Scan {
            path: dir.clone(),
            source,
        })?;
        push_svg_stem(&entry.path(), &mut names);
    }
    Ok(finish(names))
}

/// List the union of SVG base names across every given variant's
/// directory. Missing variant directories are skipped silently.
pub fn scan_union(icons_dir: &Path, variants: &[Variant]) -> Result<Vec<String>, Error> {
    let mut names = Vec::new();
    for variant in variants {
        let dir = icons_dir.join(variant.dir_name());
        if !dir.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| Error::Scan {
                path: dir.clone(),
                source: err.into(),
            })?;
            if entry.file_type().is_file() {
                push_svg_stem(entry.path(), &mut names);
            }
        }
    }
    Ok(finish(names))
}

fn push_svg_stem(path: &Path, names: &mut Vec<String>) {
    if path.extension().and_then(|ext| ext.to_str()) != Some("svg") {
        return;
    }
    if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
        names.push(stem.to_string());
    }
}

fn finish(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<svg/>").unwrap();
    }

    #[test]
    fn test_reference_scan_sorts_and_filters() {
        let tmp = TempDir::new().unwrap();
        let bold = tmp.path().join("bold");
        fs::create_dir_all(&bold).unwrap();
        touch(&bold, "home.svg");
        touch(&bold, "arrow-left.svg");
        touch(&bold, "notes.txt");

        let names = scan_reference(tmp.path(), Variant::Bold).unwrap();
        assert_eq!(names, ["arrow-left", "home"]);
    }

    #[test]
    fn test_reference_scan_missing_dir_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = scan_reference(tmp.path(), Variant::Bold).unwrap_err();
        assert!(matches!(err, Error::Scan { .. }));
    }

    #[test]
    fn test_union_scan_deduplicates_across_variants() {
        let tmp = TempDir::new().unwrap();
        for (dir, files) in [
            ("bold", vec!["home.svg", "arrow-left.svg"]),
            ("linear", vec!["home.svg", "box.svg"]),
        ] {
            let path = tmp.path().join(dir);
            fs::create_dir_all(&path).unwrap();
            for file in files {
                touch(&path, file);
            }
        }

        let names = scan_union(tmp.path(), &Variant::ALL).unwrap();
        assert_eq!(names, ["arrow-left", "box", "home"]);
    }

    #[test]
    fn test_union_scan_skips_missing_variant_dirs() {
        let tmp = TempDir::new().unwrap();
        let bulk = tmp.path().join("bulk");
        fs::create_dir_all(&bulk).unwrap();
        touch(&bulk, "wallet.svg");

        let names = scan_union(tmp.path(), &Variant::ALL).unwrap();
        assert_eq!(names, ["wallet"]);
    }
}
