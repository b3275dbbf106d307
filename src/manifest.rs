//! Ordered record of emitted components and aggregate file rendering.

use crate::component::types::ModuleFormat;

/// One emitted component: identifier plus its per-root output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Generated component identifier.
    pub name: String,
    /// File name of the component source inside each format root.
    pub file_name: String,
}

/// The ordered manifest of everything the run emitted.
///
/// Entries are appended strictly in emission order, with no reordering and
/// no deduplication: if two base names normalize to the same identifier,
/// both registrations appear here even though the later one's file
/// overwrote the earlier one's on disk. The manifest is therefore a
/// superset of the readable files in the collision case.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Append one emitted component.
    pub fn register(&mut self, name: String, file_name: String) {
        self.entries.push(ManifestEntry { name, file_name });
    }

    /// Registered entries in emission order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the aggregate `index.js` re-exporting every registered
    /// component from its per-component file.
    pub fn index_source(&self, format: ModuleFormat) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match format {
                ModuleFormat::Esm => out.push_str(&format!(
                    "export {{ default as {} }} from './{}';\n",
                    entry.name, entry.file_name
                )),
                ModuleFormat::Cjs => out.push_str(&format!(
                    "module.exports.{} = require('./{}');\n",
                    entry.name, entry.file_name
                )),
            }
        }
        out
    }

    /// Render the aggregate `index.d.ts`: the shared `IconProps` interface
    /// followed by one ambient declaration per registered component.
    pub fn type_declarations(&self) -> String {
        let mut out = String::from(INDEX_TYPE_PREAMBLE);
        for entry in &self.entries {
            out.push_str(&format!("export const {}: Icon;\n", entry.name));
        }
        out
    }
}

const INDEX_TYPE_PREAMBLE: &str = "\
/// <reference types=\"react\" />
import { FC, SVGAttributes, Ref } from 'react';
export interface IconProps extends SVGAttributes<SVGElement> {
  ref?: Ref<SVGSVGElement>;
  color?: string;
  size?: string | number;
}
export type Icon = FC<IconProps>;
";

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn sample() -> Manifest {
        let mut manifest = Manifest::default();
        manifest.register("ArrowLeftBold".to_string(), "ArrowLeftBold.js".to_string());
        manifest.register("HomeBold".to_string(), "HomeBold.js".to_string());
        manifest
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let manifest = sample();
        let names: Vec<&str> = manifest.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["ArrowLeftBold", "HomeBold"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut manifest = sample();
        manifest.register("HomeBold".to_string(), "HomeBold.js".to_string());
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_esm_index() {
        assert_eq!(
            sample().index_source(ModuleFormat::Esm),
            "export { default as ArrowLeftBold } from './ArrowLeftBold.js';\n\
             export { default as HomeBold } from './HomeBold.js';\n"
        );
    }

    #[test]
    fn test_cjs_index() {
        assert_eq!(
            sample().index_source(ModuleFormat::Cjs),
            "module.exports.ArrowLeftBold = require('./ArrowLeftBold.js');\n\
             module.exports.HomeBold = require('./HomeBold.js');\n"
        );
    }

    #[test]
    fn test_type_declarations() {
        let decls = sample().type_declarations();
        assert!(decls.starts_with("/// <reference types=\"react\" />\n"));
        assert!(decls.contains("export interface IconProps"));
        assert!(decls.ends_with(
            "export const ArrowLeftBold: Icon;\nexport const HomeBold: Icon;\n"
        ));
    }
}
