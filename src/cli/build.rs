use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::run_cli;
use crate::component::types::ModuleFormat;
use crate::config::{BuildConfig, ConfigFile, ScanMode, parse_formats};
use crate::error::Error;
use crate::pipeline;

const DEFAULT_REFERENCE_VARIANT: &str = "Bold";

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[arg(
        value_name = "PROJECT_PATH",
        help = "Path to the icon project. Defaults to the current working directory"
    )]
    pub project_path: Option<PathBuf>,
    #[arg(
        long = "icons-dir",
        help = "Directory containing per-variant icon sources, relative to the project path"
    )]
    pub icons_dir: Option<PathBuf>,
    #[arg(
        long = "out-dir",
        help = "Directory where generated sources are written, relative to the project path"
    )]
    pub out_dir: Option<PathBuf>,
    #[arg(long, value_enum, help = "Module format(s) to emit")]
    pub format: Option<FormatArg>,
    #[arg(
        long = "variant",
        value_name = "VARIANT",
        help = "Restrict generation to the given variants (repeatable)"
    )]
    pub variants: Vec<String>,
    #[arg(
        long = "reference-variant",
        value_name = "VARIANT",
        help = "Variant whose directory drives icon enumeration"
    )]
    pub reference_variant: Option<String>,
    #[arg(
        long = "scan-all",
        help = "Enumerate icons from every variant directory instead of the reference variant"
    )]
    pub scan_all: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Esm,
    Cjs,
    Both,
}

impl FormatArg {
    fn formats(self) -> Vec<ModuleFormat> {
        match self {
            Self::Esm => vec![ModuleFormat::Esm],
            Self::Cjs => vec![ModuleFormat::Cjs],
            Self::Both => vec![ModuleFormat::Cjs, ModuleFormat::Esm],
        }
    }
}

pub fn run(args: BuildArgs) -> i32 {
    run_cli(|| run_inner(args))
}

fn run_inner(args: BuildArgs) -> Result<(), Error> {
    let project_path = args
        .project_path
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = resolve_config(&project_path, &args)?;
    debug!(?config, "resolved build configuration");

    println!("Generating components from {}", config.icons_dir.display());
    let start_time = Instant::now();
    let sp = spinner("Generating components...");
    let result = pipeline::run_build(&config);
    sp.finish_and_clear();

    let summary = result?;
    println!(
        "Generated {} components ({} skipped, {} failed) in {}ms",
        summary.emitted,
        summary.skipped,
        summary.failed,
        start_time.elapsed().as_millis()
    );
    Ok(())
}

/// Merge defaults, the optional `icongen.toml` and CLI flags, in that
/// order of precedence.
fn resolve_config(project_path: &Path, args: &BuildArgs) -> Result<BuildConfig, Error> {
    let mut config = BuildConfig::default();
    let file = ConfigFile::load(project_path)?.unwrap_or_default();

    let icons_dir = args
        .icons_dir
        .clone()
        .or(file.icons_dir)
        .unwrap_or(config.icons_dir);
    let out_dir = args
        .out_dir
        .clone()
        .or(file.out_dir)
        .unwrap_or(config.out_dir);
    config.icons_dir = project_path.join(icons_dir);
    config.out_dir = project_path.join(out_dir);

    if let Some(format) = args.format {
        config.formats = format.formats();
    } else if let Some(names) = &file.formats {
        config.formats = parse_formats(names)?;
    }

    if !args.variants.is_empty() {
        config.variants = args.variants.clone();
    } else if let Some(variants) = &file.variants {
        config.variants = variants.clone();
    }

    let scan_all = args.scan_all || file.scan_all.unwrap_or(false);
    config.scan = if scan_all {
        ScanMode::Union
    } else {
        let reference = args
            .reference_variant
            .clone()
            .or(file.reference_variant)
            .unwrap_or_else(|| DEFAULT_REFERENCE_VARIANT.to_string());
        ScanMode::Reference(reference)
    };

    Ok(config)
}

fn spinner(message: &str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        sp.set_style(style);
    }
    sp.set_message(message.to_string());
    sp.enable_steady_tick(Duration::from_millis(80));
    sp
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn bare_args() -> BuildArgs {
        BuildArgs {
            project_path: None,
            icons_dir: None,
            out_dir: None,
            format: None,
            variants: Vec::new(),
            reference_variant: None,
            scan_all: false,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_path_buf();
        let config = resolve_config(&root, &bare_args()).unwrap();
        assert_eq!(config.icons_dir, root.join("icons"));
        assert_eq!(config.out_dir, root.join("dist"));
        assert_eq!(config.formats, vec![ModuleFormat::Cjs, ModuleFormat::Esm]);
        assert_eq!(config.scan, ScanMode::Reference("Bold".to_string()));
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("icongen.toml"),
            "formats = [\"cjs\"]\nout_dir = \"build\"\n",
        )
        .unwrap();
        let root = tmp.path().to_path_buf();

        let mut args = bare_args();
        args.format = Some(FormatArg::Esm);
        let config = resolve_config(&root, &args).unwrap();
        // CLI wins for formats, file wins for the untouched out_dir.
        assert_eq!(config.formats, vec![ModuleFormat::Esm]);
        assert_eq!(config.out_dir, root.join("build"));
    }

    #[test]
    fn test_scan_all_from_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("icongen.toml"), "scan_all = true\n").unwrap();
        let root = tmp.path().to_path_buf();
        let config = resolve_config(&root, &bare_args()).unwrap();
        assert_eq!(config.scan, ScanMode::Union);
    }
}
