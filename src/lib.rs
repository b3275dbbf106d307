//! icongen turns a tree of SVG icon sources (one subdirectory per visual
//! variant) into React component sources, per-component type declarations
//! and aggregate index files, for ESM and CJS targets.

#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_debug_implementations)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod manifest;
pub mod name;
pub mod pipeline;
pub mod scanner;
pub mod variant;

pub use component::types::ModuleFormat;
pub use config::{BuildConfig, ScanMode};
pub use error::Error;
pub use pipeline::{BuildSummary, run_build};
pub use variant::Variant;

/// Initialize the tracing subscriber.
///
/// `ICONGEN_LOG` controls the log level: a plain level name ("trace",
/// "debug", "info", "warn", "error") scopes to this crate, anything else
/// is taken as a full tracing filter spec. Defaults to warnings only so
/// generation output stays clean.
pub fn init_tracing() {
    let crate_root = module_path!().to_string();

    let filter = match std::env::var("ICONGEN_LOG") {
        Ok(level) if is_plain_level(&level) => format!("{crate_root}={level}"),
        Ok(spec) => spec,
        Err(_) => format!("{crate_root}=warn"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
