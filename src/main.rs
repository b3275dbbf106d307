use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

use icongen::cli;

#[derive(Parser)]
#[command(
    name = "icongen",
    version,
    about = "Generate React icon components from SVG icon sets"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate component sources, typings and index files
    Build(cli::build::BuildArgs),
}

fn main() -> ExitCode {
    icongen::init_tracing();

    let code = match Cli::try_parse() {
        Ok(parsed) => match parsed.command {
            Some(Commands::Build(args)) => cli::build::run(args),
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
