pub mod build;

use crate::error::Error;

/// Run a command body and map its result to a process exit code.
pub fn run_cli<F>(f: F) -> i32
where
    F: FnOnce() -> Result<(), Error>,
{
    match f() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
