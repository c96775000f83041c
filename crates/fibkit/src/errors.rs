//! Error handling and exit codes.

use fibkit_core::constants::exit_codes;
use fibkit_core::FibError;

/// Map an engine error to the process exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Validation(_) => exit_codes::ERROR_VALIDATION,
        FibError::Engine(_) => exit_codes::ERROR_ENGINE,
    }
}

/// Exit code for any error escaping [`crate::app::run`].
///
/// Errors that did not originate in the engine (I/O and the like) are
/// reported as engine failures.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FibError>()
        .map_or(exit_codes::ERROR_ENGINE, handle_error)
}
