use crate::process::ProcessError;

use libc::{signal, sighandler_t, SIGINT, SIG_ERR};

/// Does nothing; an interrupt aimed at a running child must not take the
/// interpreter down with it.
pub extern "C" fn handle_sigint(_: i32) {}

/// Installed immediately before blocking on a child wait.
pub fn install_wait_handler() -> Result<(), ProcessError> {
    let previous = unsafe { signal(SIGINT, handle_sigint as sighandler_t) };
    if previous == SIG_ERR {
        return Err(ProcessError::SignalError(
            "failed to install SIGINT handler".to_string(),
        ));
    }
    Ok(())
}
