//! Stdout access shared by the C entry points.

use std::io::{self, Write};

/// Run `f` against a locked stdout, then flush.
///
/// C stdio is flushed first so output of the caller's `printf` and ours
/// appear in call order.
pub(crate) fn with_stdout<T>(f: impl FnOnce(&mut dyn Write) -> io::Result<T>) -> io::Result<T> {
    // SAFETY: fflush(NULL) flushes all open C output streams.
    unsafe {
        libc::fflush(std::ptr::null_mut());
    }

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let value = f(&mut lock)?;
    lock.flush()?;
    Ok(value)
}

/// Like [`with_stdout`] for entry points with no status to return: write
/// failures are logged and dropped.
pub(crate) fn print_or_log(what: &'static str, f: impl FnOnce(&mut dyn Write) -> io::Result<()>) {
    if let Err(err) = with_stdout(f) {
        tracing::warn!(what, error = %err, "failed to write to stdout");
    }
}
