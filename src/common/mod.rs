pub mod io;

/// Reset SIGPIPE to default behavior (SIG_DFL).
/// Rust sets SIGPIPE to SIG_IGN by default, but a stdin/stdout filter
/// should be killed by SIGPIPE (exit code 141 = 128 + 13) when its reader
/// goes away. This must be called at the start of main().
#[inline]
pub fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Format an IO error without the "(os error N)" suffix Rust's Display
/// impl appends, e.g. "No such file or directory" instead of
/// "No such file or directory (os error 2)".
pub fn io_error_msg(e: &std::io::Error) -> String {
    match e.raw_os_error() {
        Some(raw) => {
            let msg = std::io::Error::from_raw_os_error(raw).to_string();
            msg.replace(&format!(" (os error {})", raw), "")
        }
        None => e.to_string(),
    }
}
