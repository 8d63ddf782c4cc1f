/// For failures that can happen in normal operation and only need to be
/// monitored. Takes an optional message to log with the error.
#[macro_export]
macro_rules! log_err_as_warn {
    ($arg: expr) => {
        if let Err(mishap) = $arg {
            tracing::warn!(?mishap);
        }
    };
    ($arg: expr, $msg: literal) => {
        if let Err(mishap) = $arg {
            tracing::warn!(?mishap, $msg);
        }
    };
}
