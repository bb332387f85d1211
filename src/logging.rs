//! Logging bootstrap.
//!
//! The crate logs through the `log` facade only. Hosts that already install
//! a logger need nothing from this module; others call [`init_logging`]
//! once at startup to get stderr output through flexi_logger.
//!
//! Log levels used by the board:
//! - `warn` - rejected configuration, failed layout pass
//! - `debug` - ignored settles, events for unknown columns or cards
//! - `trace` - every completed measurement pass

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

use crate::error::{BoardError, Result};

static LOGGER: OnceCell<LoggerState> = OnceCell::new();

struct LoggerState {
    spec: String,
    _handle: LoggerHandle,
}

/// Level used when the host does not pick one.
pub fn default_log_spec() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    }
}

/// Start stderr logging with a flexi_logger spec such as
/// `"warn, kanban_carousel=debug"`.
///
/// Idempotent: later calls keep the first logger and return `Ok(())`.
pub fn init_logging(spec: &str) -> Result<()> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(BoardError::Logging {
            message: "log spec cannot be empty".to_string(),
        });
    }

    LOGGER.get_or_try_init(|| -> Result<LoggerState> {
        let handle = Logger::try_with_str(spec)
            .map_err(|err| BoardError::Logging {
                message: format!("invalid log spec `{spec}`: {err}"),
            })?
            .log_to_stderr()
            .start()
            .map_err(|err| BoardError::Logging {
                message: format!("failed to start logger: {err}"),
            })?;

        log::debug!("logging started with `{spec}`");
        Ok(LoggerState {
            spec: spec.to_string(),
            _handle: handle,
        })
    })?;

    Ok(())
}

/// Spec of the running logger, if [`init_logging`] succeeded.
pub fn active_log_spec() -> Option<&'static str> {
    LOGGER.get().map(|state| state.spec.as_str())
}
