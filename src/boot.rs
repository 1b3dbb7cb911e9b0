//! Startup decisions that do not need a browser: when to run the theme init,
//! and how independent controller mounts are combined into one result.

use crate::error::PageError;

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

/// A named controller mount, run by [`mount_all`].
pub type Mount<'a> = (&'a str, Box<dyn FnOnce() -> Result<(), PageError> + 'a>);

/// Whether page-load work must wait for `DOMContentLoaded`.
///
/// `ready_state` is `document.readyState`. Only `"loading"` defers; once the
/// document is `"interactive"` or `"complete"` the event has already fired.
#[must_use]
pub fn defer_until_loaded(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Run every mount in order, even after one fails.
///
/// Each failure is logged. Returns the first failure, or `Ok(())` when every
/// controller mounted.
///
/// # Errors
///
/// Returns the error of the first mount that failed.
pub fn mount_all<'a>(mounts: impl IntoIterator<Item = Mount<'a>>) -> Result<(), PageError> {
    let mut first_error = None;
    for (name, mount) in mounts {
        match mount() {
            Ok(()) => log::info!("{name} controller mounted"),
            Err(err) => {
                log::error!("{name} controller not mounted: {err}");
                first_error.get_or_insert(err);
            }
        }
    }
    first_error.map_or(Ok(()), Err)
}
