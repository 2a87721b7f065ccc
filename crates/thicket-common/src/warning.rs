//! Parser warnings with colored terminal output.
//!
//! A malformed document can trigger the same recovery hundreds of times, so
//! each distinct message is printed at most once until the set is cleared.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, keyed by `[component] message`.
static SEEN: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn seen() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    SEEN.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Print a warning for `component` unless the same message was already printed.
///
/// Returns `true` when the message was printed by this call.
///
/// # Example
/// ```ignore
/// warn_once("HTML", "unmatched end tag </span> ignored");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first_time = seen().get_or_insert_with(HashSet::new).insert(key);

    if first_time {
        eprintln!("{YELLOW}[thicket {component}] warning: {message}{RESET}");
    }
    first_time
}

/// Forget every printed warning (call before parsing a new document).
pub fn clear_warnings() {
    if let Some(set) = seen().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Kept as one test: clearing is global and would race a parallel test.
    #[test]
    fn test_warn_once_deduplicates_until_cleared() {
        let message = "test_warn_once_deduplicates_until_cleared";
        assert!(warn_once("Test", message));
        assert!(!warn_once("Test", message));
        assert!(warn_once("Other", message));

        clear_warnings();
        assert!(warn_once("Test", message));
    }
}
