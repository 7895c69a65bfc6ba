
extern crate log;

use log::{info, warn};
use std::time::{Duration, Instant};

/// A timing scope for one call. The elapsed time is logged when the scope is dropped,
/// which also happens on an early return or while unwinding from a panic.
/// # Examples
/// ```rust
/// use kmotif::profiling::ProfileScope;
/// let total: u64 = {
///     let _scope = ProfileScope::new("summation");
///     (0..100u64).sum()
/// };
/// assert_eq!(total, 4950);
/// ```
pub struct ProfileScope {
    /// what is being timed, used in the report
    label: String,
    /// when the scope was opened
    start: Instant
}

impl ProfileScope {
    /// Opens a new scope and starts the clock
    /// # Arguments
    /// * `label` - a name for the timed call
    pub fn new(label: &str) -> Self {
        ProfileScope {
            label: label.to_string(),
            start: Instant::now()
        }
    }

    /// Time spent since the scope was opened
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ProfileScope {
    fn drop(&mut self) {
        if std::thread::panicking() {
            warn!("{} panicked after {:?}", self.label, self.elapsed());
        } else {
            info!("{} finished in {:?}", self.label, self.elapsed());
        }
    }
}

/// Runs `f` inside a `ProfileScope` and hands back its return value untouched.
/// # Arguments
/// * `label` - a name for the timed call
/// * `f` - the call to time
/// # Examples
/// ```rust
/// use kmotif::profiling::profiled;
/// use kmotif::pattern_codec::encode;
/// assert_eq!(profiled("encode", || encode("CA")).unwrap(), 4);
/// assert!(profiled("encode", || encode("CX")).is_err());
/// ```
pub fn profiled<T, F: FnOnce() -> T>(label: &str, f: F) -> T {
    let _scope = ProfileScope::new(label);
    f()
}
