// System-level primitives: diagnostics, polling, sleeping, wall-clock time.

use chrono::Utc;
use std::thread;
use std::time::Duration;

/// Print a system diagnostic line.
pub fn sys_log(message: &str) {
    println!("[SYS] {}", message);
}

/// Input-polling placeholder; always reports no pending input.
pub fn poll() -> i64 {
    0
}

/// Block the calling thread for about `ms` milliseconds.
///
/// Uses the host sleep primitive: not cancellable and not exact.
/// Non-positive durations return immediately.
pub fn sleep_ms(ms: i64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}

/// Current Unix time in whole seconds.
pub fn time_now() -> i64 {
    Utc::now().timestamp()
}
