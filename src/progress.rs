// src/progress.rs
/// Lightweight progress reporting used by long-running operations (the wait loop).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the maximum number of snapshots the wait loop will take.
    fn begin(&mut self, _max_attempts: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each snapshot that did not contain the list yet.
    fn attempt(&mut self, _n: u32, _found_container: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
