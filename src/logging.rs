use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Env, Target};

/// Route `log` output to `path`. The terminal belongs to the TUI, so nothing
/// is written to stderr. Logging is skipped if the file cannot be opened.
pub fn init(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init();
}
