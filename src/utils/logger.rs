use std::io;
use std::sync::Mutex;

use slog::{Drain, Logger, o};

/// Returns a logger that writes JSON records to stdout.
pub fn get_logger() -> Logger {
    let drain = slog_json::Json::default(io::stdout()).fuse();
    let drain = Mutex::new(drain).fuse();
    Logger::root(drain, o!())
}
