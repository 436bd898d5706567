use std::fs::{self, File};
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Default log location: `<data_local_dir>/mdtodo/mdtodo.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("mdtodo").join("mdtodo.log"))
}

/// Parse a level name from config. Unknown names fall back to `info`.
pub fn parse_level(name: Option<&str>) -> LevelFilter {
    match name.map(|s| s.to_ascii_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") | Some("warning") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize the file logger. The terminal belongs to the TUI, so nothing
/// is logged to stdout/stderr. Failures leave logging disabled.
pub fn init_logging(path: Option<&Path>, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let path = match path.map(Path::to_path_buf).or_else(default_log_path) {
        Some(p) => p,
        None => return,
    };
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
