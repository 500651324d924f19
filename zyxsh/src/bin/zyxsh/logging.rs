use std::io::Write;

use env_logger::Env;
use log::LevelFilter;

/// Install the logger.
///
/// Debug mode (flag or `$DEBUG`) writes one JSON object per record to
/// stderr, tagged with the target host and command. Only zyxsh itself logs
/// at debug level there; other crates stay at warnings. Otherwise `RUST_LOG`
/// applies, defaulting to warnings only.
pub fn init(debug_flag: bool, host: &str, command: &str) {
    if debug_flag || debug_from_env(std::env::var("DEBUG").ok().as_deref()) {
        let host = host.to_string();
        let command = command.to_string();
        debug_builder()
            .format(move |buf, record| {
                let line = serde_json::json!({
                    "timestamp": buf.timestamp_millis().to_string(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "file": record.file(),
                    "line": record.line(),
                    "host": host,
                    "command": command,
                    "message": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            })
            .init();
    } else {
        env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    }
}

fn debug_builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("zyxsh", LevelFilter::Debug);
    builder
}

fn debug_from_env(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
