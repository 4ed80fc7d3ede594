use super::*;

pub(crate) fn console_log_level(level: &str) -> log::Level {
    match level.to_ascii_lowercase().as_str() {
        "error" => log::Level::Error,
        "warn" | "warning" => log::Level::Warn,
        "debug" => log::Level::Debug,
        "trace" | "verbose" => log::Level::Trace,
        _ => log::Level::Info,
    }
}

/// Console passthrough from the widget page. Pure observer: always succeeds,
/// never feeds anything back into the page.
#[tauri::command]
pub(crate) fn log_console_message(level: String, message: String, line: u32, source: String) {
    log::log!(
        target: "widget-console",
        console_log_level(&level),
        "{message} -- from line {line} of {source}"
    );
}
