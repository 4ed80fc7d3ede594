use serde::{Deserialize, Serialize};
use std::{
    env,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};
use tauri::{Emitter, Manager};

mod app_runtime;
mod chooser;
mod config;
mod console;
mod widget;

use chooser::request_file_chooser;
#[cfg(test)]
use chooser::{
    accept_extensions, chooser_resolution_paths, clear_pending_chooser_if, store_pending_chooser,
    take_pending_chooser, take_pending_chooser_if, ChooserResolvedPayload,
};
use chooser::{resolve_pending_chooser_empty, PendingChooser};
use console::log_console_message;
#[cfg(test)]
use console::console_log_level;
use widget::{close_widget, open_widget, set_widget_visible, widget_visibility};
#[cfg(test)]
use widget::{mark_widget_loaded, widget_visible};

#[cfg(test)]
use config::{default_widget_url, parse_widget_url_override, widget_url};
pub use config::WIDGET_URL_ENV;

const EVENT_FILE_CHOOSER_RESOLVED: &str = "chatdock://file-chooser-resolved";
const EVENT_WIDGET_NOTICE: &str = "chatdock://notice";
const EVENT_WIDGET_VISIBILITY_CHANGED: &str = "chatdock://widget-visibility-changed";

const MAIN_WINDOW_LABEL: &str = "main";
const WIDGET_WINDOW_LABEL: &str = "chat-widget";

static NEXT_CHOOSER_REQUEST_ID: AtomicUsize = AtomicUsize::new(1);

/// Screen state managed by the Tauri app: the widget's visibility flag, the
/// one-time load mark, and the at-most-one pending file chooser continuation.
struct WidgetState {
    visible: Mutex<bool>,
    loaded: Mutex<bool>,
    pending_chooser: Mutex<Option<PendingChooser>>,
}

fn window_event(base: &str, label: &str) -> String {
    format!("{}/{}", base, label)
}

fn emit_to_window(
    app: &tauri::AppHandle,
    label: &str,
    event_name: &str,
    payload: impl serde::Serialize + Clone,
) {
    let scoped = window_event(event_name, label);
    let _ = app.emit(&scoped, payload);
}

#[cfg(test)]
mod tests;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    app_runtime::run_app();
}
