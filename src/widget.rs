use super::*;
use tauri::{WebviewUrl, WebviewWindowBuilder};

const WIDGET_WINDOW_TITLE: &str = "Chat";
const WIDGET_INIT_SCRIPT: &str = include_str!("widget_bridge.js");

pub(crate) fn widget_visible(state: &WidgetState) -> bool {
    state.visible.lock().map(|visible| *visible).unwrap_or(false)
}

/// Flips the visibility flag; returns whether the value actually changed.
pub(crate) fn set_widget_visible(state: &WidgetState, visible: bool) -> bool {
    let Ok(mut current) = state.visible.lock() else {
        return false;
    };
    let changed = *current != visible;
    *current = visible;
    changed
}

/// Records that the one-time navigation to the widget URL happened. Returns
/// true only for the first call across the whole app lifetime.
pub(crate) fn mark_widget_loaded(state: &WidgetState) -> bool {
    let Ok(mut loaded) = state.loaded.lock() else {
        return false;
    };
    let first = !*loaded;
    *loaded = true;
    first
}

fn ensure_widget_window(app: &tauri::AppHandle) -> Result<tauri::WebviewWindow, String> {
    // A window with this label can only exist once; re-show it rather than
    // rebuilding, which would fail and would also reload the remote page.
    if let Some(existing) = app.get_webview_window(WIDGET_WINDOW_LABEL) {
        return Ok(existing);
    }

    let url = config::widget_url();
    let url_string = url.to_string();
    let widget_origin = url.origin();

    let window = WebviewWindowBuilder::new(app, WIDGET_WINDOW_LABEL, WebviewUrl::External(url))
        .title(WIDGET_WINDOW_TITLE)
        .inner_size(420.0, 680.0)
        .initialization_script(WIDGET_INIT_SCRIPT)
        .on_navigation(move |target| {
            if target.origin() == widget_origin {
                return true;
            }
            // The widget window stays pinned to the widget origin; anything
            // else goes to the system browser.
            if let Err(err) = tauri_plugin_opener::open_url(target.as_str(), None::<&str>) {
                log::warn!("Unable to open external link {target}: {err}");
            }
            false
        })
        .build()
        .map_err(|e| format!("Unable to create chat widget window: {e}"))?;

    let state = app.state::<WidgetState>();
    if mark_widget_loaded(&state) {
        log::info!("Chat widget loading from {url_string}");
    }

    Ok(window)
}

#[tauri::command]
pub(crate) fn open_widget(app: tauri::AppHandle) -> Result<(), String> {
    set_widget_visible(&app.state::<WidgetState>(), true);

    let window = ensure_widget_window(&app)?;
    window
        .show()
        .map_err(|e| format!("Unable to show chat widget: {e}"))?;
    let _ = window.set_focus();

    Ok(())
}

#[tauri::command]
pub(crate) fn close_widget(app: tauri::AppHandle) -> Result<(), String> {
    set_widget_visible(&app.state::<WidgetState>(), false);

    if let Some(window) = app.get_webview_window(WIDGET_WINDOW_LABEL) {
        window
            .hide()
            .map_err(|e| format!("Unable to hide chat widget: {e}"))?;
    }

    Ok(())
}

#[tauri::command]
pub(crate) fn widget_visibility(app: tauri::AppHandle) -> bool {
    widget_visible(&app.state::<WidgetState>())
}
