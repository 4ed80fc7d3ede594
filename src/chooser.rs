use super::*;
use tauri_plugin_dialog::DialogExt;

/// Parameters forwarded from a file input inside the widget page. Opaque to
/// the host beyond what is needed to shape the native dialog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChooserParams {
    #[serde(default)]
    pub(crate) accept: Vec<String>,
    #[serde(default)]
    pub(crate) multiple: bool,
    #[serde(default)]
    pub(crate) capture: bool,
}

/// The one-shot continuation for a file chooser request. Resolved exactly
/// once, with one path or with an explicit empty list, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingChooser {
    pub(crate) request_id: usize,
    pub(crate) source_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChooserResolvedPayload {
    pub(crate) request_id: usize,
    pub(crate) paths: Vec<String>,
}

/// Stores a new pending chooser, returning the one it displaced (if any) so
/// the caller can resolve the displaced handle with an empty selection.
pub(crate) fn store_pending_chooser(
    state: &WidgetState,
    pending: PendingChooser,
) -> Option<PendingChooser> {
    let Ok(mut slot) = state.pending_chooser.lock() else {
        return None;
    };
    slot.replace(pending)
}

pub(crate) fn take_pending_chooser(state: &WidgetState) -> Option<PendingChooser> {
    let Ok(mut slot) = state.pending_chooser.lock() else {
        return None;
    };
    slot.take()
}

/// Takes the pending chooser only when its id matches; a stale or duplicate
/// result delivery leaves the slot untouched.
pub(crate) fn take_pending_chooser_if(
    state: &WidgetState,
    request_id: usize,
) -> Option<PendingChooser> {
    let Ok(mut slot) = state.pending_chooser.lock() else {
        return None;
    };
    if slot.as_ref().map(|pending| pending.request_id) != Some(request_id) {
        return None;
    }
    slot.take()
}

pub(crate) fn clear_pending_chooser_if(state: &WidgetState, request_id: usize) {
    let _ = take_pending_chooser_if(state, request_id);
}

/// Maps HTML `accept` tokens (".png", "image/png", "image/*") to extension
/// lists the native dialog understands. Unknown tokens are dropped.
pub(crate) fn accept_extensions(accept: &[String]) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();

    for token in accept {
        let token = token.trim().to_ascii_lowercase();
        if token.is_empty() {
            continue;
        }

        let mapped: Vec<String> = if let Some(ext) = token.strip_prefix('.') {
            vec![ext.to_string()]
        } else {
            match token.as_str() {
                "image/*" => ["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"]
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect(),
                "video/*" => ["mp4", "webm", "mov", "mkv", "avi"]
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect(),
                "audio/*" => ["mp3", "wav", "ogg", "m4a", "flac"]
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect(),
                other => match other.split_once('/') {
                    Some((_, subtype)) if !subtype.is_empty() && !subtype.contains('*') => {
                        vec![subtype.to_string()]
                    }
                    _ => Vec::new(),
                },
            }
        };

        for ext in mapped {
            if !ext.is_empty() && !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
    }

    extensions
}

pub(crate) fn chooser_resolution_paths(picked: Option<String>) -> Vec<String> {
    picked.into_iter().collect()
}

#[tauri::command]
pub(crate) fn request_file_chooser(
    window: tauri::Window,
    params: ChooserParams,
) -> Result<usize, String> {
    let app = window.app_handle().clone();
    let state = app.state::<WidgetState>();

    let request_id = NEXT_CHOOSER_REQUEST_ID.fetch_add(1, Ordering::Relaxed);

    let displaced = store_pending_chooser(
        &state,
        PendingChooser {
            request_id,
            source_label: window.label().to_string(),
        },
    );
    // Only one chooser may be pending; the displaced handle is never left
    // hanging.
    if let Some(previous) = displaced {
        log::debug!(
            "File chooser request {} displaced by request {request_id}",
            previous.request_id
        );
        resolve_chooser(&app, &previous, Vec::new());
    }

    if let Err(err) = launch_file_dialog(&app, &params, request_id) {
        clear_pending_chooser_if(&state, request_id);
        report_chooser_unavailable(&app);
        return Err(err);
    }

    Ok(request_id)
}

fn launch_file_dialog(
    app: &tauri::AppHandle,
    params: &ChooserParams,
    request_id: usize,
) -> Result<(), String> {
    let Some(widget) = app.get_webview_window(WIDGET_WINDOW_LABEL) else {
        return Err("No file selection facility is available".to_string());
    };

    if params.multiple || params.capture {
        // The native dialog returns at most one selection; capture sources
        // are not available on desktop.
        log::debug!(
            "Chooser requested multiple={} capture={}; a single selection is returned",
            params.multiple,
            params.capture
        );
    }

    let mut dialog = app
        .dialog()
        .file()
        .set_title("Choose a file")
        .set_parent(&widget);

    let extensions = accept_extensions(&params.accept);
    if !extensions.is_empty() {
        let refs: Vec<&str> = extensions.iter().map(String::as_str).collect();
        dialog = dialog.add_filter("Accepted files", &refs);
    }

    let dialog_app = app.clone();
    dialog.pick_file(move |picked| {
        deliver_chooser_result(&dialog_app, request_id, picked.map(|path| path.to_string()));
    });

    Ok(())
}

/// Result delivery from the native dialog. Ignores results that no longer
/// match the pending request.
pub(crate) fn deliver_chooser_result(
    app: &tauri::AppHandle,
    request_id: usize,
    picked: Option<String>,
) {
    let state = app.state::<WidgetState>();
    let Some(pending) = take_pending_chooser_if(&state, request_id) else {
        log::debug!("Ignoring stale file chooser result for request {request_id}");
        return;
    };

    resolve_chooser(app, &pending, chooser_resolution_paths(picked));
}

/// Resolves a pending chooser left behind by a destroyed widget window with
/// an empty selection.
pub(crate) fn resolve_pending_chooser_empty(app: &tauri::AppHandle) {
    let state = app.state::<WidgetState>();
    if let Some(pending) = take_pending_chooser(&state) {
        resolve_chooser(app, &pending, Vec::new());
    }
}

fn resolve_chooser(app: &tauri::AppHandle, pending: &PendingChooser, paths: Vec<String>) {
    emit_to_window(
        app,
        &pending.source_label,
        EVENT_FILE_CHOOSER_RESOLVED,
        ChooserResolvedPayload {
            request_id: pending.request_id,
            paths,
        },
    );
}

fn report_chooser_unavailable(app: &tauri::AppHandle) {
    log::warn!("File chooser requested but no selection facility is available");
    emit_to_window(
        app,
        MAIN_WINDOW_LABEL,
        EVENT_WIDGET_NOTICE,
        "Cannot open file chooser".to_string(),
    );
}
