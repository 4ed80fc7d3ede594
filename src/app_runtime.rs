use super::*;
use tauri_plugin_log::{Target, TargetKind};

pub(crate) fn run_app() {
    let app = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .target(Target::new(TargetKind::LogDir {
                    file_name: Some("chatdock".into()),
                }))
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .setup(setup_app)
        .on_window_event(handle_window_event)
        .invoke_handler(tauri::generate_handler![
            widget::open_widget,
            widget::close_widget,
            widget::widget_visibility,
            chooser::request_file_chooser,
            console::log_console_message
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|_app_handle, _event| {});
}

fn setup_app(app: &mut tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    app.manage(WidgetState {
        visible: Mutex::new(false),
        loaded: Mutex::new(false),
        pending_chooser: Mutex::new(None),
    });

    Ok(())
}

fn handle_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    if window.label() != WIDGET_WINDOW_LABEL {
        return;
    }

    match event {
        tauri::WindowEvent::CloseRequested { api, .. } => {
            // Dismissal hides the widget instead of destroying it, so the
            // remote chat session survives the next reopen without a reload.
            api.prevent_close();
            let app = window.app_handle();
            set_widget_visible(&app.state::<WidgetState>(), false);
            let _ = window.hide();
            emit_to_window(app, MAIN_WINDOW_LABEL, EVENT_WIDGET_VISIBILITY_CHANGED, false);
        }
        tauri::WindowEvent::Destroyed => {
            // A chooser left pending past the widget's lifetime must still be
            // resolved, with an empty selection.
            resolve_pending_chooser_empty(window.app_handle());
        }
        _ => {}
    }
}
