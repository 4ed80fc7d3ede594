use super::*;

pub(super) static ENV_LOCK: Mutex<()> = Mutex::new(());

pub(super) fn test_state() -> WidgetState {
    WidgetState {
        visible: Mutex::new(false),
        loaded: Mutex::new(false),
        pending_chooser: Mutex::new(None),
    }
}

pub(super) fn pending(request_id: usize) -> PendingChooser {
    PendingChooser {
        request_id,
        source_label: WIDGET_WINDOW_LABEL.to_string(),
    }
}
