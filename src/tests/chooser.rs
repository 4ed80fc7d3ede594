use super::common::{pending, test_state};
use super::*;

#[test]
fn a_new_request_displaces_the_pending_one_leaving_exactly_one() {
    let state = test_state();

    assert_eq!(store_pending_chooser(&state, pending(1)), None);
    let displaced = store_pending_chooser(&state, pending(2));

    assert_eq!(displaced, Some(pending(1)));
    // Only the newest request remains pending.
    assert_eq!(take_pending_chooser(&state), Some(pending(2)));
    assert_eq!(take_pending_chooser(&state), None);
}

#[test]
fn matching_result_takes_the_pending_chooser() {
    let state = test_state();
    store_pending_chooser(&state, pending(7));

    assert_eq!(take_pending_chooser_if(&state, 7), Some(pending(7)));
    assert_eq!(take_pending_chooser_if(&state, 7), None);
}

#[test]
fn stale_result_is_ignored_and_leaves_the_pending_chooser_in_place() {
    let state = test_state();
    store_pending_chooser(&state, pending(9));

    // A result for an older, already-displaced request must not consume the
    // current continuation.
    assert_eq!(take_pending_chooser_if(&state, 3), None);
    assert_eq!(take_pending_chooser(&state), Some(pending(9)));
}

#[test]
fn result_with_no_pending_chooser_is_a_no_op() {
    let state = test_state();
    assert_eq!(take_pending_chooser_if(&state, 1), None);
    assert_eq!(take_pending_chooser(&state), None);
}

#[test]
fn launch_failure_cleanup_clears_only_the_matching_request() {
    let state = test_state();
    store_pending_chooser(&state, pending(4));

    clear_pending_chooser_if(&state, 5);
    assert_eq!(take_pending_chooser_if(&state, 4), Some(pending(4)));

    store_pending_chooser(&state, pending(6));
    clear_pending_chooser_if(&state, 6);
    assert_eq!(take_pending_chooser(&state), None);
}

#[test]
fn successful_selection_resolves_with_a_single_path() {
    assert_eq!(
        chooser_resolution_paths(Some("/tmp/photo.png".to_string())),
        vec!["/tmp/photo.png".to_string()]
    );
}

#[test]
fn cancelled_selection_resolves_with_an_explicit_empty_list() {
    assert!(chooser_resolution_paths(None).is_empty());
}

#[test]
fn resolution_payload_serializes_with_camel_case_keys() {
    let payload = ChooserResolvedPayload {
        request_id: 12,
        paths: vec!["/tmp/a.png".to_string()],
    };

    let json = serde_json::to_value(&payload).expect("payload serializes");
    assert_eq!(
        json,
        serde_json::json!({ "requestId": 12, "paths": ["/tmp/a.png"] })
    );
}

#[test]
fn accept_tokens_map_to_extension_filters() {
    let accept = vec![
        ".PNG".to_string(),
        "image/*".to_string(),
        "application/pdf".to_string(),
        "video/*".to_string(),
    ];

    let extensions = accept_extensions(&accept);

    assert!(extensions.contains(&"png".to_string()));
    assert!(extensions.contains(&"jpeg".to_string()));
    assert!(extensions.contains(&"pdf".to_string()));
    assert!(extensions.contains(&"mp4".to_string()));
    // ".PNG" and "image/*" both contribute png; the list stays deduplicated.
    assert_eq!(
        extensions.iter().filter(|ext| ext.as_str() == "png").count(),
        1
    );
}

#[test]
fn malformed_accept_tokens_are_dropped() {
    let accept = vec![
        "".to_string(),
        "   ".to_string(),
        "*/*".to_string(),
        "image/".to_string(),
    ];

    assert!(accept_extensions(&accept).is_empty());
}
