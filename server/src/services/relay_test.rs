use super::*;
use crate::state::test_helpers;

fn decode(text: &FrameText) -> Frame {
    frames::decode_frame(text).expect("relay emits valid frames")
}

#[tokio::test]
async fn empty_username_is_rejected_without_broadcasting() {
    let state = test_helpers::test_app_state();
    let (_id, mut rx) = test_helpers::attach_viewer(&state, 4).await;

    let err = notify(&state, "").await.unwrap_err();
    assert!(matches!(err, RelayError::MissingUsername));
    assert_eq!(err.to_string(), "Username is required");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn whitespace_username_is_relayed_verbatim() {
    let state = test_helpers::test_app_state();
    let (_id, mut rx) = test_helpers::attach_viewer(&state, 4).await;

    assert_eq!(notify(&state, "  ").await.unwrap(), 1);
    assert_eq!(decode(&rx.recv().await.unwrap()).username(), Some("  "));
}

#[tokio::test]
async fn notify_with_no_viewers_succeeds() {
    let state = test_helpers::test_app_state();
    assert_eq!(notify(&state, "Ryuk").await.unwrap(), 0);
}

#[tokio::test]
async fn every_viewer_receives_the_same_frame() {
    let state = test_helpers::test_app_state();
    let (_a, mut rx_a) = test_helpers::attach_viewer(&state, 4).await;
    let (_b, mut rx_b) = test_helpers::attach_viewer(&state, 4).await;

    assert_eq!(notify(&state, "Light Yagami").await.unwrap(), 2);

    let a = decode(&rx_a.recv().await.unwrap());
    let b = decode(&rx_b.recv().await.unwrap());
    assert_eq!(a.event, frames::EVENT_NEW_SUBSCRIBER);
    assert_eq!(a.username(), Some("Light Yagami"));
    assert_eq!(a, b);
}

#[tokio::test]
async fn multi_line_username_is_relayed_as_one_payload() {
    let state = test_helpers::test_app_state();
    let (_id, mut rx) = test_helpers::attach_viewer(&state, 4).await;

    notify(&state, "Near\nMello").await.unwrap();
    assert_eq!(decode(&rx.recv().await.unwrap()).username(), Some("Near\nMello"));
}

#[tokio::test]
async fn closed_viewers_are_pruned() {
    let state = test_helpers::test_app_state();
    let (_live, mut live_rx) = test_helpers::attach_viewer(&state, 4).await;
    let (gone, gone_rx) = test_helpers::attach_viewer(&state, 4).await;
    drop(gone_rx);

    assert_eq!(notify(&state, "Misa Amane").await.unwrap(), 1);
    assert!(!state.viewers.read().await.contains_key(&gone));
    assert_eq!(state.viewer_count().await, 1);
    assert!(live_rx.recv().await.is_some());
}

#[tokio::test]
async fn full_viewer_misses_the_frame_but_stays_registered() {
    let state = test_helpers::test_app_state();
    let (slow, mut slow_rx) = test_helpers::attach_viewer(&state, 1).await;

    assert_eq!(notify(&state, "first").await.unwrap(), 1);
    assert_eq!(notify(&state, "second").await.unwrap(), 0);

    assert!(state.viewers.read().await.contains_key(&slow));
    assert_eq!(decode(&slow_rx.recv().await.unwrap()).username(), Some("first"));
    assert!(slow_rx.try_recv().is_err());
}

#[tokio::test]
async fn register_and_unregister_track_viewers() {
    let state = test_helpers::test_app_state();
    let (id, _rx) = register(&state).await;
    assert_eq!(state.viewer_count().await, 1);

    unregister(&state, id).await;
    assert_eq!(state.viewer_count().await, 0);

    unregister(&state, id).await;
    assert_eq!(state.viewer_count().await, 0);
}
