use super::*;

#[tokio::test]
async fn new_state_has_no_viewers() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.viewer_count().await, 0);
    assert_eq!(state.config.port, 5000);
}

#[tokio::test]
async fn clones_share_the_viewer_registry() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    let (id, _rx) = test_helpers::attach_viewer(&clone, 4).await;

    assert_eq!(state.viewer_count().await, 1);
    assert!(state.viewers.read().await.contains_key(&id));
}
