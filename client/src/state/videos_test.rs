use super::*;
use crate::net::api::parse_video_list;

fn record(id: &str, title: &str, playback_ids: &[&str]) -> VideoRecord {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "playback_ids": playback_ids.iter().map(|p| serde_json::json!({ "id": p })).collect::<Vec<_>>(),
    }))
    .unwrap()
}

fn loaded(body: &str) -> VideoListState {
    let mut state = VideoListState::default();
    assert!(state.settle(&MountScope::new(), parse_video_list(body)));
    state
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn default_state_is_loading() {
    assert!(VideoListState::default().is_loading());
}

#[test]
fn settle_ok_replaces_loading_with_loaded() {
    let mut state = VideoListState::Loading;
    let videos = vec![record("1", "Cat", &["abc"])];
    assert!(state.settle(&MountScope::new(), Ok(videos.clone())));
    assert_eq!(state, VideoListState::Loaded(videos));
}

#[test]
fn settle_err_moves_to_failed_with_reason() {
    let mut state = VideoListState::Loading;
    assert!(state.settle(&MountScope::new(), Err(FetchError::Status(500))));
    assert_eq!(state, VideoListState::Failed("video list request failed: 500".to_owned()));
}

#[test]
fn settle_is_ignored_after_unmount() {
    let scope = MountScope::new();
    scope.release();
    let mut state = VideoListState::Loading;
    assert!(!state.settle(&scope, Ok(vec![record("1", "Cat", &["abc"])])));
    assert!(state.is_loading());
}

#[test]
fn settled_state_is_never_replaced() {
    let scope = MountScope::new();
    let mut state = VideoListState::Loading;
    assert!(state.settle(&scope, Ok(vec![record("1", "Cat", &["abc"])])));
    assert!(!state.settle(&scope, Err(FetchError::Timeout(15))));
    assert!(matches!(state, VideoListState::Loaded(ref v) if v.len() == 1));
}

// =============================================================
// Render projection
// =============================================================

#[test]
fn loading_projects_placeholder() {
    assert_eq!(GalleryView::project(&VideoListState::Loading), GalleryView::Placeholder);
}

#[test]
fn empty_response_projects_placeholder_not_error() {
    assert_eq!(GalleryView::project(&loaded("{}")), GalleryView::Placeholder);
    assert_eq!(GalleryView::project(&loaded(r#"{"data":[]}"#)), GalleryView::Placeholder);
}

#[test]
fn failure_projects_error_message() {
    let state = VideoListState::Failed("request failed: offline".to_owned());
    assert_eq!(GalleryView::project(&state), GalleryView::Error("request failed: offline".to_owned()));
}

#[test]
fn grid_preserves_response_order() {
    let state = VideoListState::Loaded(vec![
        record("a", "A", &["pa"]),
        record("b", "B", &["pb"]),
        record("c", "C", &["pc"]),
    ]);
    let GalleryView::Grid(tiles) = GalleryView::project(&state) else {
        panic!("expected grid");
    };
    let captions: Vec<&str> = tiles.iter().map(|t| t.caption.as_str()).collect();
    assert_eq!(captions, vec!["A", "B", "C"]);
}

#[test]
fn record_without_playback_id_yields_empty_grid() {
    let state = loaded(r#"{"data":[{"id":"x","title":"T","playback_ids":[]}]}"#);
    assert_eq!(GalleryView::project(&state), GalleryView::Grid(Vec::new()));
}

#[test]
fn unplayable_records_are_skipped_between_playable_ones() {
    let state = VideoListState::Loaded(vec![
        record("a", "A", &["pa"]),
        record("b", "B", &[]),
        record("c", "C", &["pc"]),
    ]);
    let GalleryView::Grid(tiles) = GalleryView::project(&state) else {
        panic!("expected grid");
    };
    let keys: Vec<&str> = tiles.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "c"]);
}

#[test]
fn tile_urls_use_first_playback_id() {
    let tile = VideoTileModel::from_record(&record("v", "Clip", &["pb123", "other"])).unwrap();
    assert_eq!(tile.thumbnail_src, "https://image.mux.com/pb123/thumbnail.jpg?time=5");
    assert_eq!(tile.href, "/play-video/pb123");
}

#[test]
fn single_cat_record_renders_one_tile() {
    let state = loaded(r#"{"data":[{"id":"1","title":"Cat","playback_ids":[{"id":"abc"}]}]}"#);
    assert_eq!(
        GalleryView::project(&state),
        GalleryView::Grid(vec![VideoTileModel {
            key: "1".to_owned(),
            href: "/play-video/abc".to_owned(),
            thumbnail_src: "https://image.mux.com/abc/thumbnail.jpg?time=5".to_owned(),
            caption: "Cat".to_owned(),
        }])
    );
}

#[test]
fn untitled_record_gets_empty_caption() {
    let record: VideoRecord =
        serde_json::from_value(serde_json::json!({ "id": "u", "playback_ids": [{ "id": "p" }] })).unwrap();
    assert_eq!(VideoTileModel::from_record(&record).unwrap().caption, "");
}
