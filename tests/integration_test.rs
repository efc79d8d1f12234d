//! Integration tests for docseek
//!
//! These tests drive the public API end to end against a mock backend:
//! search, normalization, tag listing and tag mutation.

use docseek::api::{ApiError, MockBackend, SearchApi};
use docseek::query::SearchQuery;
use docseek::stats::StatsKind;
use docseek::tags::TagStyle;
use serde_json::{Value, json};

/// Helper building a search response from `_source` objects
fn search_response(sources: Vec<Value>) -> Value {
    let hits: Vec<Value> = sources
        .into_iter()
        .enumerate()
        .map(|(i, source)| {
            json!({
                "_index": "docs",
                "_id": format!("id{i}"),
                "_score": 1.0,
                "_source": source,
            })
        })
        .collect();
    let total = hits.len();

    json!({"took": 4, "hits": {"total": {"value": total}, "hits": hits}})
}

fn media_library() -> Value {
    search_response(vec![
        json!({
            "path": "movies",
            "name": "trailer",
            "extension": "mkv",
            "index": "aaaa1111",
            "mime": "video/x-matroska",
            "videoc": "h264",
            "thumbnail": "640,360"
        }),
        json!({
            "path": "movies",
            "name": "clip",
            "extension": "mp4",
            "index": "aaaa1111",
            "mime": "video/mp4",
            "videoc": "h264",
            "tag": ["favorite.#ffcc00"]
        }),
        json!({
            "path": "",
            "name": "cover",
            "extension": "png",
            "index": "aaaa1111",
            "mime": "image/png",
            "videoc": "png",
            "width": 800,
            "height": 600,
            "parent": "0f0f0f"
        }),
        json!({
            "path": "music",
            "name": "song",
            "extension": "flac",
            "index": "aaaa1111",
            "mime": "audio/flac",
            "audioc": "flac"
        }),
    ])
}

#[test]
fn test_search_normalizes_media_library() {
    let api = SearchApi::with_backend(MockBackend::new().on_post("es", media_library()));
    let result = api.search(&SearchQuery::new()).unwrap();
    let hits = &result.hits.hits;

    assert_eq!(result.hits.total.value, 4);

    // mkv container is not playable in a browser
    assert!(hits[0].props.is_video);
    assert!(!hits[0].props.is_playable_video);
    assert!(hits[0].props.has_thumbnail);
    assert_eq!((hits[0].props.tn_w, hits[0].props.tn_h), (Some(640), Some(360)));

    assert!(hits[1].props.is_playable_video);
    assert_eq!(hits[1].tags.len(), 2);
    assert_eq!(hits[1].tags[0].style, TagStyle::Video);
    assert_eq!(hits[1].tags[1].text, "favorite");
    assert_eq!(hits[1].tags[1].fg, "#000");

    // extracted from an archive: an image, but not shown full size
    assert!(hits[2].props.is_sub_document);
    assert!(hits[2].props.is_image);
    assert!(!hits[2].props.is_playable_image);
    assert_eq!(hits[2].full_path(), "cover.png");

    assert!(hits[3].props.is_audio);
    assert_eq!(hits[3].tags[0].style, TagStyle::Audio);
}

#[test]
fn test_path_md5_matches_full_path() {
    let api = SearchApi::with_backend(MockBackend::new().on_post("es", media_library()));
    let result = api.es_query(&json!({"query": {"match_all": {}}})).unwrap();

    for hit in &result.hits.hits {
        assert_eq!(hit.path_md5, format!("{:x}", md5::compute(hit.full_path())));
    }
}

#[test]
fn test_tag_roundtrip_through_backend() {
    let clip = search_response(vec![json!({
        "path": "movies",
        "name": "clip",
        "extension": "mp4",
        "index": "aaaa1111",
        "mime": "video/mp4",
        "tag": ["favorite.#ffcc00"]
    })]);
    let mock = MockBackend::new()
        .on_post("es", clip)
        .on_post("tag/aaaa1111", Value::Null);
    let api = SearchApi::with_backend(mock);

    let hit = api.get_hit("id0").unwrap();
    assert_eq!(hit.path_md5, format!("{:x}", md5::compute("movies/clip.mp4")));
    api.save_tag("watched.#00ff00", &hit).unwrap();
    api.delete_tag("favorite.#ffcc00", &hit).unwrap();

    let requests = api.backend().requests();
    let tag_requests: Vec<_> = requests.iter().filter(|r| r.path == "tag/aaaa1111").collect();
    assert_eq!(tag_requests.len(), 2);
    assert_eq!(tag_requests[0].body.as_ref().unwrap()["delete"], json!(false));
    assert_eq!(tag_requests[1].body.as_ref().unwrap()["name"], json!("favorite.#ffcc00"));
    assert_eq!(
        tag_requests[1].body.as_ref().unwrap()["path_md5"],
        json!(hit.path_md5)
    );
}

#[test]
fn test_backend_error_is_reported() {
    let api = SearchApi::with_backend(MockBackend::new().on_status("POST", "es", 502, "bad gateway"));

    match api.search(&SearchQuery::new()) {
        Err(ApiError::Status { status, body, .. }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[test]
fn test_malformed_response_is_reported() {
    let api = SearchApi::with_backend(MockBackend::new().on_post("es", json!({"hits": {"hits": "nope"}})));
    assert!(matches!(api.search(&SearchQuery::new()), Err(ApiError::Json(_))));
}

#[test]
fn test_tag_listing_collapses_colors() {
    let mock = MockBackend::new().on_post(
        "es",
        json!({
            "took": 1,
            "hits": {"total": 0, "hits": []},
            "aggregations": {"tags": {"buckets": [
                {"key": "work.#0000ff", "doc_count": 3},
                {"key": "work.#ff0000", "doc_count": 1},
                {"key": "archive", "doc_count": 9}
            ]}}
        }),
    );
    let tags = SearchApi::with_backend(mock).get_tags().unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].id, "archive");
    assert!(!tags[0].is_leaf);
    assert_eq!(tags[1].id, "work");
    assert_eq!(tags[1].color.as_deref(), Some("#0000ff"));
}

#[test]
fn test_stats_urls_use_base_url() {
    let api = SearchApi::with_backend(MockBackend::with_base_url("http://search.local:4090/"));

    assert_eq!(
        api.get_treemap_csv_url("aaaa1111"),
        "http://search.local:4090/s/aaaa1111/1"
    );
    assert_eq!(
        api.stats_url("aaaa1111", StatsKind::Size),
        "http://search.local:4090/s/aaaa1111/3"
    );
}
