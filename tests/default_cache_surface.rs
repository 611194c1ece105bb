//! The process-wide cache surface.
//!
//! Everything lives in a single test: the default merger's cache is global
//! state, and parallel test threads mutating it would race.

use twmerge::{cache_clear, cache_get, cache_put, cache_resize, cache_size, merge, merge_with};

#[test]
fn default_cache_round_trip() {
    cache_clear();
    assert_eq!(cache_size(), 0);

    assert_eq!(merge("px-2 px-4"), "px-4");
    assert!(cache_size() >= 1);
    assert_eq!(cache_get("px-2 px-4").as_deref(), Some("px-4"));

    cache_put("manual-key", "manual-value");
    assert_eq!(cache_get("manual-key").as_deref(), Some("manual-value"));

    cache_resize(1);
    assert_eq!(cache_size(), 1);

    cache_resize(500);
    cache_clear();
    assert_eq!(cache_size(), 0);

    // merge_with against a custom merger does not touch the default cache.
    let merger = twmerge::Merger::new(twmerge::default_config()).unwrap();
    assert_eq!(merge_with("px-2 px-4", &merger), "px-4");
}
