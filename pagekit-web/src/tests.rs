use crate::document::{logical_position, scroll_behavior};
use crate::start::is_still_parsing;

use pagekit_core::{ScrollBehavior, ScrollBlock, ScrollIntoViewOptions};
use web_sys::ScrollLogicalPosition;

#[test]
fn default_scroll_options_map_to_smooth_start() {
    let opts = ScrollIntoViewOptions::default();
    assert_eq!(
        scroll_behavior(opts.behavior),
        web_sys::ScrollBehavior::Smooth
    );
    assert_eq!(logical_position(opts.block), ScrollLogicalPosition::Start);
    assert_eq!(logical_position(opts.inline), ScrollLogicalPosition::Nearest);
}

#[test]
fn every_scroll_variant_has_a_web_counterpart() {
    assert_eq!(scroll_behavior(ScrollBehavior::Auto), web_sys::ScrollBehavior::Auto);
    assert_eq!(
        scroll_behavior(ScrollBehavior::Instant),
        web_sys::ScrollBehavior::Instant
    );
    assert_eq!(logical_position(ScrollBlock::Center), ScrollLogicalPosition::Center);
    assert_eq!(logical_position(ScrollBlock::End), ScrollLogicalPosition::End);
}

#[test]
fn only_loading_state_defers_initialization() {
    assert!(is_still_parsing("loading"));
    assert!(!is_still_parsing("interactive"));
    assert!(!is_still_parsing("complete"));
}
