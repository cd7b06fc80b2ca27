// Host-side tests for scroll-offset strategy selection.

use std::cell::Cell;

use backtop_core::{select_offset, OffsetProbe};

#[test]
fn first_defined_probe_wins() {
    let primary = || Some(42.0);
    let fallback = || Some(7.0);
    let probes: [OffsetProbe<'_>; 2] = [&primary, &fallback];

    assert_eq!(select_offset(&probes), Some(42.0));
}

#[test]
fn later_probes_cover_missing_primaries() {
    let a = || None;
    let b = || None;
    let c = || Some(12.0);
    let probes: [OffsetProbe<'_>; 3] = [&a, &b, &c];

    assert_eq!(select_offset(&probes), Some(12.0));
}

#[test]
fn no_probes_yield_nothing() {
    let probes: [OffsetProbe<'_>; 0] = [];
    assert_eq!(select_offset(&probes), None);
}

#[test]
fn all_undefined_yields_nothing() {
    let a = || None;
    let b = || None;
    let probes: [OffsetProbe<'_>; 2] = [&a, &b];

    assert_eq!(select_offset(&probes), None);
}

#[test]
fn selection_stops_at_first_hit() {
    let later_calls = Cell::new(0u32);
    let primary = || Some(3.0);
    let later = || {
        later_calls.set(later_calls.get() + 1);
        Some(99.0)
    };
    let probes: [OffsetProbe<'_>; 2] = [&primary, &later];

    assert_eq!(select_offset(&probes), Some(3.0));
    assert_eq!(later_calls.get(), 0);
}

#[test]
fn zero_is_a_defined_offset() {
    // A page scrolled to the very top must not fall through to a later probe.
    let primary = || Some(0.0);
    let fallback = || Some(500.0);
    let probes: [OffsetProbe<'_>; 2] = [&primary, &fallback];

    assert_eq!(select_offset(&probes), Some(0.0));
}
