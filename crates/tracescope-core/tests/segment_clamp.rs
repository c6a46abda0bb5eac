// Tests for the segment interval type and its clamp behavior.

use proptest::prelude::*;
use tracescope_core::Segment;

#[test]
fn test_clamp_inside_range_is_identity() {
    let seg = Segment::new(0.0, 100.0);
    assert_eq!(seg.clamp(0.0), 0.0);
    assert_eq!(seg.clamp(42.5), 42.5);
    assert_eq!(seg.clamp(100.0), 100.0);
}

#[test]
fn test_clamp_below_range_returns_lower_bound() {
    let seg = Segment::new(10.0, 20.0);
    assert_eq!(seg.clamp(9.999), 10.0);
    assert_eq!(seg.clamp(-1e12), 10.0);
}

#[test]
fn test_clamp_above_range_returns_upper_bound() {
    let seg = Segment::new(10.0, 20.0);
    assert_eq!(seg.clamp(20.001), 20.0);
    assert_eq!(seg.clamp(1e12), 20.0);
}

#[test]
fn test_clamp_inverted_range_collapses_to_from() {
    // Degenerate but representable: max(from, min(x, to)) with from > to.
    let seg = Segment::new(20.0, 10.0);
    assert_eq!(seg.clamp(0.0), 20.0);
    assert_eq!(seg.clamp(15.0), 20.0);
    assert_eq!(seg.clamp(30.0), 20.0);
}

#[test]
fn test_contains_and_length() {
    let seg = Segment::new(-5.0, 5.0);
    assert!(seg.contains(-5.0));
    assert!(seg.contains(0.0));
    assert!(seg.contains(5.0));
    assert!(!seg.contains(5.1));
    assert_eq!(seg.length(), 10.0);
}

#[test]
fn test_segment_serde_round_trip() {
    let seg = Segment::new(12.5, 980.0);
    let json = serde_json::to_string(&seg).unwrap();
    let back: Segment = serde_json::from_str(&json).unwrap();
    assert_eq!(seg, back);
}

proptest! {
    #[test]
    fn test_clamp_result_always_within_well_formed_range(
        x in -1e9f64..1e9,
        lo in -1e6f64..1e6,
        len in 0.0f64..1e6,
    ) {
        let seg = Segment::new(lo, lo + len);
        let clamped = seg.clamp(x);
        prop_assert!(clamped >= seg.from);
        prop_assert!(clamped <= seg.to);
    }

    #[test]
    fn test_clamp_picks_nearest_bound_or_identity(
        x in -1e9f64..1e9,
        lo in -1e6f64..1e6,
        len in 0.0f64..1e6,
    ) {
        let seg = Segment::new(lo, lo + len);
        let clamped = seg.clamp(x);
        if seg.contains(x) {
            prop_assert_eq!(clamped, x);
        } else if x < seg.from {
            prop_assert_eq!(clamped, seg.from);
        } else {
            prop_assert_eq!(clamped, seg.to);
        }
    }
}
