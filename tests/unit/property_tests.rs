/*!
 * Property based tests for timecodes and block merging
 */

use proptest::prelude::*;
use std::cmp::Ordering;

use srtblocks::block_merger::merge_blocks;
use srtblocks::subtitle_processor::Cue;
use srtblocks::timecode::{DecimalTimecode, FrameTimecode, Timecode};

// Values below 100 hours keep the two digit hour field
const MAX_MILLIS: i64 = 100 * 3600 * 1000 - 1;

fn decimal() -> impl Strategy<Value = DecimalTimecode> {
    (0..=MAX_MILLIS).prop_map(|ms| DecimalTimecode::from_units(ms).unwrap())
}

// Same hour bound at the highest supported frame rate
const MAX_FRAMES: i64 = 100 * 3600 * 60 - 1;

fn frame_rate() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![24u32, 25, 30, 50, 60])
}

fn cue_durations() -> impl Strategy<Value = Vec<(u32, u32)>> {
    // (gap before cue, cue length) in milliseconds
    prop::collection::vec((0u32..5_000, 0u32..20_000), 0..40)
}

fn build_cues(spans: &[(u32, u32)]) -> Vec<Cue> {
    let mut cursor: i64 = 0;
    spans
        .iter()
        .enumerate()
        .map(|(i, (gap, len))| {
            let begin = cursor + i64::from(*gap);
            let end = begin + i64::from(*len);
            cursor = end;
            Cue::new(
                i + 1,
                DecimalTimecode::from_units(begin).unwrap(),
                DecimalTimecode::from_units(end).unwrap(),
                format!("cue {}", i + 1),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn decimal_string_roundtrip(tc in decimal()) {
        prop_assert_eq!(DecimalTimecode::from_string(&tc.to_string()).unwrap(), tc);
    }

    #[test]
    fn frame_string_roundtrip(
        whole_seconds in 0i64..(99 * 3600),
        frame in 0i64..24,
        fps in frame_rate()
    ) {
        let tc = FrameTimecode::from_units(whole_seconds * i64::from(fps) + frame, fps).unwrap();
        prop_assert_eq!(FrameTimecode::from_string(&tc.to_string(), fps).unwrap(), tc);
    }

    #[test]
    fn units_roundtrip(n in 0i64..i64::from(u32::MAX)) {
        prop_assert_eq!(DecimalTimecode::from_units(n).unwrap().to_units(), n);
        prop_assert_eq!(FrameTimecode::from_units(n, 25).unwrap().to_units(), n);
    }

    #[test]
    fn ordering_matches_units(a in decimal(), b in decimal()) {
        let expected = a.to_units().cmp(&b.to_units());
        prop_assert_eq!(a.cmp(&b), expected);
        prop_assert_eq!(a.try_cmp(&b).unwrap(), expected);
        prop_assert_eq!(a == b, expected == Ordering::Equal);
    }

    #[test]
    fn add_then_sub_is_identity(a in decimal(), b in decimal()) {
        let sum = a.checked_add(&b).unwrap();
        prop_assert_eq!(sum.checked_sub(&b).unwrap(), a);
    }

    #[test]
    fn frame_ordering_matches_units(fps in frame_rate(), a in 0..=MAX_FRAMES, b in 0..=MAX_FRAMES) {
        let left = FrameTimecode::from_units(a, fps).unwrap();
        let right = FrameTimecode::from_units(b, fps).unwrap();
        let expected = a.cmp(&b);

        prop_assert_eq!(left.try_cmp(&right).unwrap(), expected);
        prop_assert_eq!(left.partial_cmp(&right), Some(expected));
        prop_assert_eq!(left < right, expected == Ordering::Less);
        prop_assert_eq!(left > right, expected == Ordering::Greater);
        prop_assert_eq!(left == right, expected == Ordering::Equal);
    }

    #[test]
    fn frame_add_then_sub_is_identity(fps in frame_rate(), a in 0..=MAX_FRAMES, b in 0..=MAX_FRAMES) {
        let left = FrameTimecode::from_units(a, fps).unwrap();
        let right = FrameTimecode::from_units(b, fps).unwrap();

        let sum = left.checked_add(&right).unwrap();
        prop_assert_eq!(sum.fps(), fps);
        prop_assert_eq!(sum.checked_sub(&right).unwrap(), left);
    }

    #[test]
    fn rounding_lands_within_half_a_second(fps in frame_rate(), n in 0..=MAX_FRAMES) {
        let tc = FrameTimecode::from_units(n, fps).unwrap();
        let rounded = tc.round_to_seconds().unwrap();
        let fps_units = i64::from(fps);

        prop_assert_eq!(rounded.to_units() % fps_units, 0);
        prop_assert!((rounded.to_units() - n).abs() * 2 <= fps_units);
        prop_assert_eq!(rounded.fps(), fps);
    }

    #[test]
    fn merged_blocks_meet_target(spans in cue_durations(), target_ms in 0i64..60_000) {
        let cues = build_cues(&spans);
        let input_len = cues.len();
        let target = DecimalTimecode::from_units(target_ms).unwrap();

        let merged = merge_blocks(cues, target).unwrap();

        prop_assert!(merged.len() <= input_len);
        for (i, block) in merged.iter().enumerate() {
            prop_assert_eq!(block.index, i);
        }
        if let Some((_, rest)) = merged.split_last() {
            for block in rest {
                prop_assert!(block.duration().unwrap() >= target);
            }
        }
    }
}
