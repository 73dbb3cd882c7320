/// A closed interval `[start, end]` of keysyms or key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    pub start: u32,
    pub end: u32,
}

/// Disjoint closed intervals kept in insertion order, newest first.
///
/// [`KeyRangeSet::insert`] is first-match: the scan stops at the first range
/// that already contains the value or that the value extends by one, and a
/// value touching nothing is prepended as a singleton. Ranges are never
/// re-coalesced after the fact, so an insertion can leave two ranges touching
/// (or, through an extension that shadows a later range's containment check,
/// overlapping) without merging them. [`KeyRangeSet::contains`] scans every
/// range and stays correct either way. Keymap keypad/numlock rows arrive in
/// ascending runs, which this policy compresses into one range apiece.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyRangeSet {
    ranges: Vec<KeyRange>,
}

impl KeyRangeSet {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    pub fn ranges(&self) -> &[KeyRange] {
        &self.ranges
    }

    /// Adds `value` to the set, extending the first range it touches.
    pub fn insert(&mut self, value: u32) {
        for range in &mut self.ranges {
            if value >= range.start && value <= range.end {
                return;
            }
            if range.start > 0 && value == range.start - 1 {
                range.start = value;
                return;
            }
            if value > range.end && value - range.end == 1 {
                range.end = value;
                return;
            }
        }
        self.ranges.insert(
            0,
            KeyRange {
                start: value,
                end: value,
            },
        );
    }

    pub fn contains(&self, value: u32) -> bool {
        self.ranges
            .iter()
            .any(|range| value >= range.start && value <= range.end)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_inserted_value_is_contained(values in proptest::collection::vec(0u32..200, 0..64)) {
            let mut set = KeyRangeSet::new();
            for &v in &values {
                set.insert(v);
            }
            for &v in &values {
                prop_assert!(set.contains(v));
            }
        }

        #[test]
        fn ranges_are_well_formed_and_bounded(values in proptest::collection::vec(0u32..200, 0..64)) {
            let mut set = KeyRangeSet::new();
            for &v in &values {
                set.insert(v);
            }
            prop_assert!(set.ranges().len() <= values.len());
            for range in set.ranges() {
                prop_assert!(range.start <= range.end);
            }
        }
    }
}
