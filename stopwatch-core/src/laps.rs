use core::fmt;

use crate::format::format;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LapEntry {
    index: u32,
    elapsed_at_lap_ms: u64,
}

impl LapEntry {
    /// 1-based position in the log.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn elapsed_at_lap_ms(&self) -> u64 {
        self.elapsed_at_lap_ms
    }
}

/// Renders as "Lap N: HH:MM:SS.mmm"
impl fmt::Display for LapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lap {}: {}", self.index, format(self.elapsed_at_lap_ms))
    }
}

/// Chronological lap log. Entries are append-only until `clear`.
#[derive(Default, Debug)]
pub struct LapRecorder {
    entries: Vec<LapEntry>,
}

impl LapRecorder {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn record_lap(&mut self, elapsed_ms: u64) -> LapEntry {
        let entry = LapEntry {
            index: next_index(self.entries.len()),
            elapsed_at_lap_ms: elapsed_ms,
        };
        self.entries.push(entry);
        entry
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LapEntry] {
        &self.entries
    }

    pub fn entries_newest_first(
        &self,
    ) -> impl DoubleEndedIterator<Item = &LapEntry> + ExactSizeIterator + '_ {
        self.entries.iter().rev()
    }

    /// Time between each lap and the one before it, oldest first.
    pub fn splits(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        let mut previous = 0u64;
        self.entries.iter().map(move |entry| {
            let split = entry.elapsed_at_lap_ms.saturating_sub(previous);
            previous = entry.elapsed_at_lap_ms;
            (entry.index, split)
        })
    }

    pub fn latest(&self) -> Option<&LapEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Saturates at `u32::MAX` rather than wrapping back to a used index.
fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion() {
        let mut laps = LapRecorder::new();
        for (i, ms) in [300u64, 900, 1_200, 5_000].iter().enumerate() {
            let entry = laps.record_lap(*ms);
            assert_eq!(entry.index(), i as u32 + 1);
            assert_eq!(entry.elapsed_at_lap_ms(), *ms);
        }
        let indices: Vec<u32> = laps.entries().iter().map(|e| e.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(laps.latest().map(|e| e.index()), Some(4));
    }

    #[test]
    fn test_newest_first_is_reverse() {
        let mut laps = LapRecorder::new();
        laps.record_lap(1_000);
        laps.record_lap(2_000);
        laps.record_lap(3_500);

        let newest: Vec<LapEntry> = laps.entries_newest_first().copied().collect();
        let mut oldest: Vec<LapEntry> = laps.entries().to_vec();
        oldest.reverse();
        assert_eq!(newest, oldest);
        assert_eq!(newest[0].index(), 3);
        // storage order untouched
        assert_eq!(laps.entries()[0].index(), 1);
    }

    #[test]
    fn test_clear_restarts_numbering() {
        let mut laps = LapRecorder::new();
        laps.record_lap(10);
        laps.record_lap(20);
        laps.clear();
        assert!(laps.is_empty());
        assert_eq!(laps.entries_newest_first().count(), 0);
        assert_eq!(laps.record_lap(30).index(), 1);
    }

    #[test]
    fn test_splits() {
        let mut laps = LapRecorder::new();
        laps.record_lap(5_000);
        laps.record_lap(8_000);
        laps.record_lap(8_000);
        let splits: Vec<(u32, u64)> = laps.splits().collect();
        assert_eq!(splits, vec![(1, 5_000), (2, 3_000), (3, 0)]);
    }

    #[test]
    fn test_next_index_saturates() {
        assert_eq!(next_index(0), 1);
        assert_eq!(next_index(41), 42);
        assert_eq!(next_index(u32::MAX as usize - 1), u32::MAX);
        assert_eq!(next_index(u32::MAX as usize), u32::MAX);
        assert_eq!(next_index(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_display() {
        let mut laps = LapRecorder::new();
        let entry = laps.record_lap(1_500);
        assert_eq!(entry.to_string(), "Lap 1: 00:00:01.500");
    }
}
