//! Counting the cold readings
//!
//! A reading is cold when it is strictly below zero. The input is read as a
//! count N followed by N readings; anything after the N-th reading is left
//! unread.
//!
//! Two entry points are provided:
//!
//! - [`count_from`] - reads and counts in a single pass, keeping nothing
//! - [`ReadingList::read_from`] - materializes the readings, then
//!   [`ReadingList::negative_count`] counts them

use std::io::BufRead;

use log::debug;

use crate::error::InputError;
use crate::scanner::Scanner;

const COUNT: &str = "reading count";

/// Whether a reading is below zero
#[must_use]
pub const fn is_cold(reading: i64) -> bool {
    reading < 0
}

/// Running number of cold readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NegativeCount(usize);

impl NegativeCount {
    /// Start at zero
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Account for one reading
    pub const fn observe(&mut self, reading: i64) {
        if is_cold(reading) {
            self.0 += 1;
        }
    }

    /// Current count
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Count the cold readings in a sequence
#[must_use]
pub fn count_negatives<I>(readings: I) -> usize
where
    I: IntoIterator<Item = i64>,
{
    let mut count = NegativeCount::new();
    for reading in readings {
        count.observe(reading);
    }
    count.get()
}

/// Outcome of a counting pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// Number of readings consumed (the declared N)
    pub readings: usize,
    /// Number of those readings below zero
    pub negatives: usize,
}

/// Read N and then N readings, counting the cold ones as they arrive
pub fn count_from<R: BufRead>(scan: &mut Scanner<R>) -> Result<Tally, InputError> {
    let n: usize = scan.parse_next(COUNT)?;
    debug!("expecting {n} reading(s)");

    let mut count = NegativeCount::new();
    for i in 1..=n {
        count.observe(scan.parse_next_with(|| reading_label(i, n))?);
    }

    let tally = Tally {
        readings: n,
        negatives: count.get(),
    };
    debug!("{} of {} reading(s) below zero", tally.negatives, tally.readings);
    Ok(tally)
}

fn reading_label(i: usize, n: usize) -> String {
    format!("reading {i} of {n}")
}

/// The readings of one input, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingList(Vec<i64>);

impl ReadingList {
    /// Read N and then exactly N readings
    pub fn read_from<R: BufRead>(scan: &mut Scanner<R>) -> Result<Self, InputError> {
        let n: usize = scan.parse_next(COUNT)?;
        // N is read from the input, so no preallocation
        let mut readings = Vec::new();
        for i in 1..=n {
            readings.push(scan.parse_next_with(|| reading_label(i, n))?);
        }
        Ok(Self(readings))
    }

    /// Number of cold readings
    #[must_use]
    pub fn negative_count(&self) -> usize {
        count_negatives(self.0.iter().copied())
    }

    /// Number of readings
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The readings as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl From<Vec<i64>> for ReadingList {
    fn from(readings: Vec<i64>) -> Self {
        Self(readings)
    }
}
