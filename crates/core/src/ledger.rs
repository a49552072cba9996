// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_opt_domain::{DayOfWeek, WorkerId};
use std::collections::{HashMap, HashSet};

/// The per-run record of which workers are already booked on which days.
///
/// A worker appears in a day's set the moment they receive any shift that
/// day, across every warehouse and category, and cannot receive a second
/// one. The ledger lives for a single `optimize` call; there is no state
/// between runs.
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    /// Booked worker ids per day.
    booked: HashMap<DayOfWeek, HashSet<WorkerId>>,
}

impl BookingLedger {
    /// Creates an empty ledger covering the requested days.
    #[must_use]
    pub fn new(days: &[DayOfWeek]) -> Self {
        Self {
            booked: days.iter().map(|&day| (day, HashSet::new())).collect(),
        }
    }

    /// Checks whether a worker already holds a shift on a day.
    #[must_use]
    pub fn is_booked(&self, day: DayOfWeek, worker_id: &WorkerId) -> bool {
        self.booked
            .get(&day)
            .is_some_and(|workers| workers.contains(worker_id))
    }

    /// Records a worker as booked for a day.
    pub fn book(&mut self, day: DayOfWeek, worker_id: WorkerId) {
        self.booked.entry(day).or_default().insert(worker_id);
    }

    /// Returns how many workers are booked on a day.
    #[must_use]
    pub fn booked_count(&self, day: DayOfWeek) -> usize {
        self.booked.get(&day).map_or(0, HashSet::len)
    }
}
