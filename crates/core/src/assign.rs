// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Preference-ordered greedy worker assignment.
//!
//! Assignment runs in two passes over the requirement list. Pass one fills
//! each warehouse-day up to its static minimums; pass two tops up whatever
//! shortfall the cargo-driven totals leave. Both passes work through the
//! categories in the fixed order basic worker, cargo driver, engineer, and
//! share one candidate ordering per (day, warehouse).
//!
//! Under-staffing is not an error: when fewer eligible workers exist than
//! requested, the pass books what it can and moves on. The gap surfaces in
//! the staffing report, never as a failure.

use crate::ledger::BookingLedger;
use crate::requirements::Requirement;
use shift_opt_domain::{
    DayOfWeek, QualificationType, ScheduledShift, ShiftWindow, WarehouseId, Worker,
};
use tracing::debug;

/// Preference priority assigned to workers without an entry for the
/// warehouse under consideration. Sorts after any real priority.
const UNRANKED_PRIORITY: u32 = 9_999;
/// Preference distance paired with [`UNRANKED_PRIORITY`].
const UNRANKED_DISTANCE: f64 = 9_999.0;

/// Orders workers by their preference for one warehouse.
///
/// Workers with a preference entry contribute its (priority, distance);
/// the rest sort with the unranked sentinels. The sort is stable and
/// ascending, so lower priority wins, distance breaks priority ties, and
/// input order breaks exact ties.
pub(crate) fn sort_by_preference<'a>(
    workers: &'a [Worker],
    warehouse_id: &WarehouseId,
) -> Vec<&'a Worker> {
    let mut ranked: Vec<(&Worker, u32, f64)> = workers
        .iter()
        .map(|worker| {
            worker.preference_for(warehouse_id).map_or(
                (worker, UNRANKED_PRIORITY, UNRANKED_DISTANCE),
                |preference| (worker, preference.priority, preference.distance),
            )
        })
        .collect();

    ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.2.total_cmp(&b.2)));

    ranked.into_iter().map(|(worker, _, _)| worker).collect()
}

/// Books up to `requested` eligible workers from `candidates` into one
/// (day, warehouse, category) slot.
///
/// Workers already booked for the day and workers lacking the category's
/// qualification are skipped. Every booking appends a shift in the day
/// window, marks the worker in the ledger, and advances the requirement's
/// scheduled counter.
#[allow(clippy::too_many_arguments)]
fn assign_category(
    candidates: &[&Worker],
    day: DayOfWeek,
    warehouse_id: &WarehouseId,
    category: QualificationType,
    requested: u32,
    requirement: &mut Requirement,
    ledger: &mut BookingLedger,
    shifts: &mut Vec<ScheduledShift>,
) {
    if requested == 0 {
        return;
    }

    let mut assigned: u32 = 0;

    for worker in candidates {
        if ledger.is_booked(day, &worker.id) {
            continue;
        }
        if !worker.has_qualification(category) {
            continue;
        }

        shifts.push(ScheduledShift::new(
            worker.id.clone(),
            warehouse_id.clone(),
            day,
            ShiftWindow::DAY,
        ));
        ledger.book(day, worker.id.clone());
        requirement.record_assignment(category);

        assigned += 1;
        if assigned >= requested {
            break;
        }
    }

    if assigned < requested {
        debug!(
            day = %day,
            warehouse_id = %warehouse_id,
            category = %category,
            requested,
            assigned,
            "Not enough eligible workers to fill request"
        );
    }
}

/// Pass one: staff every warehouse-day up to its static minimums.
pub(crate) fn assign_minimum_staff(
    workers: &[Worker],
    requirements: &mut [Requirement],
    ledger: &mut BookingLedger,
    shifts: &mut Vec<ScheduledShift>,
) {
    debug!("Assigning minimum staff requirements");

    for requirement in requirements.iter_mut() {
        let warehouse_id: WarehouseId = requirement.warehouse_id.clone();
        let day: DayOfWeek = requirement.day;
        let candidates: Vec<&Worker> = sort_by_preference(workers, &warehouse_id);

        for category in QualificationType::ALL {
            let requested: u32 = requirement.minimum_for(category);
            assign_category(
                &candidates,
                day,
                &warehouse_id,
                category,
                requested,
                requirement,
                ledger,
                shifts,
            );
        }
    }
}

/// Pass two: top up each category to its cargo-driven total.
///
/// The requested count is the shortfall pass one left behind, so a
/// category already at its total books nobody here.
pub(crate) fn assign_additional_staff(
    workers: &[Worker],
    requirements: &mut [Requirement],
    ledger: &mut BookingLedger,
    shifts: &mut Vec<ScheduledShift>,
) {
    debug!("Assigning additional staff for cargo requirements");

    for requirement in requirements.iter_mut() {
        let warehouse_id: WarehouseId = requirement.warehouse_id.clone();
        let day: DayOfWeek = requirement.day;
        let candidates: Vec<&Worker> = sort_by_preference(workers, &warehouse_id);

        for category in QualificationType::ALL {
            let requested: u32 = requirement.shortfall_for(category);
            assign_category(
                &candidates,
                day,
                &warehouse_id,
                category,
                requested,
                requirement,
                ledger,
                shifts,
            );
        }
    }
}
