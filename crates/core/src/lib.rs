// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shift optimization engine.
//!
//! [`optimize`] consumes a snapshot of workers, warehouses, cargo loads,
//! and requested weekdays, and produces shift assignments plus a staffing
//! report. The pipeline is requirement calculation, two greedy assignment
//! passes, and report generation.
//!
//! The engine is deterministic for a fixed input ordering and stateless
//! across calls: every invocation owns its booking ledger and shift list
//! and discards them on return, so concurrent callers need no locks as
//! long as each call receives its own arguments. It is not a constraint
//! solver: no backtracking, no global optimality, and no soft constraints
//! beyond the minimum-staffing thresholds.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assign;
mod ledger;
mod report;
mod requirements;

#[cfg(test)]
mod tests;

pub use ledger::BookingLedger;
pub use report::generate_staffing_reports;
pub use requirements::{Requirement, calculate_requirements};

use shift_opt_domain::{CargoLoad, DayOfWeek, ScheduledShift, Warehouse, WarehouseStaffing, Worker};
use tracing::info;

/// The outcome of one optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeResult {
    /// Every shift booked, in assignment order.
    pub shifts: Vec<ScheduledShift>,
    /// One staffing record per requested (warehouse, day) pair.
    pub staffing: Vec<WarehouseStaffing>,
}

/// Runs the full optimization pipeline over one snapshot.
///
/// Requirements are computed per (day, warehouse), minimum staffing is
/// assigned first, cargo-driven shortfalls are topped up second, and the
/// staffing report compares the result against the requirements. A worker
/// receives at most one shift per day across all warehouses.
///
/// Under-staffing never fails the run; it is reported through
/// `is_fully_staffed` on the affected records.
///
/// # Arguments
///
/// * `workers` - The worker roster, in caller order (ties resolve to the
///   earlier worker)
/// * `warehouses` - The warehouses to staff
/// * `cargo_loads` - Cargo loads driving dynamic requirements
/// * `days` - The weekdays to schedule
#[must_use]
pub fn optimize(
    workers: &[Worker],
    warehouses: &[Warehouse],
    cargo_loads: &[CargoLoad],
    days: &[DayOfWeek],
) -> OptimizeResult {
    info!(
        workers = workers.len(),
        warehouses = warehouses.len(),
        cargo_loads = cargo_loads.len(),
        days = days.len(),
        "Starting shift optimization"
    );

    let mut requirements: Vec<Requirement> =
        calculate_requirements(warehouses, cargo_loads, days);
    let mut ledger: BookingLedger = BookingLedger::new(days);
    let mut shifts: Vec<ScheduledShift> = Vec::new();

    assign::assign_minimum_staff(workers, &mut requirements, &mut ledger, &mut shifts);
    assign::assign_additional_staff(workers, &mut requirements, &mut ledger, &mut shifts);

    let staffing: Vec<WarehouseStaffing> = generate_staffing_reports(&requirements);

    info!(shifts = shifts.len(), "Optimization completed");

    OptimizeResult { shifts, staffing }
}
