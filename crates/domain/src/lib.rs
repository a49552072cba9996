// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod dates;
mod day;
mod error;
mod planning_window;
mod shift_window;
mod types;

#[cfg(test)]
mod tests;

pub use dates::parse_iso_date;
pub use day::DayOfWeek;
pub use error::DomainError;
pub use planning_window::{MAX_SPAN_DAYS, PlanningWindow};
pub use shift_window::{ShiftWindow, format_clock};
pub use types::{
    CargoLoad, Qualification, QualificationType, ScheduledShift, Warehouse, WarehouseId,
    WarehousePreference, WarehouseStaffing, Worker, WorkerId,
};
