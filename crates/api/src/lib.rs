// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The optimizer's service boundary as a transport-agnostic library.
//!
//! [`optimize_shifts`] accepts the wire-shaped snapshot, validates and
//! converts it, runs the engine, and always returns the response envelope:
//! any failure folds into `success = false` plus a descriptive message
//! instead of propagating. Transports stay thin; they deserialize the
//! request, call this function, and serialize the result.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod convert;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use convert::{
    convert_cargo_loads, convert_warehouses, convert_workers, resolve_days, shift_to_info,
    staffing_to_info,
};
pub use error::{ApiError, translate_domain_error};
pub use request_response::{
    CargoLoadInput, OptimizeShiftsRequest, OptimizeShiftsResponse, QualificationInput,
    ScheduledShiftInfo, WarehouseInput, WarehousePreferenceInput, WarehouseStaffingInfo,
    WorkerInput,
};

use shift_opt::OptimizeResult;
use shift_opt_domain::{CargoLoad, DayOfWeek, Warehouse, Worker};
use tracing::{info, warn};

/// Runs one optimization over a wire-shaped snapshot.
///
/// This function is total: malformed input never escapes as an error.
/// Conversion failures — unknown qualification types, bad day names,
/// unparseable dates, invalid planning windows, a missing day selection —
/// produce a failure envelope before the engine runs. On success the
/// message reports the scheduled shift count.
#[must_use]
pub fn optimize_shifts(request: &OptimizeShiftsRequest) -> OptimizeShiftsResponse {
    match run_pipeline(request) {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "Rejecting optimization request");
            OptimizeShiftsResponse::failure(format!("Error: {err}"))
        }
    }
}

/// Converts the snapshot, runs the engine, and shapes the response.
fn run_pipeline(request: &OptimizeShiftsRequest) -> Result<OptimizeShiftsResponse, ApiError> {
    let days: Vec<DayOfWeek> = resolve_days(request)?;
    let workers: Vec<Worker> = convert_workers(&request.workers)?;
    let warehouses: Vec<Warehouse> = convert_warehouses(&request.warehouses);
    let cargo_loads: Vec<CargoLoad> = convert_cargo_loads(&request.cargo_loads)?;

    let result: OptimizeResult = shift_opt::optimize(&workers, &warehouses, &cargo_loads, &days);

    info!(
        shifts = result.shifts.len(),
        staffing_records = result.staffing.len(),
        "Optimization request completed"
    );

    Ok(OptimizeShiftsResponse::completed(
        format!("Scheduled {} shifts", result.shifts.len()),
        result.shifts.iter().map(shift_to_info).collect(),
        result.staffing.iter().map(staffing_to_info).collect(),
    ))
}
