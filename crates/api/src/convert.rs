// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between wire DTOs and typed domain values.
//!
//! All input-shape validation happens here, before the engine runs:
//! qualification types, day names, and dates parse into their closed
//! domain forms or the whole request is rejected.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    CargoLoadInput, OptimizeShiftsRequest, ScheduledShiftInfo, WarehouseInput,
    WarehouseStaffingInfo, WorkerInput,
};
use shift_opt_domain::{
    CargoLoad, DayOfWeek, PlanningWindow, Qualification, QualificationType, ScheduledShift,
    Warehouse, WarehouseId, WarehousePreference, WarehouseStaffing, Worker, WorkerId,
    parse_iso_date,
};
use std::str::FromStr;

/// Converts the request's workers into domain values.
///
/// # Errors
///
/// Returns an error if any qualification type is not one of the closed
/// set.
pub fn convert_workers(inputs: &[WorkerInput]) -> Result<Vec<Worker>, ApiError> {
    let mut workers: Vec<Worker> = Vec::with_capacity(inputs.len());

    for input in inputs {
        let mut qualifications: Vec<Qualification> = Vec::with_capacity(input.qualifications.len());
        for qualification in &input.qualifications {
            let qualification_type: QualificationType =
                QualificationType::from_str(&qualification.qualification_type)
                    .map_err(translate_domain_error)?;
            qualifications.push(Qualification::new(qualification_type, qualification.level));
        }

        let preferences: Vec<WarehousePreference> = input
            .warehouse_preferences
            .iter()
            .map(|preference| {
                WarehousePreference::new(
                    WarehouseId::new(&preference.warehouse_id),
                    preference.priority,
                    preference.distance,
                )
            })
            .collect();

        workers.push(Worker::new(
            WorkerId::new(&input.id),
            input.name.clone(),
            qualifications,
            preferences,
        ));
    }

    Ok(workers)
}

/// Converts the request's warehouses into domain values.
#[must_use]
pub fn convert_warehouses(inputs: &[WarehouseInput]) -> Vec<Warehouse> {
    inputs
        .iter()
        .map(|input| Warehouse {
            id: WarehouseId::new(&input.id),
            name: input.name.clone(),
            capacity: input.capacity,
            min_workers: input.min_workers,
            min_basic_workers: input.min_basic_workers,
            min_drivers: input.min_drivers,
            min_engineers: input.min_engineers,
            is_active: input.is_active,
        })
        .collect()
}

/// Converts the request's cargo loads into domain values.
///
/// # Errors
///
/// Returns an error if any load date is not a valid ISO-8601 calendar
/// date.
pub fn convert_cargo_loads(inputs: &[CargoLoadInput]) -> Result<Vec<CargoLoad>, ApiError> {
    let mut cargo_loads: Vec<CargoLoad> = Vec::with_capacity(inputs.len());

    for input in inputs {
        let date: time::Date = parse_iso_date(&input.date).map_err(translate_domain_error)?;
        cargo_loads.push(CargoLoad::new(
            WarehouseId::new(&input.warehouse_id),
            date,
            input.total_weight,
        ));
    }

    Ok(cargo_loads)
}

/// Resolves the request's day selection into typed weekdays.
///
/// An explicit `days` list is parsed as given; otherwise a
/// `start_date`/`end_date` pair is validated as a planning window and
/// expanded to its deduplicated weekdays.
///
/// # Errors
///
/// Returns an error if:
/// - a listed day is not a lowercase English weekday name
/// - a range date fails to parse
/// - the range is reversed or spans more than the caller limit
/// - neither form is present
pub fn resolve_days(request: &OptimizeShiftsRequest) -> Result<Vec<DayOfWeek>, ApiError> {
    if let Some(day_names) = &request.days {
        return day_names
            .iter()
            .map(|name| DayOfWeek::from_str(name).map_err(translate_domain_error))
            .collect();
    }

    match (&request.start_date, &request.end_date) {
        (Some(start), Some(end)) => {
            let start_date: time::Date = parse_iso_date(start).map_err(translate_domain_error)?;
            let end_date: time::Date = parse_iso_date(end).map_err(translate_domain_error)?;
            let window: PlanningWindow =
                PlanningWindow::new(start_date, end_date).map_err(translate_domain_error)?;
            window.days().map_err(translate_domain_error)
        }
        _ => Err(ApiError::MissingDaySelection),
    }
}

/// Converts an engine shift into its wire form.
#[must_use]
pub fn shift_to_info(shift: &ScheduledShift) -> ScheduledShiftInfo {
    ScheduledShiftInfo {
        worker_id: shift.worker_id.value().to_string(),
        warehouse_id: shift.warehouse_id.value().to_string(),
        day_of_week: shift.day.as_str().to_string(),
        start_time: shift.window.start_label(),
        end_time: shift.window.end_label(),
    }
}

/// Converts an engine staffing record into its wire form.
#[must_use]
pub fn staffing_to_info(staffing: &WarehouseStaffing) -> WarehouseStaffingInfo {
    WarehouseStaffingInfo {
        warehouse_id: staffing.warehouse_id.value().to_string(),
        warehouse_name: staffing.warehouse_name.clone(),
        day: staffing.day.as_str().to_string(),
        required_basic_workers: staffing.required_basic_workers,
        scheduled_basic_workers: staffing.scheduled_basic_workers,
        required_drivers: staffing.required_drivers,
        scheduled_drivers: staffing.scheduled_drivers,
        required_engineers: staffing.required_engineers,
        scheduled_engineers: staffing.scheduled_engineers,
        is_fully_staffed: staffing.is_fully_staffed,
    }
}
