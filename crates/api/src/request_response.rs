// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are the wire contract: stringly-typed snapshots in, a
//! success/message envelope out. They are distinct from domain types;
//! conversion and validation happen in one explicit step before the
//! engine ever runs.

use serde::{Deserialize, Serialize};

/// A qualification held by a worker, as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualificationInput {
    /// The qualification type: `BASIC_WORKER`, `CARGO_DRIVER`, or
    /// `ENGINEER`.
    #[serde(rename = "type")]
    pub qualification_type: String,
    /// The qualification level.
    pub level: u32,
}

/// A worker's preference for one warehouse, as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehousePreferenceInput {
    /// The preferred warehouse's identifier.
    pub warehouse_id: String,
    /// Preference rank, lower is more preferred.
    pub priority: u32,
    /// Distance to the warehouse, lower is more preferred.
    pub distance: f64,
}

/// A worker in the request snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerInput {
    /// The worker's identifier.
    pub id: String,
    /// The worker's display name.
    pub name: String,
    /// The worker's qualifications.
    pub qualifications: Vec<QualificationInput>,
    /// The worker's warehouse preferences.
    pub warehouse_preferences: Vec<WarehousePreferenceInput>,
}

/// A warehouse in the request snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseInput {
    /// The warehouse identifier.
    pub id: String,
    /// The warehouse display name.
    pub name: String,
    /// Physical worker capacity.
    pub capacity: u32,
    /// Overall minimum staffing.
    pub min_workers: u32,
    /// Minimum basic workers per day.
    pub min_basic_workers: u32,
    /// Minimum cargo drivers per day.
    pub min_drivers: u32,
    /// Minimum engineers per day.
    pub min_engineers: u32,
    /// Whether the warehouse is operational.
    pub is_active: bool,
}

/// A cargo load in the request snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoLoadInput {
    /// The receiving warehouse's identifier.
    pub warehouse_id: String,
    /// The arrival date as an ISO-8601 string ("YYYY-MM-DD").
    pub date: String,
    /// Total load weight in kilograms.
    pub total_weight: u32,
}

/// A request to run one optimization over a full snapshot.
///
/// The days to schedule are given either as `days` (lowercase English
/// weekday names) or as an inclusive `start_date`/`end_date` range that
/// the boundary expands. An explicit day list wins when both appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeShiftsRequest {
    /// The worker roster.
    pub workers: Vec<WorkerInput>,
    /// The warehouses to staff.
    pub warehouses: Vec<WarehouseInput>,
    /// Cargo loads driving dynamic requirements.
    pub cargo_loads: Vec<CargoLoadInput>,
    /// The weekdays to schedule, lowercase English names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<String>>,
    /// First date of the planning window (ISO 8601), inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Last date of the planning window (ISO 8601), inclusive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// A scheduled shift in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShiftInfo {
    /// The assigned worker's identifier.
    pub worker_id: String,
    /// The warehouse the worker is assigned to.
    pub warehouse_id: String,
    /// The weekday of the shift, lowercase English name.
    pub day_of_week: String,
    /// The shift start, formatted "HH:MM".
    pub start_time: String,
    /// The shift end, formatted "HH:MM". Midnight renders as "00:00".
    pub end_time: String,
}

/// A staffing comparison record in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseStaffingInfo {
    /// The warehouse identifier.
    pub warehouse_id: String,
    /// The warehouse display name.
    pub warehouse_name: String,
    /// The weekday this record covers, lowercase English name.
    pub day: String,
    /// Required basic workers.
    pub required_basic_workers: u32,
    /// Scheduled basic workers.
    pub scheduled_basic_workers: u32,
    /// Required cargo drivers.
    pub required_drivers: u32,
    /// Scheduled cargo drivers.
    pub scheduled_drivers: u32,
    /// Required engineers.
    pub required_engineers: u32,
    /// Scheduled engineers.
    pub scheduled_engineers: u32,
    /// Whether scheduled meets required in all three categories.
    pub is_fully_staffed: bool,
}

/// The response envelope for one optimization request.
///
/// The success flag is the contract: failures carry a descriptive message
/// and empty result lists instead of propagating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeShiftsResponse {
    /// Whether the optimization ran.
    pub success: bool,
    /// A human-readable outcome description.
    pub message: String,
    /// Every scheduled shift, in assignment order.
    pub shifts: Vec<ScheduledShiftInfo>,
    /// One staffing record per requested (warehouse, day) pair.
    pub warehouse_staffing: Vec<WarehouseStaffingInfo>,
}

impl OptimizeShiftsResponse {
    /// Creates a success response.
    #[must_use]
    pub const fn completed(
        message: String,
        shifts: Vec<ScheduledShiftInfo>,
        warehouse_staffing: Vec<WarehouseStaffingInfo>,
    ) -> Self {
        Self {
            success: true,
            message,
            shifts,
            warehouse_staffing,
        }
    }

    /// Creates a failure response with empty result lists.
    #[must_use]
    pub const fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            shifts: Vec::new(),
            warehouse_staffing: Vec::new(),
        }
    }
}
