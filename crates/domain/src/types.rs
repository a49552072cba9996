// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::day::DayOfWeek;
use crate::error::DomainError;
use crate::shift_window::ShiftWindow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// An opaque worker identifier.
///
/// The optimizer never interprets the value; it only compares and hashes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId {
    /// The identifier value as supplied by the caller.
    value: String,
}

impl WorkerId {
    /// Creates a new `WorkerId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// An opaque warehouse identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarehouseId {
    /// The identifier value as supplied by the caller.
    value: String,
}

impl WarehouseId {
    /// Creates a new `WarehouseId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The closed set of worker qualification types.
///
/// These double as the assignment categories: every staffing requirement
/// and every assignment pass works through them in the fixed order
/// basic worker, cargo driver, engineer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualificationType {
    /// General warehouse labor.
    BasicWorker,
    /// Licensed cargo vehicle operator.
    CargoDriver,
    /// Equipment and site engineer.
    Engineer,
}

impl QualificationType {
    /// All qualification types in assignment order.
    pub const ALL: [Self; 3] = [Self::BasicWorker, Self::CargoDriver, Self::Engineer];

    /// Converts this qualification type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BasicWorker => "BASIC_WORKER",
            Self::CargoDriver => "CARGO_DRIVER",
            Self::Engineer => "ENGINEER",
        }
    }
}

impl FromStr for QualificationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASIC_WORKER" => Ok(Self::BasicWorker),
            "CARGO_DRIVER" => Ok(Self::CargoDriver),
            "ENGINEER" => Ok(Self::Engineer),
            _ => Err(DomainError::InvalidQualificationType(s.to_string())),
        }
    }
}

impl std::fmt::Display for QualificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single qualification held by a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    /// The qualification type.
    pub qualification_type: QualificationType,
    /// The qualification level. Carried through but not consulted by any
    /// ranking decision.
    pub level: u32,
}

impl Qualification {
    /// Creates a new `Qualification`.
    #[must_use]
    pub const fn new(qualification_type: QualificationType, level: u32) -> Self {
        Self {
            qualification_type,
            level,
        }
    }
}

/// A worker's preference for one warehouse.
///
/// Lower `priority` means more preferred; `distance` breaks priority ties,
/// lower first. At most one preference per (worker, warehouse) is expected
/// but duplicates are tolerated; the first entry wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehousePreference {
    /// The warehouse this preference refers to.
    pub warehouse_id: WarehouseId,
    /// Preference rank, lower is more preferred.
    pub priority: u32,
    /// Distance to the warehouse, lower is more preferred.
    pub distance: f64,
}

impl WarehousePreference {
    /// Creates a new `WarehousePreference`.
    #[must_use]
    pub const fn new(warehouse_id: WarehouseId, priority: u32, distance: f64) -> Self {
        Self {
            warehouse_id,
            priority,
            distance,
        }
    }
}

/// A worker available for assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// The worker's identifier.
    pub id: WorkerId,
    /// The worker's display name.
    pub name: String,
    /// Qualifications held by the worker. Duplicates per type are
    /// tolerated and treated as "has capability".
    pub qualifications: Vec<Qualification>,
    /// Warehouse preferences in caller order.
    pub preferences: Vec<WarehousePreference>,
}

impl Worker {
    /// Creates a new `Worker`.
    #[must_use]
    pub const fn new(
        id: WorkerId,
        name: String,
        qualifications: Vec<Qualification>,
        preferences: Vec<WarehousePreference>,
    ) -> Self {
        Self {
            id,
            name,
            qualifications,
            preferences,
        }
    }

    /// Checks whether the worker holds a qualification of the given type.
    #[must_use]
    pub fn has_qualification(&self, qualification_type: QualificationType) -> bool {
        self.qualifications
            .iter()
            .any(|q| q.qualification_type == qualification_type)
    }

    /// Returns the worker's preference entry for a warehouse, if any.
    ///
    /// The first matching entry wins when duplicates exist.
    #[must_use]
    pub fn preference_for(&self, warehouse_id: &WarehouseId) -> Option<&WarehousePreference> {
        self.preferences
            .iter()
            .find(|p| &p.warehouse_id == warehouse_id)
    }
}

/// A warehouse with its static staffing minimums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// The warehouse identifier.
    pub id: WarehouseId,
    /// The warehouse display name.
    pub name: String,
    /// Physical worker capacity. Not enforced by the engine.
    pub capacity: u32,
    /// Overall minimum staffing. Not consulted by the engine; the
    /// per-category minimums below are authoritative.
    pub min_workers: u32,
    /// Minimum basic workers per day.
    pub min_basic_workers: u32,
    /// Minimum cargo drivers per day.
    pub min_drivers: u32,
    /// Minimum engineers per day.
    pub min_engineers: u32,
    /// Whether the warehouse is operational. Filtering on this flag is the
    /// caller's concern; the engine schedules every warehouse it is given.
    pub is_active: bool,
}

impl Warehouse {
    /// Returns the static minimum staffing for a category.
    #[must_use]
    pub const fn min_for(&self, category: QualificationType) -> u32 {
        match category {
            QualificationType::BasicWorker => self.min_basic_workers,
            QualificationType::CargoDriver => self.min_drivers,
            QualificationType::Engineer => self.min_engineers,
        }
    }
}

/// A cargo load arriving at a warehouse on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoLoad {
    /// The receiving warehouse.
    pub warehouse_id: WarehouseId,
    /// The arrival date.
    pub date: Date,
    /// Total load weight in kilograms.
    pub total_weight: u32,
}

impl CargoLoad {
    /// Creates a new `CargoLoad`.
    #[must_use]
    pub const fn new(warehouse_id: WarehouseId, date: Date, total_weight: u32) -> Self {
        Self {
            warehouse_id,
            date,
            total_weight,
        }
    }

    /// Returns the weekday this load arrives on.
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::from(self.date.weekday())
    }
}

/// A single shift produced by the optimizer.
///
/// Shifts are keyed by weekday, never by calendar date; the caller maps
/// them back onto its own planning period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    /// The assigned worker.
    pub worker_id: WorkerId,
    /// The warehouse the worker is assigned to.
    pub warehouse_id: WarehouseId,
    /// The weekday of the shift.
    pub day: DayOfWeek,
    /// The shift window the worker is booked into.
    pub window: ShiftWindow,
}

impl ScheduledShift {
    /// Creates a new `ScheduledShift`.
    #[must_use]
    pub const fn new(
        worker_id: WorkerId,
        warehouse_id: WarehouseId,
        day: DayOfWeek,
        window: ShiftWindow,
    ) -> Self {
        Self {
            worker_id,
            warehouse_id,
            day,
            window,
        }
    }
}

/// The staffing comparison for one (warehouse, day) pair.
///
/// Derived after assignment; read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseStaffing {
    /// The warehouse identifier.
    pub warehouse_id: WarehouseId,
    /// The warehouse display name.
    pub warehouse_name: String,
    /// The weekday this record covers.
    pub day: DayOfWeek,
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
