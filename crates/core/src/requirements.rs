// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staffing requirement computation.
//!
//! One [`Requirement`] record exists per requested (day, warehouse) pair.
//! Totals start from the warehouse's static minimums and are raised by
//! cargo weight banding: a warehouse with several loads on one day needs
//! staff sized to its heaviest single load, never the cumulative total.

use shift_opt_domain::{CargoLoad, DayOfWeek, QualificationType, Warehouse, WarehouseId};

/// Kilograms of cargo one basic worker can handle per day.
const KG_PER_BASIC_WORKER: u32 = 1_000;
/// Kilograms of cargo one driver can move per day.
const KG_PER_CARGO_DRIVER: u32 = 5_000;
/// Kilograms of cargo one engineer can supervise per day.
const KG_PER_ENGINEER: u32 = 10_000;

/// The staffing requirement for one (day, warehouse) pair.
///
/// `total_*` is what the day demands; `scheduled_*` counters start at zero
/// and are advanced by the assignment passes as workers are booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// The warehouse this requirement covers.
    pub warehouse_id: WarehouseId,
    /// The warehouse display name, carried for reporting.
    pub warehouse_name: String,
    /// The weekday this requirement covers.
    pub day: DayOfWeek,
    /// Static minimum basic workers.
    pub min_basic_workers: u32,
    /// Static minimum cargo drivers.
    pub min_drivers: u32,
    /// Static minimum engineers.
    pub min_engineers: u32,
    /// Required basic workers after cargo banding.
    pub total_basic_workers: u32,
    /// Required cargo drivers after cargo banding.
    pub total_drivers: u32,
    /// Required engineers after cargo banding.
    pub total_engineers: u32,
    /// Basic workers booked so far.
    pub scheduled_basic_workers: u32,
    /// Cargo drivers booked so far.
    pub scheduled_drivers: u32,
    /// Engineers booked so far.
    pub scheduled_engineers: u32,
}

impl Requirement {
    /// Creates a requirement seeded from a warehouse's static minimums.
    fn from_warehouse(warehouse: &Warehouse, day: DayOfWeek) -> Self {
        Self {
            warehouse_id: warehouse.id.clone(),
            warehouse_name: warehouse.name.clone(),
            day,
            min_basic_workers: warehouse.min_basic_workers,
            min_drivers: warehouse.min_drivers,
            min_engineers: warehouse.min_engineers,
            total_basic_workers: warehouse.min_basic_workers,
            total_drivers: warehouse.min_drivers,
            total_engineers: warehouse.min_engineers,
            scheduled_basic_workers: 0,
            scheduled_drivers: 0,
            scheduled_engineers: 0,
        }
    }

    /// Returns the static minimum for a category.
    #[must_use]
    pub const fn minimum_for(&self, category: QualificationType) -> u32 {
        match category {
            QualificationType::BasicWorker => self.min_basic_workers,
            QualificationType::CargoDriver => self.min_drivers,
            QualificationType::Engineer => self.min_engineers,
        }
    }

    /// Returns the required headcount for a category.
    #[must_use]
    pub const fn total_for(&self, category: QualificationType) -> u32 {
        match category {
            QualificationType::BasicWorker => self.total_basic_workers,
            QualificationType::CargoDriver => self.total_drivers,
            QualificationType::Engineer => self.total_engineers,
        }
    }

    /// Returns the headcount booked so far for a category.
    #[must_use]
    pub const fn scheduled_for(&self, category: QualificationType) -> u32 {
        match category {
            QualificationType::BasicWorker => self.scheduled_basic_workers,
            QualificationType::CargoDriver => self.scheduled_drivers,
            QualificationType::Engineer => self.scheduled_engineers,
        }
    }

    /// Returns how many workers the category still needs.
    #[must_use]
    pub const fn shortfall_for(&self, category: QualificationType) -> u32 {
        self.total_for(category)
            .saturating_sub(self.scheduled_for(category))
    }

    /// Records one booked worker against a category.
    pub fn record_assignment(&mut self, category: QualificationType) {
        match category {
            QualificationType::BasicWorker => self.scheduled_basic_workers += 1,
            QualificationType::CargoDriver => self.scheduled_drivers += 1,
            QualificationType::Engineer => self.scheduled_engineers += 1,
        }
    }

    /// Checks whether every category is staffed to its requirement.
    #[must_use]
    pub const fn is_fully_staffed(&self) -> bool {
        self.scheduled_basic_workers >= self.total_basic_workers
            && self.scheduled_drivers >= self.total_drivers
            && self.scheduled_engineers >= self.total_engineers
    }

    /// Raises a category total to `value` if it is higher.
    fn raise_total(&mut self, category: QualificationType, value: u32) {
        match category {
            QualificationType::BasicWorker => {
                self.total_basic_workers = self.total_basic_workers.max(value);
            }
            QualificationType::CargoDriver => {
                self.total_drivers = self.total_drivers.max(value);
            }
            QualificationType::Engineer => {
                self.total_engineers = self.total_engineers.max(value);
            }
        }
    }
}

/// Returns the headcount one cargo load demands for a category.
const fn cargo_requirement(category: QualificationType, total_weight: u32) -> u32 {
    match category {
        QualificationType::BasicWorker => total_weight.div_ceil(KG_PER_BASIC_WORKER),
        QualificationType::CargoDriver => total_weight.div_ceil(KG_PER_CARGO_DRIVER),
        QualificationType::Engineer => total_weight.div_ceil(KG_PER_ENGINEER),
    }
}

/// Computes the staffing requirements for every requested (day, warehouse)
/// pair.
///
/// Records are produced in request order: days outer, warehouses inner.
/// A warehouse with zero minimums and no matching cargo yields an all-zero
/// record, which is valid and means no staff is scheduled there.
///
/// The function is pure; calling it twice on identical input yields an
/// identical requirement list.
#[must_use]
pub fn calculate_requirements(
    warehouses: &[Warehouse],
    cargo_loads: &[CargoLoad],
    days: &[DayOfWeek],
) -> Vec<Requirement> {
    let mut requirements: Vec<Requirement> = Vec::with_capacity(days.len() * warehouses.len());

    for &day in days {
        for warehouse in warehouses {
            let mut requirement: Requirement = Requirement::from_warehouse(warehouse, day);

            let matching_loads = cargo_loads
                .iter()
                .filter(|load| load.warehouse_id == warehouse.id && load.day_of_week() == day);

            for load in matching_loads {
                for category in QualificationType::ALL {
                    let demanded: u32 = warehouse
                        .min_for(category)
                        .max(cargo_requirement(category, load.total_weight));
                    requirement.raise_total(category, demanded);
                }
            }

            requirements.push(requirement);
        }
    }

    requirements
}
