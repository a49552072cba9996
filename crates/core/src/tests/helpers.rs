// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shift_opt_domain::{
    CargoLoad, Qualification, QualificationType, Warehouse, WarehouseId, WarehousePreference,
    Worker, WorkerId,
};
use time::Date;

/// Creates a worker holding the given qualifications at level 1, with no
/// warehouse preferences.
pub fn create_test_worker(id: &str, qualifications: &[QualificationType]) -> Worker {
    Worker::new(
        WorkerId::new(id),
        format!("Worker {id}"),
        qualifications
            .iter()
            .map(|&qualification_type| Qualification::new(qualification_type, 1))
            .collect(),
        Vec::new(),
    )
}

/// Creates a worker with one preference entry for the given warehouse.
pub fn create_test_worker_with_preference(
    id: &str,
    qualifications: &[QualificationType],
    warehouse_id: &str,
    priority: u32,
    distance: f64,
) -> Worker {
    let mut worker: Worker = create_test_worker(id, qualifications);
    worker.preferences.push(WarehousePreference::new(
        WarehouseId::new(warehouse_id),
        priority,
        distance,
    ));
    worker
}

/// Creates an active warehouse with the given per-category minimums.
pub fn create_test_warehouse(
    id: &str,
    min_basic_workers: u32,
    min_drivers: u32,
    min_engineers: u32,
) -> Warehouse {
    Warehouse {
        id: WarehouseId::new(id),
        name: format!("Warehouse {id}"),
        capacity: 50,
        min_workers: min_basic_workers + min_drivers + min_engineers,
        min_basic_workers,
        min_drivers,
        min_engineers,
        is_active: true,
    }
}

/// Creates a cargo load for a warehouse on a calendar date.
pub fn create_test_cargo(warehouse_id: &str, date: Date, total_weight: u32) -> CargoLoad {
    CargoLoad::new(WarehouseId::new(warehouse_id), date, total_weight)
}
