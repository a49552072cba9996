// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{
    CargoLoadInput, OptimizeShiftsRequest, QualificationInput, WarehouseInput,
    WarehousePreferenceInput, WorkerInput,
};

/// Creates a worker input with one qualification and no preferences.
pub fn create_test_worker_input(id: &str, qualification_type: &str) -> WorkerInput {
    WorkerInput {
        id: id.to_string(),
        name: format!("Worker {id}"),
        qualifications: vec![QualificationInput {
            qualification_type: qualification_type.to_string(),
            level: 2,
        }],
        warehouse_preferences: vec![WarehousePreferenceInput {
            warehouse_id: String::from("wh-1"),
            priority: 1,
            distance: 5.0,
        }],
    }
}

/// Creates an active warehouse input with the given minimums.
pub fn create_test_warehouse_input(
    id: &str,
    min_basic_workers: u32,
    min_drivers: u32,
    min_engineers: u32,
) -> WarehouseInput {
    WarehouseInput {
        id: id.to_string(),
        name: format!("Warehouse {id}"),
        capacity: 20,
        min_workers: min_basic_workers + min_drivers + min_engineers,
        min_basic_workers,
        min_drivers,
        min_engineers,
        is_active: true,
    }
}

/// Creates a cargo load input.
pub fn create_test_cargo_input(warehouse_id: &str, date: &str, total_weight: u32) -> CargoLoadInput {
    CargoLoadInput {
        warehouse_id: warehouse_id.to_string(),
        date: date.to_string(),
        total_weight,
    }
}

/// Creates a valid single-day request: one warehouse, one Monday cargo
/// load, and one qualified worker per category. The 800 kg load keeps the
/// cargo-driven demand at one worker per category, so the snapshot can be
/// fully staffed.
pub fn create_valid_request() -> OptimizeShiftsRequest {
    OptimizeShiftsRequest {
        workers: vec![
            create_test_worker_input("worker-1", "BASIC_WORKER"),
            create_test_worker_input("worker-2", "CARGO_DRIVER"),
            create_test_worker_input("worker-3", "ENGINEER"),
        ],
        warehouses: vec![create_test_warehouse_input("wh-1", 1, 1, 0)],
        // 2025-01-06 is a Monday.
        cargo_loads: vec![create_test_cargo_input("wh-1", "2025-01-06", 800)],
        days: Some(vec![String::from("monday")]),
        start_date: None,
        end_date: None,
    }
}
