// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_cargo_input, create_test_warehouse_input, create_test_worker_input,
    create_valid_request,
};
use crate::optimize_shifts;
use crate::request_response::{OptimizeShiftsRequest, OptimizeShiftsResponse};

#[test]
fn test_valid_request_succeeds() {
    let request: OptimizeShiftsRequest = create_valid_request();

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(response.success);
    assert_eq!(response.message, "Scheduled 3 shifts");
    assert_eq!(response.shifts.len(), 3);
    assert_eq!(response.warehouse_staffing.len(), 1);
}

#[test]
fn test_shift_info_fields() {
    let request: OptimizeShiftsRequest = create_valid_request();

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    let shift = &response.shifts[0];
    assert_eq!(shift.worker_id, "worker-1");
    assert_eq!(shift.warehouse_id, "wh-1");
    assert_eq!(shift.day_of_week, "monday");
    assert_eq!(shift.start_time, "08:00");
    assert_eq!(shift.end_time, "16:00");
}

#[test]
fn test_staffing_info_fields() {
    let request: OptimizeShiftsRequest = create_valid_request();

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    // The 800 kg load demands one worker per category, floored against
    // the warehouse minimums of one basic worker and one driver.
    let staffing = &response.warehouse_staffing[0];
    assert_eq!(staffing.warehouse_id, "wh-1");
    assert_eq!(staffing.warehouse_name, "Warehouse wh-1");
    assert_eq!(staffing.day, "monday");
    assert_eq!(staffing.required_basic_workers, 1);
    assert_eq!(staffing.scheduled_basic_workers, 1);
    assert_eq!(staffing.required_drivers, 1);
    assert_eq!(staffing.scheduled_drivers, 1);
    assert_eq!(staffing.required_engineers, 1);
    assert_eq!(staffing.scheduled_engineers, 1);
    assert!(staffing.is_fully_staffed);
}

#[test]
fn test_one_staffing_record_per_day_and_warehouse() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request
        .warehouses
        .push(create_test_warehouse_input("wh-2", 0, 0, 0));
    request.days = Some(vec![String::from("monday"), String::from("tuesday")]);

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(response.success);
    assert_eq!(response.warehouse_staffing.len(), 4);
}

#[test]
fn test_unknown_qualification_type_fails_fast() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.workers.push(create_test_worker_input("worker-4", "FORKLIFT"));

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(!response.success);
    assert!(response.message.contains("Invalid qualification type"));
    assert!(response.shifts.is_empty());
    assert!(response.warehouse_staffing.is_empty());
}

#[test]
fn test_unknown_day_name_fails_fast() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.days = Some(vec![String::from("Monday")]);

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(!response.success);
    assert!(response.message.contains("Invalid day of week"));
}

#[test]
fn test_malformed_cargo_date_fails_fast() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.cargo_loads = vec![create_test_cargo_input("wh-1", "06/01/2025", 800)];

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(!response.success);
    assert!(response.message.contains("Failed to parse date"));
}

#[test]
fn test_missing_day_selection_fails() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.days = None;

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(!response.success);
    assert!(response.message.contains("No days requested"));
}

#[test]
fn test_date_range_resolves_days() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.days = None;
    request.start_date = Some(String::from("2025-01-06"));
    request.end_date = Some(String::from("2025-01-07"));

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(response.success);
    assert_eq!(response.warehouse_staffing.len(), 2);
    assert_eq!(response.warehouse_staffing[0].day, "monday");
    assert_eq!(response.warehouse_staffing[1].day, "tuesday");
}

#[test]
fn test_reversed_date_range_fails() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.days = None;
    request.start_date = Some(String::from("2025-01-10"));
    request.end_date = Some(String::from("2025-01-06"));

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(!response.success);
    assert!(response.message.contains("cannot be after end date"));
}

#[test]
fn test_over_long_date_range_fails() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.days = None;
    request.start_date = Some(String::from("2025-01-06"));
    request.end_date = Some(String::from("2025-01-21"));

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(!response.success);
    assert!(response.message.contains("cannot exceed 14 days"));
}

#[test]
fn test_explicit_days_win_over_date_range() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.days = Some(vec![String::from("friday")]);
    request.start_date = Some(String::from("2025-01-06"));
    request.end_date = Some(String::from("2025-01-07"));

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(response.success);
    assert_eq!(response.warehouse_staffing.len(), 1);
    assert_eq!(response.warehouse_staffing[0].day, "friday");
}

#[test]
fn test_empty_day_list_yields_empty_success() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    request.days = Some(Vec::new());

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(response.success);
    assert_eq!(response.message, "Scheduled 0 shifts");
    assert!(response.shifts.is_empty());
    assert!(response.warehouse_staffing.is_empty());
}

#[test]
fn test_under_staffed_snapshot_reports_not_fully_staffed() {
    let mut request: OptimizeShiftsRequest = create_valid_request();
    // 12000 kg needs twelve basic workers; only one exists.
    request.cargo_loads = vec![create_test_cargo_input("wh-1", "2025-01-06", 12000)];

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(response.success);
    let staffing = &response.warehouse_staffing[0];
    assert_eq!(staffing.required_basic_workers, 12);
    assert_eq!(staffing.scheduled_basic_workers, 1);
    assert!(!staffing.is_fully_staffed);
}
