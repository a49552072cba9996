// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::optimize_shifts;
use crate::request_response::{OptimizeShiftsRequest, OptimizeShiftsResponse};

const REQUEST_JSON: &str = r#"{
    "workers": [
        {
            "id": "worker-1",
            "name": "Worker One",
            "qualifications": [{"type": "BASIC_WORKER", "level": 2}],
            "warehouse_preferences": [
                {"warehouse_id": "wh-1", "priority": 1, "distance": 5.0}
            ]
        }
    ],
    "warehouses": [
        {
            "id": "wh-1",
            "name": "North Depot",
            "capacity": 20,
            "min_workers": 1,
            "min_basic_workers": 1,
            "min_drivers": 0,
            "min_engineers": 0,
            "is_active": true
        }
    ],
    "cargo_loads": [],
    "days": ["monday"]
}"#;

#[test]
fn test_request_deserializes_from_wire_json() {
    let request: OptimizeShiftsRequest =
        serde_json::from_str(REQUEST_JSON).expect("request JSON should deserialize");

    assert_eq!(request.workers.len(), 1);
    assert_eq!(
        request.workers[0].qualifications[0].qualification_type,
        "BASIC_WORKER"
    );
    assert_eq!(request.days, Some(vec![String::from("monday")]));
    assert_eq!(request.start_date, None);
    assert_eq!(request.end_date, None);
}

#[test]
fn test_wire_request_runs_end_to_end() {
    let request: OptimizeShiftsRequest =
        serde_json::from_str(REQUEST_JSON).expect("request JSON should deserialize");

    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    assert!(response.success);
    assert_eq!(response.shifts.len(), 1);
    assert_eq!(response.shifts[0].day_of_week, "monday");
}

#[test]
fn test_response_serializes_envelope_fields() {
    let request: OptimizeShiftsRequest =
        serde_json::from_str(REQUEST_JSON).expect("request JSON should deserialize");
    let response: OptimizeShiftsResponse = optimize_shifts(&request);

    let value: serde_json::Value =
        serde_json::to_value(&response).expect("response should serialize");

    assert_eq!(value["success"], serde_json::Value::Bool(true));
    assert_eq!(value["shifts"][0]["start_time"], "08:00");
    assert_eq!(value["shifts"][0]["end_time"], "16:00");
    assert_eq!(value["warehouse_staffing"][0]["is_fully_staffed"], true);
}

#[test]
fn test_qualification_type_field_round_trips_as_type() {
    let request: OptimizeShiftsRequest =
        serde_json::from_str(REQUEST_JSON).expect("request JSON should deserialize");

    let value: serde_json::Value = serde_json::to_value(&request).expect("should serialize");

    assert_eq!(
        value["workers"][0]["qualifications"][0]["type"],
        "BASIC_WORKER"
    );
}
