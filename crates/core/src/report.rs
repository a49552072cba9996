// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::requirements::Requirement;
use shift_opt_domain::WarehouseStaffing;

/// Builds the staffing report for every requirement, in requirement order.
///
/// Required counts are the cargo-adjusted totals; scheduled counts are
/// whatever the assignment passes booked. `is_fully_staffed` holds exactly
/// when scheduled meets required in all three categories.
#[must_use]
pub fn generate_staffing_reports(requirements: &[Requirement]) -> Vec<WarehouseStaffing> {
    requirements
        .iter()
        .map(|requirement| WarehouseStaffing {
            warehouse_id: requirement.warehouse_id.clone(),
            warehouse_name: requirement.warehouse_name.clone(),
            day: requirement.day,
            required_basic_workers: requirement.total_basic_workers,
            scheduled_basic_workers: requirement.scheduled_basic_workers,
            required_drivers: requirement.total_drivers,
            scheduled_drivers: requirement.scheduled_drivers,
            required_engineers: requirement.total_engineers,
            scheduled_engineers: requirement.scheduled_engineers,
            is_fully_staffed: requirement.is_fully_staffed(),
        })
        .collect()
}
