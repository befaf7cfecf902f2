// Copyright (c) 2023-2024  The heatcost developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Typical day profile
===================

Illustrative hourly profile of a month, for display only.

The mean daily energy of the month is spread over the hours with the normalized intra-day
shapes. The heating system electricity follows the heating shape. PV is used directly when
generated, without battery, so this profile does not reproduce the monthly dispatch results.
*/

use serde::Serialize;

use crate::catalog::{
    HeatingSystem, HOURLY_DHW_SHAPE, HOURLY_HEATING_SHAPE, HOURLY_HOUSEHOLD_SHAPE,
    HOURLY_PV_SHAPE, REFERENCE_CLIMATE,
};
use crate::types::{MonthlyEnergyDemand, SystemResult};
use crate::vecops::{veckmul, vecnormalize, vecvecdifpos, vecvecmin, vecvecsum};

/// Hourly energy flows of a typical day [kWh], 0h to 23h
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProfile {
    /// Month number (1 = January)
    pub month: usize,
    /// Month label
    pub label: &'static str,
    /// Heating system of the heating electricity
    pub system: HeatingSystem,
    /// PV generation
    pub pv: Vec<f32>,
    /// Household electricity
    pub household: Vec<f32>,
    /// Domestic hot water heat
    pub dhw: Vec<f32>,
    /// Space heating heat
    pub heating: Vec<f32>,
    /// Heating system electricity
    pub system_electricity: Vec<f32>,
    /// Total electricity demand
    pub demand: Vec<f32>,
    /// PV used directly
    pub pv_direct: Vec<f32>,
    /// Grid import
    pub grid_import: Vec<f32>,
    /// PV export
    pub export: Vec<f32>,
}

fn hourly(shape: &[f32], daily_energy: f32) -> Vec<f32> {
    veckmul(&vecnormalize(shape), daily_energy)
}

/// Typical day of month `month` (1 to 12) for the system of `result`
///
/// Returns `None` for month numbers out of range.
pub fn typical_day(
    demand: &MonthlyEnergyDemand,
    result: &SystemResult,
    month: usize,
) -> Option<DailyProfile> {
    if month < 1 || month > 12 {
        return None;
    }
    let idx = month - 1;
    let climate = &REFERENCE_CLIMATE[idx];
    let days = climate.days as f32;
    let per_day = |series: &[f32]| series.get(idx).cloned().unwrap_or(0.0) / days;

    let pv = hourly(&HOURLY_PV_SHAPE, per_day(&demand.pv));
    let household = hourly(&HOURLY_HOUSEHOLD_SHAPE, per_day(&demand.household));
    let dhw = hourly(&HOURLY_DHW_SHAPE, per_day(&demand.dhw));
    let heating = hourly(&HOURLY_HEATING_SHAPE, per_day(&demand.heating));
    let system_electricity = hourly(
        &HOURLY_HEATING_SHAPE,
        per_day(&result.monthly_system_electricity),
    );
    let total = vecvecsum(&household, &system_electricity);
    let pv_direct = vecvecmin(&pv, &total);
    let grid_import = vecvecdifpos(&total, &pv_direct);
    let export = vecvecdifpos(&pv, &pv_direct);

    Some(DailyProfile {
        month,
        label: climate.label,
        system: result.system,
        pv,
        household,
        dhw,
        heating,
        system_electricity,
        demand: total,
        pv_direct,
        grid_import,
        export,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare_systems;
    use crate::types::BuildingParameters;
    use crate::vecops::vecsum;
    use approx::assert_abs_diff_eq;

    #[test]
    fn daily_profile_keeps_daily_energy() {
        let cmp = compare_systems(&BuildingParameters::default());
        let gas = &cmp.results[0];
        let day = typical_day(&cmp.demand, gas, 6).unwrap();
        assert_eq!(day.label, "Jun");
        assert_eq!(day.pv.len(), 24);
        assert_abs_diff_eq!(vecsum(&day.pv), cmp.demand.pv[5] / 30.0, epsilon = 1e-3);
        assert_abs_diff_eq!(
            vecsum(&day.household),
            cmp.demand.household[5] / 30.0,
            epsilon = 1e-3
        );
        // no generation at night
        assert_eq!(day.pv[0], 0.0);
        assert_abs_diff_eq!(day.grid_import[0], day.demand[0], epsilon = 1e-6);
    }

    #[test]
    fn daily_profile_balances() {
        let cmp = compare_systems(&BuildingParameters::default());
        let hp = &cmp.results[1];
        let day = typical_day(&cmp.demand, hp, 1).unwrap();
        for h in 0..24 {
            assert_abs_diff_eq!(
                day.pv_direct[h] + day.grid_import[h],
                day.demand[h],
                epsilon = 1e-5
            );
            assert_abs_diff_eq!(day.pv_direct[h] + day.export[h], day.pv[h], epsilon = 1e-5);
        }
    }

    #[test]
    fn month_out_of_range() {
        let cmp = compare_systems(&BuildingParameters::default());
        assert!(typical_day(&cmp.demand, &cmp.results[0], 0).is_none());
        assert!(typical_day(&cmp.demand, &cmp.results[0], 13).is_none());
    }
}
