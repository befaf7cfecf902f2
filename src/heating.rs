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
Heating demand
==============

Monthly space heating demand from the total heat loss coefficient and the reference climate.

A month is heating-active when its mean temperature is below the heating limit. Active months
count all their hours as heating hours.
*/

use serde::Serialize;

use crate::catalog::{
    ClimateMonth, DESIGN_OUTDOOR_TEMP, HEATING_THRESHOLD_TEMP, INDOOR_SETPOINT_TEMP,
    REFERENCE_CLIMATE,
};

/// Heating demand of a reference month
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct HeatingMonth {
    /// Reference climate of the month
    pub climate: ClimateMonth,
    /// Is heating required in this month?
    pub active: bool,
    /// Setpoint to mean outdoor temperature difference [K]
    pub delta_t: f32,
    /// Heating hours [h]
    pub hours: f32,
    /// Heating energy demand [kWh]
    pub demand: f32,
}

/// Is heating needed with this mean outdoor temperature?
pub fn is_heating_active(mean_temp: f32) -> bool {
    mean_temp < HEATING_THRESHOLD_TEMP && INDOOR_SETPOINT_TEMP > mean_temp
}

/// Heating demand of a single month for a total heat loss coefficient h_tr [W/K]
pub fn heating_month(h_tr: f32, climate: &ClimateMonth) -> HeatingMonth {
    let delta_t = (INDOOR_SETPOINT_TEMP - climate.mean).max(0.0);
    let active = is_heating_active(climate.mean);
    let hours = if active {
        climate.days as f32 * 24.0
    } else {
        0.0
    };
    HeatingMonth {
        climate: *climate,
        active,
        delta_t,
        hours,
        demand: h_tr * delta_t * hours / 1000.0,
    }
}

/// Heating demand records for the 12 reference months
pub fn heating_months(h_tr: f32) -> Vec<HeatingMonth> {
    REFERENCE_CLIMATE
        .iter()
        .map(|climate| heating_month(h_tr, climate))
        .collect()
}

/// Monthly heating energy demand [kWh], January to December
pub fn monthly_heating_demand(h_tr: f32) -> Vec<f32> {
    heating_months(h_tr).iter().map(|m| m.demand).collect()
}

/// Design heat load at the outdoor design temperature [kW]
pub fn design_heat_load(h_tr: f32) -> f32 {
    h_tr * (INDOOR_SETPOINT_TEMP - DESIGN_OUTDOOR_TEMP) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vecops::vecsum;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn heating_active_months() {
        let active: Vec<bool> = heating_months(224.25).iter().map(|m| m.active).collect();
        assert_eq!(
            active,
            vec![true, true, true, true, true, false, false, false, true, true, true, true]
        );
    }

    #[test]
    fn heating_demand_values() {
        let months = heating_months(224.25);
        // January: 224.25 W/K x 18.5 K x 744 h
        assert_relative_eq!(months[0].demand, 3086.5, max_relative = 1e-4);
        assert_eq!(months[5].demand, 0.0);
        assert_relative_eq!(
            vecsum(&monthly_heating_demand(224.25)),
            19224.5,
            max_relative = 1e-4
        );
    }

    #[test]
    fn heating_demand_is_never_negative() {
        for m in heating_months(500.0) {
            assert!(m.demand >= 0.0);
            if m.climate.mean >= HEATING_THRESHOLD_TEMP {
                assert_eq!(m.demand, 0.0);
            }
        }
    }

    #[test]
    fn design_load() {
        assert_relative_eq!(design_heat_load(500.0), 17.0, max_relative = 1e-6);
        assert_relative_eq!(design_heat_load(224.25), 7.6245, max_relative = 1e-5);
    }
}
