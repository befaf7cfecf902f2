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
Costs
=====

Investment and operating costs of the heating systems and of the PV array with its battery.

Energy prices are flat per kWh. The forecast escalates each energy carrier price by its own
yearly rate, compounding. The feed-in tariff follows the electricity rate.
*/

use serde::{Deserialize, Serialize};

use crate::catalog::{
    FuelType, HeatingSystem, HeatingSystemProfile, BATTERY_COST_PER_KWH, PV_COST_PER_KWP,
};
use crate::dispatch::Battery;
use crate::pv::PvSystem;

/// Energy prices [€/kWh]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    /// Grid electricity
    pub electricity: f32,
    /// Natural gas
    pub gas: f32,
    /// District heat
    pub district_heat: f32,
    /// PV feed-in tariff
    pub feed_in: f32,
}

/// Yearly price escalation rates [% per year]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    /// Electricity and feed-in tariff
    pub electricity: f32,
    /// Natural gas
    pub gas: f32,
    /// District heat
    pub district_heat: f32,
}

impl Prices {
    /// Price of the fuel of a heating system [€/kWh]
    pub fn fuel_price(&self, fuel: FuelType) -> f32 {
        match fuel {
            FuelType::Gas => self.gas,
            FuelType::Electricity => self.electricity,
            FuelType::DistrictHeat => self.district_heat,
        }
    }

    /// Prices of the next year
    pub fn escalate(&self, rates: &Escalation) -> Prices {
        let factor = |rate: f32| 1.0 + rate / 100.0;
        Prices {
            electricity: self.electricity * factor(rates.electricity),
            gas: self.gas * factor(rates.gas),
            district_heat: self.district_heat * factor(rates.district_heat),
            feed_in: self.feed_in * factor(rates.electricity),
        }
    }
}

/// Manual investment adjustments (negative values are savings) [€]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestAdjustments {
    /// PV array and battery
    pub pv: f32,
    /// Gas boiler
    pub gas: f32,
    /// Heat pump
    pub heat_pump: f32,
    /// District heating
    pub district_heat: f32,
}

impl InvestAdjustments {
    /// Adjustment of a heating system
    pub fn for_system(&self, system: HeatingSystem) -> f32 {
        match system {
            HeatingSystem::Gas => self.gas,
            HeatingSystem::HeatPump => self.heat_pump,
            HeatingSystem::DistrictHeat => self.district_heat,
        }
    }
}

/// Yearly energy quantities of a system [kWh/a]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EnergyQuantities {
    /// Grid electricity import
    pub grid_import: f32,
    /// Fuel use (gas or district heat)
    pub fuel: f32,
    /// PV export
    pub pv_export: f32,
}

/// Yearly energy cost: grid electricity + fuel - feed-in revenue [€/a]
///
/// Electric systems have no fuel use, so their fuel term is always zero.
pub fn energy_cost(quantities: &EnergyQuantities, fuel: FuelType, prices: &Prices) -> f32 {
    let fuel_cost = match fuel {
        FuelType::Electricity => 0.0,
        _ => quantities.fuel * prices.fuel_price(fuel),
    };
    quantities.grid_import * prices.electricity + fuel_cost - quantities.pv_export * prices.feed_in
}

/// Yearly operating cost: energy cost + maintenance [€/a]
pub fn operating_cost(
    quantities: &EnergyQuantities,
    profile: &HeatingSystemProfile,
    prices: &Prices,
) -> f32 {
    energy_cost(quantities, profile.fuel, prices) + profile.maintenance
}

/// Investment in a heating system for a design heat load [kW] [€]
pub fn investment_cost(profile: &HeatingSystemProfile, design_load: f32, adjustment: f32) -> f32 {
    profile.install_fixed + profile.install_per_kw * design_load + adjustment
}

/// Investment in the PV array and battery [€], zero without PV
///
/// The battery only counts when it is enabled with a positive capacity.
pub fn pv_investment_cost(pv: &PvSystem, battery: &Battery, adjustment: f32) -> f32 {
    if !pv.enabled {
        return 0.0;
    }
    let battery_cost = if battery.enabled && battery.capacity > 0.0 {
        battery.capacity * BATTERY_COST_PER_KWH
    } else {
        0.0
    };
    pv.kwp * PV_COST_PER_KWP + battery_cost + adjustment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Orientation;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn prices() -> Prices {
        Prices {
            electricity: 0.30,
            gas: 0.10,
            district_heat: 0.12,
            feed_in: 0.08,
        }
    }

    fn rates() -> Escalation {
        Escalation {
            electricity: 3.0,
            gas: 4.0,
            district_heat: 3.5,
        }
    }

    #[test]
    fn escalation_compounds() {
        let y2 = prices().escalate(&rates());
        let y3 = y2.escalate(&rates());
        assert_relative_eq!(y2.electricity, 0.309, max_relative = 1e-6);
        assert_relative_eq!(y3.gas, 0.10 * 1.04 * 1.04, max_relative = 1e-6);
        assert_relative_eq!(y2.feed_in, 0.08 * 1.03, max_relative = 1e-6);
        assert!(y3.district_heat > y2.district_heat && y2.district_heat > 0.12);
    }

    #[test]
    fn energy_and_operating_cost() {
        let q = EnergyQuantities {
            grid_import: 1000.0,
            fuel: 20000.0,
            pv_export: 500.0,
        };
        let gas = HeatingSystem::Gas.profile();
        assert_relative_eq!(energy_cost(&q, FuelType::Gas, &prices()), 2260.0, max_relative = 1e-5);
        assert_relative_eq!(operating_cost(&q, gas, &prices()), 2560.0, max_relative = 1e-5);
        assert_relative_eq!(
            energy_cost(&q, FuelType::DistrictHeat, &prices()),
            2660.0,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            energy_cost(&q, FuelType::Electricity, &prices()),
            260.0,
            max_relative = 1e-5
        );
    }

    #[test]
    fn investments() {
        let hp = HeatingSystem::HeatPump.profile();
        assert_relative_eq!(investment_cost(hp, 17.0, 0.0), 26900.0, max_relative = 1e-6);
        assert_relative_eq!(investment_cost(hp, 17.0, -1900.0), 25000.0, max_relative = 1e-6);

        let pv = PvSystem {
            enabled: true,
            kwp: 10.0,
            specific_yield: 950.0,
            orientation: Orientation::South,
            tilt: 35.0,
        };
        let battery = Battery {
            enabled: true,
            capacity: 10.0,
        };
        assert_eq!(pv_investment_cost(&pv, &battery, 0.0), 22000.0);
        let no_battery = Battery {
            enabled: false,
            ..battery
        };
        assert_eq!(pv_investment_cost(&pv, &no_battery, 500.0), 14500.0);
        let no_pv = PvSystem { enabled: false, ..pv };
        assert_eq!(pv_investment_cost(&no_pv, &battery, 500.0), 0.0);
    }

    #[test]
    fn adjustments_by_system() {
        let adj = InvestAdjustments {
            pv: 1.0,
            gas: 2.0,
            heat_pump: 3.0,
            district_heat: 4.0,
        };
        assert_eq!(adj.for_system(HeatingSystem::HeatPump), 3.0);
        assert_eq!(adj.for_system(HeatingSystem::DistrictHeat), 4.0);
    }
}
