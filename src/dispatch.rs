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
Dispatch simulation
===================

Month by month allocation of the PV generation between direct use, battery storage and grid
export, and coverage of the electricity demand by PV, battery and grid.

The simulation is a left fold over the months. Each step takes the battery state of charge
left by the previous month and returns the new state together with the energy flows of the
month. Every run starts with an empty battery.

The dispatch policies only differ in the order in which the PV generation is allocated:

- `ExportFirst`: a fixed share of the generation (capped by demand) is used on site and the
  rest is exported. The battery is never charged.
- `SelfConsumption`: household and heating system demand first, then the battery, then export.
- `StrongSelfConsumption`: household demand first, then the battery, then the heating system
  demand, then export.

Any demand left after direct PV use is covered by the battery, within its stored energy and
discharge losses, and then by the grid.
*/

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, trace};

use crate::catalog::{HeatingSystemProfile, BATTERY_EFFICIENCY, EXPORT_FIRST_DIRECT_SHARE};
use crate::types::{MonthFlows, MonthlyEnergyDemand};
use crate::vecops::{vecsum, vecvecsum};

/// PV allocation policy
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum DispatchPolicy {
    /// Maximum export: a fixed share of the generation, capped by demand, is used on site and
    /// the rest is exported
    #[strum(to_string = "export-first", serialize = "Maximale Einspeisung (Netz zuerst)")]
    ExportFirst,
    /// Self consumption: household > heating system > battery > grid
    #[strum(
        to_string = "self-consumption",
        serialize = "Eigenverbrauch priorisieren (Haushalt > WP > Speicher > Netz)"
    )]
    SelfConsumption,
    /// Strong self consumption: household > battery > heating system > grid
    #[strum(
        to_string = "strong-self-consumption",
        serialize = "Eigenverbrauch stark priorisieren (Haushalt > Speicher > WP > Netz)"
    )]
    StrongSelfConsumption,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        DispatchPolicy::SelfConsumption
    }
}

/// Electricity demand and PV generation of a month [kWh]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MonthDemand {
    /// Household electricity
    pub household: f32,
    /// Heating system electricity
    pub system: f32,
    /// PV generation
    pub pv: f32,
}

impl MonthDemand {
    /// Total electricity demand
    pub fn total(&self) -> f32 {
        self.household + self.system
    }
}

/// Allocation of the PV generation of a month [kWh]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Allocation {
    /// Direct use on site
    pub direct: f32,
    /// Sent to the battery (before charge losses)
    pub charge: f32,
    /// Exported to the grid
    pub export: f32,
}

impl DispatchPolicy {
    /// Split the PV generation `pv` between direct use, battery charge and export
    ///
    /// `charge_room` is the largest energy the battery can take before charge losses.
    pub fn allocate(self, pv: f32, demand: &MonthDemand, charge_room: f32) -> Allocation {
        let pv = pv.max(0.0);
        let total = demand.total().max(0.0);
        let charge_room = charge_room.max(0.0);
        match self {
            DispatchPolicy::ExportFirst => {
                let direct = (pv * EXPORT_FIRST_DIRECT_SHARE).min(total);
                Allocation {
                    direct,
                    charge: 0.0,
                    export: (pv - direct).max(0.0),
                }
            }
            DispatchPolicy::SelfConsumption => {
                let direct = pv.min(total);
                let surplus = (pv - direct).max(0.0);
                let charge = surplus.min(charge_room);
                Allocation {
                    direct,
                    charge,
                    export: (surplus - charge).max(0.0),
                }
            }
            DispatchPolicy::StrongSelfConsumption => {
                let direct_household = pv.min(demand.household.max(0.0));
                let surplus = (pv - direct_household).max(0.0);
                let charge = surplus.min(charge_room);
                let surplus = (surplus - charge).max(0.0);
                let direct_system = surplus.min((total - direct_household).max(0.0));
                Allocation {
                    direct: direct_household + direct_system,
                    charge,
                    export: (surplus - direct_system).max(0.0),
                }
            }
        }
    }
}

/// Electrical storage
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    /// Is there a battery?
    pub enabled: bool,
    /// Nominal capacity [kWh]
    pub capacity: f32,
}

impl Battery {
    /// Capacity available to the simulation [kWh], zero without battery
    pub fn usable_capacity(&self) -> f32 {
        if self.enabled {
            self.capacity.max(0.0)
        } else {
            0.0
        }
    }

    /// Charge and discharge efficiency [-]
    pub fn efficiency(&self) -> f32 {
        if self.enabled {
            BATTERY_EFFICIENCY
        } else {
            1.0
        }
    }
}

/// Simulation state carried from month to month
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DispatchState {
    /// Battery state of charge [kWh]
    pub soc: f32,
}

/// Settings of a dispatch simulation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DispatchConfig {
    /// PV allocation policy
    pub policy: DispatchPolicy,
    /// Battery
    pub battery: Battery,
    /// Is PV generation available?
    pub use_pv: bool,
}

/// Simulate a single month
///
/// Returns the state left for the next month and the energy flows of this month.
pub fn step(
    config: &DispatchConfig,
    state: DispatchState,
    month: &MonthDemand,
) -> (DispatchState, MonthFlows) {
    let capacity = config.battery.usable_capacity();
    let eff = config.battery.efficiency();
    let soc = state.soc.max(0.0).min(capacity);
    let pv = if config.use_pv { month.pv.max(0.0) } else { 0.0 };
    let demand = month.total().max(0.0);

    let charge_room = if capacity > 0.0 {
        ((capacity - soc) / eff).max(0.0)
    } else {
        0.0
    };
    let alloc = config.policy.allocate(pv, month, charge_room);
    let soc = (soc + alloc.charge * eff).min(capacity);

    let deficit = (demand - alloc.direct).max(0.0);
    let (delivered, discharge) = if deficit > 0.0 && soc > 0.0 {
        let delivered = deficit.min(soc * eff);
        (delivered, delivered / eff)
    } else {
        (0.0, 0.0)
    };
    let soc = (soc - discharge).max(0.0).min(capacity);

    let flows = MonthFlows {
        pv_generation: pv,
        demand,
        pv_direct: alloc.direct,
        pv_export: alloc.export,
        battery_charge: alloc.charge,
        battery_discharge: discharge,
        battery_delivered: delivered,
        grid_import: (deficit - delivered).max(0.0),
        soc,
    };
    trace!("Dispatch step: {:?}", flows);
    (DispatchState { soc }, flows)
}

/// Simulate a sequence of months, starting with an empty battery
pub fn simulate(config: &DispatchConfig, months: &[MonthDemand]) -> Vec<MonthFlows> {
    let (_, flows) = months.iter().fold(
        (DispatchState::default(), Vec::with_capacity(months.len())),
        |(state, mut flows), month| {
            let (next, month_flows) = step(config, state, month);
            flows.push(month_flows);
            (next, flows)
        },
    );
    flows
}

/// Monthly energy use of a heating system [kWh]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemEnergy {
    /// Energy used by the system to deliver the heat
    pub input: Vec<f32>,
    /// Electricity use of the system
    pub electricity: Vec<f32>,
    /// Fuel use (gas or district heat) of the system
    pub fuel: Vec<f32>,
}

/// Energy use of a heating system to deliver the monthly heat `heat` [kWh]
pub fn system_energy(profile: &HeatingSystemProfile, heat: &[f32]) -> SystemEnergy {
    let input: Vec<f32> = heat.iter().map(|q| q / profile.efficiency).collect();
    let (electricity, fuel) = if profile.is_electric() {
        (input.clone(), vec![0.0; input.len()])
    } else {
        let aux = profile.aux_electricity_share;
        (
            input.iter().map(|e| e * aux).collect(),
            input.iter().map(|e| e * (1.0 - aux)).collect(),
        )
    };
    SystemEnergy {
        input,
        electricity,
        fuel,
    }
}

/// Dispatch simulation of a heating system
#[derive(Debug, Clone, PartialEq)]
pub struct SystemDispatch {
    /// Energy use of the heating system
    pub energy: SystemEnergy,
    /// Monthly electricity flows
    pub months: Vec<MonthFlows>,
}

impl SystemDispatch {
    /// Yearly grid import [kWh/a]
    pub fn grid_import(&self) -> f32 {
        self.months.iter().map(|m| m.grid_import).sum()
    }

    /// Yearly PV direct use [kWh/a]
    pub fn pv_direct(&self) -> f32 {
        self.months.iter().map(|m| m.pv_direct).sum()
    }

    /// Yearly PV export [kWh/a]
    pub fn pv_export(&self) -> f32 {
        self.months.iter().map(|m| m.pv_export).sum()
    }

    /// Yearly fuel use [kWh/a]
    pub fn fuel(&self) -> f32 {
        vecsum(&self.energy.fuel)
    }

    /// Monthly grid import [kWh]
    pub fn monthly_grid_import(&self) -> Vec<f32> {
        self.months.iter().map(|m| m.grid_import).collect()
    }
}

/// Run the dispatch simulation of a heating system for the building demand
pub fn dispatch_system(
    profile: &HeatingSystemProfile,
    demand: &MonthlyEnergyDemand,
    config: &DispatchConfig,
) -> SystemDispatch {
    let energy = system_energy(profile, &demand.heat());
    let months: Vec<MonthDemand> = demand
        .household
        .iter()
        .zip(energy.electricity.iter())
        .zip(demand.pv.iter())
        .map(|((household, system), pv)| MonthDemand {
            household: *household,
            system: *system,
            pv: *pv,
        })
        .collect();
    let res = SystemDispatch {
        months: simulate(config, &months),
        energy,
    };
    debug!(
        "{}: electricity demand {:.1} kWh, grid {:.1} kWh, fuel {:.1} kWh, PV direct {:.1} kWh, PV export {:.1} kWh",
        profile.name,
        vecsum(&vecvecsum(&demand.household, &res.energy.electricity)),
        res.grid_import(),
        res.fuel(),
        res.pv_direct(),
        res.pv_export()
    );
    res
}
