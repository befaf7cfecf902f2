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
System comparison
=================

Runs the dispatch simulation and the cost model for every heating system of the catalog and
ranks the systems by their cumulative cost at the end of the forecast horizon.

All systems share the building demand and PV generation. The forecast keeps the first year
energy quantities and only escalates prices.
*/

use serde::Serialize;
use tracing::{debug, info};

use crate::auxiliary::{dhw_annual, household_annual, uniform_monthly};
use crate::catalog::{HeatingSystem, HeatingSystemProfile, HEATING_SYSTEMS};
use crate::costs::{
    energy_cost, investment_cost, operating_cost, pv_investment_cost, EnergyQuantities, Prices,
};
use crate::dispatch::{dispatch_system, DispatchConfig, SystemDispatch};
use crate::envelope::EnvelopeLosses;
use crate::heating::{design_heat_load, heating_months, monthly_heating_demand, HeatingMonth};
use crate::types::{BuildingParameters, ForecastEntry, MonthlyEnergyDemand, SystemResult};

/// Cheapest system at the forecast horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Heating system
    pub system: HeatingSystem,
    /// Display name of the system
    pub name: String,
    /// Cumulative cost at the horizon [€]
    pub cumulative_cost: f32,
    /// Forecast horizon [years]
    pub years: u32,
}

/// Complete result of a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Input data
    pub params: BuildingParameters,
    /// Heat loss coefficient by envelope component [W/K]
    pub losses: EnvelopeLosses,
    /// Transmission heat loss coefficient [W/K]
    pub h_t: f32,
    /// Total heat loss coefficient, with ventilation [W/K]
    pub h_tr: f32,
    /// Design heat load [kW]
    pub design_heat_load: f32,
    /// Heating demand of the reference months
    pub heating_months: Vec<HeatingMonth>,
    /// Monthly energy demand and PV generation
    pub demand: MonthlyEnergyDemand,
    /// Investment in the PV array and battery [€]
    pub pv_investment: f32,
    /// Yearly results, in catalog order
    pub results: Vec<SystemResult>,
    /// Cost forecast, by system and year
    pub forecast: Vec<ForecastEntry>,
    /// Systems and cumulative costs at the horizon, cheapest first
    pub ranking: Vec<(HeatingSystem, f32)>,
    /// Cheapest system at the horizon
    pub recommended: Option<Recommendation>,
}

impl Comparison {
    /// Result of a heating system
    pub fn result(&self, system: HeatingSystem) -> Option<&SystemResult> {
        self.results.iter().find(|r| r.system == system)
    }

    /// Forecast of a heating system, by year
    pub fn forecast_for(&self, system: HeatingSystem) -> Vec<&ForecastEntry> {
        self.forecast.iter().filter(|e| e.system == system).collect()
    }
}

/// Monthly energy demand and PV generation of the building
pub fn monthly_demand(params: &BuildingParameters) -> MonthlyEnergyDemand {
    let h_tr = params.envelope.h_tr();
    let dhw = dhw_annual(params.persons, params.savings_factor);
    let household = household_annual(
        params.persons,
        params.savings_factor,
        params.household_electricity_manual,
    );
    MonthlyEnergyDemand {
        heating: monthly_heating_demand(h_tr),
        dhw: uniform_monthly(dhw),
        household: uniform_monthly(household),
        pv: params.pv.monthly_yield(),
    }
}

/// Yearly result of a heating system
pub fn system_result(
    profile: &HeatingSystemProfile,
    dispatch: &SystemDispatch,
    params: &BuildingParameters,
    design_load: f32,
    pv_investment: f32,
) -> SystemResult {
    let quantities = quantities(dispatch);
    let energy = energy_cost(&quantities, profile.fuel, &params.prices);
    let investment = investment_cost(
        profile,
        design_load,
        params.invest_adjustments.for_system(profile.system),
    );
    SystemResult {
        system: profile.system,
        name: profile.name.to_string(),
        fuel: profile.fuel,
        investment,
        investment_total: investment + pv_investment,
        energy_cost: energy,
        maintenance_cost: profile.maintenance,
        total_annual_cost: energy + profile.maintenance,
        grid_import: quantities.grid_import,
        fuel_consumption: quantities.fuel,
        pv_self_consumption: dispatch.pv_direct(),
        pv_export: quantities.pv_export,
        monthly_grid_import: dispatch.monthly_grid_import(),
        monthly_system_electricity: dispatch.energy.electricity.clone(),
    }
}

fn quantities(dispatch: &SystemDispatch) -> EnergyQuantities {
    EnergyQuantities {
        grid_import: dispatch.grid_import(),
        fuel: dispatch.fuel(),
        pv_export: dispatch.pv_export(),
    }
}

/// Year by year operating and cumulative cost of a system
///
/// The cumulative cost starts with the total investment. Each year adds the operating cost
/// at that year's prices, and prices escalate after every year.
pub fn cost_forecast(
    result: &SystemResult,
    prices: &Prices,
    params: &BuildingParameters,
) -> Vec<ForecastEntry> {
    let profile = result.system.profile();
    let quantities = EnergyQuantities {
        grid_import: result.grid_import,
        fuel: result.fuel_consumption,
        pv_export: result.pv_export,
    };
    let mut prices = *prices;
    let mut cumulative = result.investment_total;
    (1..=params.forecast_years)
        .map(|year| {
            let annual = operating_cost(&quantities, profile, &prices);
            cumulative += annual;
            prices = prices.escalate(&params.escalation);
            ForecastEntry {
                system: result.system,
                year,
                annual_cost: annual,
                cumulative_cost: cumulative,
            }
        })
        .collect()
}

/// Systems ordered by cumulative cost at the horizon, ties in catalog order
fn rank(
    results: &[SystemResult],
    forecast: &[ForecastEntry],
    years: u32,
) -> Vec<(HeatingSystem, f32)> {
    let mut ranking: Vec<(HeatingSystem, f32)> = results
        .iter()
        .map(|r| {
            let at_horizon = forecast
                .iter()
                .find(|e| e.system == r.system && e.year == years)
                .map(|e| e.cumulative_cost)
                .unwrap_or(r.investment_total);
            (r.system, at_horizon)
        })
        .collect();
    // sort_by is stable, so equal costs keep the catalog order
    ranking.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    ranking
}

/// Compare all heating systems of the catalog for a building
pub fn compare_systems(params: &BuildingParameters) -> Comparison {
    let losses = params.envelope.losses();
    let h_t = losses.total();
    let h_tr = params.envelope.h_tr();
    let design_load = design_heat_load(h_tr);
    let demand = monthly_demand(params);
    debug!(
        "H_T = {:.2} W/K, H_TR = {:.2} W/K, design heat load = {:.2} kW",
        h_t, h_tr, design_load
    );
    debug!(
        "Yearly demand: heating {:.1} kWh, DHW {:.1} kWh, household {:.1} kWh, PV {:.1} kWh",
        demand.annual_heating(),
        demand.annual_dhw(),
        demand.annual_household(),
        demand.annual_pv()
    );

    let pv_investment = pv_investment_cost(
        &params.pv,
        &params.battery,
        params.invest_adjustments.pv,
    );
    let config = DispatchConfig {
        policy: params.dispatch_policy,
        battery: params.battery,
        use_pv: params.pv.enabled,
    };

    let results: Vec<SystemResult> = HEATING_SYSTEMS
        .iter()
        .map(|profile| {
            let dispatch = dispatch_system(profile, &demand, &config);
            system_result(profile, &dispatch, params, design_load, pv_investment)
        })
        .collect();
    let forecast: Vec<ForecastEntry> = results
        .iter()
        .flat_map(|r| cost_forecast(r, &params.prices, params))
        .collect();
    let ranking = rank(&results, &forecast, params.forecast_years);
    let recommended = ranking.first().map(|(system, cost)| Recommendation {
        system: *system,
        name: system.profile().name.to_string(),
        cumulative_cost: *cost,
        years: params.forecast_years,
    });
    if let Some(rec) = &recommended {
        info!(
            "Cheapest system after {} years: {} ({:.0} €)",
            rec.years, rec.name, rec.cumulative_cost
        );
    }

    Comparison {
        params: params.clone(),
        losses,
        h_t,
        h_tr,
        design_heat_load: design_load,
        heating_months: heating_months(h_tr),
        demand,
        pv_investment,
        results,
        forecast,
        ranking,
        recommended,
    }
}
