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

use serde::Serialize;

use crate::catalog::{FuelType, HeatingSystem};

/// Electricity flows of one month of the dispatch simulation [kWh]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct MonthFlows {
    /// Available PV generation
    pub pv_generation: f32,
    /// Total electricity demand (household + heating system)
    pub demand: f32,
    /// PV generation used directly on site
    pub pv_direct: f32,
    /// PV generation exported to the grid
    pub pv_export: f32,
    /// PV generation sent to the battery (before charge losses)
    pub battery_charge: f32,
    /// Energy withdrawn from the battery (before discharge losses)
    pub battery_discharge: f32,
    /// Energy delivered by the battery to the demand (after discharge losses)
    pub battery_delivered: f32,
    /// Electricity imported from the grid
    pub grid_import: f32,
    /// Battery state of charge at the end of the month
    pub soc: f32,
}

/// Yearly energy and cost figures of one heating system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemResult {
    /// Heating system
    pub system: HeatingSystem,
    /// Display name of the system
    pub name: String,
    /// Energy carrier of the system
    pub fuel: FuelType,
    /// Investment in the heating system, including its adjustment [€]
    pub investment: f32,
    /// Investment in the heating system plus the PV array and battery, when present [€]
    pub investment_total: f32,
    /// Yearly energy cost (grid electricity + fuel - feed-in revenue) [€/a]
    pub energy_cost: f32,
    /// Yearly maintenance cost [€/a]
    pub maintenance_cost: f32,
    /// Yearly operating cost (energy + maintenance) [€/a]
    pub total_annual_cost: f32,
    /// Yearly grid electricity import [kWh/a]
    pub grid_import: f32,
    /// Yearly fuel use (gas or district heat, zero for electric systems) [kWh/a]
    pub fuel_consumption: f32,
    /// Yearly PV generation used directly on site [kWh/a]
    pub pv_self_consumption: f32,
    /// Yearly PV export [kWh/a]
    pub pv_export: f32,
    /// Monthly grid electricity import [kWh]
    pub monthly_grid_import: Vec<f32>,
    /// Monthly electricity use of the heating system [kWh]
    pub monthly_system_electricity: Vec<f32>,
}

impl SystemResult {
    /// Yearly gas use [kWh/a]
    pub fn gas_consumption(&self) -> f32 {
        match self.fuel {
            FuelType::Gas => self.fuel_consumption,
            _ => 0.0,
        }
    }

    /// Yearly district heat use [kWh/a]
    pub fn district_heat_consumption(&self) -> f32 {
        match self.fuel {
            FuelType::DistrictHeat => self.fuel_consumption,
            _ => 0.0,
        }
    }
}

/// Operating and cumulative cost of a system in a forecast year
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    /// Heating system
    pub system: HeatingSystem,
    /// Forecast year (1 = first year)
    pub year: u32,
    /// Operating cost of the year [€]
    pub annual_cost: f32,
    /// Investment plus operating costs up to this year [€]
    pub cumulative_cost: f32,
}
