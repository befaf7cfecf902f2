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

use crate::vecops::{vecsum, vecvecsum};

/// Monthly energy demand and PV generation of the building [kWh], January to December
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyEnergyDemand {
    /// Space heating energy demand
    pub heating: Vec<f32>,
    /// Domestic hot water energy demand
    pub dhw: Vec<f32>,
    /// Household electricity demand
    pub household: Vec<f32>,
    /// PV generation
    pub pv: Vec<f32>,
}

impl MonthlyEnergyDemand {
    /// Heat to be delivered by the heating system (space heating + DHW)
    pub fn heat(&self) -> Vec<f32> {
        vecvecsum(&self.heating, &self.dhw)
    }

    /// Yearly space heating demand [kWh/a]
    pub fn annual_heating(&self) -> f32 {
        vecsum(&self.heating)
    }

    /// Yearly DHW demand [kWh/a]
    pub fn annual_dhw(&self) -> f32 {
        vecsum(&self.dhw)
    }

    /// Yearly household electricity demand [kWh/a]
    pub fn annual_household(&self) -> f32 {
        vecsum(&self.household)
    }

    /// Yearly PV generation [kWh/a]
    pub fn annual_pv(&self) -> f32 {
        vecsum(&self.pv)
    }
}
