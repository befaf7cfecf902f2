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
Auxiliary demand
================

Domestic hot water and household electricity demand from the building occupancy.

Both demands are spread uniformly over the months.
*/

use crate::catalog::{
    DHW_PER_PERSON, DHW_SAVINGS_WEIGHT, HOUSEHOLD_BASE_PER_UNIT, HOUSEHOLD_PER_PERSON,
    PERSONS_PER_UNIT,
};

/// Yearly domestic hot water demand [kWh/a]
///
/// Only half of the savings factor applies to hot water.
pub fn dhw_annual(persons: f32, savings_factor: f32) -> f32 {
    persons * DHW_PER_PERSON * (1.0 - savings_factor * DHW_SAVINGS_WEIGHT)
}

/// Estimated number of dwelling units (at least one)
pub fn household_units(persons: f32) -> f32 {
    (persons / PERSONS_PER_UNIT).round().max(1.0)
}

/// Yearly household electricity demand [kWh/a]
///
/// A manual value greater than zero replaces the estimate from occupancy.
pub fn household_annual(persons: f32, savings_factor: f32, manual: f32) -> f32 {
    if manual > 0.0 {
        return manual;
    }
    (persons * HOUSEHOLD_PER_PERSON + household_units(persons) * HOUSEHOLD_BASE_PER_UNIT)
        * (1.0 - savings_factor)
}

/// Uniform monthly distribution of a yearly demand
pub fn uniform_monthly(annual: f32) -> Vec<f32> {
    vec![annual / 12.0; 12]
}
