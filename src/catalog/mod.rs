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

/*! # Reference data

Static reference tables and fixed model constants:

- typical U-values by building and window age class
- reference climate (monthly mean, minimum and maximum temperatures)
- relative monthly PV yield and intra-day shapes
- heating system catalog

Lookups by textual key never fail. An unknown key yields a documented default, tagged as
such with [`Lookup::Default`] so callers can detect a probable typo in the key.
*/

mod climate;
mod solar;
mod systems;
mod uvalues;

pub use climate::*;
pub use solar::*;
pub use systems::*;
pub use uvalues::*;

/// Heating limit temperature [ºC]. Months with a lower mean temperature need heating.
pub const HEATING_THRESHOLD_TEMP: f32 = 15.0;
/// Indoor setpoint temperature [ºC]
pub const INDOOR_SETPOINT_TEMP: f32 = 20.0;
/// Outdoor design temperature for the heat load [ºC]
pub const DESIGN_OUTDOOR_TEMP: f32 = -14.0;
/// Transmission to total heat loss factor (fixed 15% allowance for ventilation losses)
pub const VENTILATION_FACTOR: f32 = 1.15;

/// Yearly domestic hot water demand per person [kWh/a]
pub const DHW_PER_PERSON: f32 = 600.0;
/// Share of the savings factor applied to domestic hot water demand [-]
pub const DHW_SAVINGS_WEIGHT: f32 = 0.5;
/// Yearly household electricity per person [kWh/a]
pub const HOUSEHOLD_PER_PERSON: f32 = 1000.0;
/// Yearly base load of household electricity per dwelling unit [kWh/a]
pub const HOUSEHOLD_BASE_PER_UNIT: f32 = 800.0;
/// Mean number of persons per dwelling unit, used to estimate the number of units
pub const PERSONS_PER_UNIT: f32 = 2.5;

/// Specific investment of the PV system [€/kWp]
pub const PV_COST_PER_KWP: f32 = 1400.0;
/// Specific investment of the battery [€/kWh]
pub const BATTERY_COST_PER_KWH: f32 = 800.0;
/// Charge and discharge efficiency of the battery [-]
pub const BATTERY_EFFICIENCY: f32 = 0.9;
/// Share of the PV generation that can be used directly under the export first policy [-]
pub const EXPORT_FIRST_DIRECT_SHARE: f32 = 0.2;

/// Result of a catalog lookup
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Lookup<T> {
    /// Value found in the catalog
    Found(T),
    /// Key not found, default value used
    Default(T),
}

impl<T: Copy> Lookup<T> {
    /// Looked up or default value
    pub fn value(&self) -> T {
        match *self {
            Lookup::Found(v) | Lookup::Default(v) => v,
        }
    }

    /// Was the default value used?
    pub fn is_default(&self) -> bool {
        match self {
            Lookup::Default(_) => true,
            Lookup::Found(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_value_and_kind() {
        assert_eq!(Lookup::Found(0.3).value(), 0.3);
        assert_eq!(Lookup::Default(1.3).value(), 1.3);
        assert!(Lookup::Default(0.0).is_default());
        assert!(!Lookup::Found(0.0).is_default());
    }
}
