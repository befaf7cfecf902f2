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

//! Heating system catalog

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Candidate heating system
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum HeatingSystem {
    /// Gas condensing boiler
    #[strum(to_string = "gas", serialize = "Gasheizung")]
    Gas,
    /// Air to water heat pump
    #[strum(to_string = "heat-pump", serialize = "Wärmepumpe (Luft-Wasser)")]
    HeatPump,
    /// District heating substation
    #[strum(to_string = "district-heat", serialize = "Fernwärme")]
    DistrictHeat,
}

/// Energy carrier used by a heating system
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FuelType {
    /// Natural gas
    #[strum(to_string = "gas")]
    Gas,
    /// Grid or PV electricity
    #[strum(to_string = "electricity")]
    Electricity,
    /// District heat
    #[strum(to_string = "district-heat")]
    DistrictHeat,
}

/// Heating system already installed in the building
///
/// Informative only. Its residual value or dismantling cost is expressed through the
/// investment adjustments of the new systems.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum ExistingSystem {
    /// No heating system
    #[strum(to_string = "none", serialize = "Keines")]
    None,
    /// Old gas boiler
    #[strum(to_string = "old-gas", serialize = "Alte Gasheizung")]
    OldGas,
    /// Old oil boiler
    #[strum(to_string = "old-oil", serialize = "Alte Ölheizung")]
    OldOil,
    /// Old heat pump
    #[strum(to_string = "old-heat-pump", serialize = "Alte Wärmepumpe")]
    OldHeatPump,
    /// Any other system
    #[strum(to_string = "other", serialize = "Sonstiges")]
    Other,
}

impl Default for ExistingSystem {
    fn default() -> Self {
        ExistingSystem::None
    }
}

/// Catalog entry of a heating system
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct HeatingSystemProfile {
    /// System identifier
    pub system: HeatingSystem,
    /// Display name
    pub name: &'static str,
    /// Conversion efficiency (seasonal performance factor for heat pumps) [-]
    pub efficiency: f32,
    /// Energy carrier
    pub fuel: FuelType,
    /// Share of the delivered energy that is auxiliary electricity [-]
    pub aux_electricity_share: f32,
    /// Fixed installation cost [€]
    pub install_fixed: f32,
    /// Installation cost per kW of design heat load [€/kW]
    pub install_per_kw: f32,
    /// Yearly maintenance cost [€/a]
    pub maintenance: f32,
}

impl HeatingSystemProfile {
    /// Does the system run on electricity only?
    pub fn is_electric(&self) -> bool {
        self.fuel == FuelType::Electricity
    }
}

/// Heating system catalog, in comparison order
pub const HEATING_SYSTEMS: [HeatingSystemProfile; 3] = [
    HeatingSystemProfile {
        system: HeatingSystem::Gas,
        name: "Gas boiler",
        efficiency: 0.90,
        fuel: FuelType::Gas,
        aux_electricity_share: 0.02,
        install_fixed: 6000.0,
        install_per_kw: 500.0,
        maintenance: 300.0,
    },
    HeatingSystemProfile {
        system: HeatingSystem::HeatPump,
        name: "Heat pump (air-water)",
        efficiency: 3.5,
        fuel: FuelType::Electricity,
        aux_electricity_share: 1.0,
        install_fixed: 15000.0,
        install_per_kw: 700.0,
        maintenance: 250.0,
    },
    HeatingSystemProfile {
        system: HeatingSystem::DistrictHeat,
        name: "District heating",
        efficiency: 0.98,
        fuel: FuelType::DistrictHeat,
        aux_electricity_share: 0.01,
        install_fixed: 8000.0,
        install_per_kw: 300.0,
        maintenance: 150.0,
    },
];

impl HeatingSystem {
    /// Catalog entry of the system
    pub fn profile(self) -> &'static HeatingSystemProfile {
        match self {
            HeatingSystem::Gas => &HEATING_SYSTEMS[0],
            HeatingSystem::HeatPump => &HEATING_SYSTEMS[1],
            HeatingSystem::DistrictHeat => &HEATING_SYSTEMS[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn catalog_is_indexed_by_system() {
        for system in HeatingSystem::iter() {
            assert_eq!(system.profile().system, system);
        }
        assert!(HeatingSystem::HeatPump.profile().is_electric());
        assert!(!HeatingSystem::Gas.profile().is_electric());
    }

    #[test]
    fn system_labels() {
        assert_eq!(
            "Wärmepumpe (Luft-Wasser)".parse::<HeatingSystem>().unwrap(),
            HeatingSystem::HeatPump
        );
        assert_eq!(HeatingSystem::DistrictHeat.to_string(), "district-heat");
        assert_eq!("Alte Ölheizung".parse::<ExistingSystem>().unwrap(), ExistingSystem::OldOil);
    }
}
