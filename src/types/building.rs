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
Building parameters
===================

Explicit configuration of a calculation, built once from the flat parameter mapping.

U-values are derived from the age class tables unless they belong to the override set. The
values in the override set were set manually and are taken as given.
*/

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

use crate::catalog::{
    building_u_value, window_u_value, EnvelopeComponent, ExistingSystem, Orientation,
    WALL_U_VALUE_ETICS, WALL_U_VALUE_PASSIVE_HOUSE,
};
use crate::costs::{Escalation, InvestAdjustments, Prices};
use crate::dispatch::{Battery, DispatchPolicy};
use crate::envelope::BuildingEnvelope;
use crate::error::{HeatCostError, Result};
use crate::pv::PvSystem;
use crate::types::{ParamVec, Params};

/// Default building age class label
pub const DEFAULT_BUILDING_AGE_CLASS: &str = "2009-2013";
/// Default window age class label
pub const DEFAULT_WINDOW_AGE_CLASS: &str = "after-2010";
/// Largest forecast horizon [years]
pub const MAX_FORECAST_YEARS: u32 = 50;

/// Insulation standard used to suggest the U-value of the insulated walls
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum WallInsulation {
    /// Typical value of the building age class
    #[strum(to_string = "age_class", serialize = "Baujahrstandard")]
    AgeClass,
    /// External thermal insulation composite system
    #[strum(to_string = "etics", serialize = "WDVS (ca. 0.25 W/m²K)")]
    Etics,
    /// Passive house level insulation
    #[strum(to_string = "passive_house", serialize = "Passivhaus (ca. 0.15 W/m²K)")]
    PassiveHouse,
    /// Value entered by the user
    #[strum(to_string = "manual", serialize = "Manuell")]
    Manual,
}

/// U-value that can be set manually
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
pub enum UValueField {
    /// Insulated walls
    WallInsulated,
    /// Uninsulated walls
    WallUninsulated,
    /// Roof
    Roof,
    /// Floor slab
    Floor,
    /// Windows
    Window,
}

impl UValueField {
    /// Parameter key of the U-value
    pub fn key(self) -> &'static str {
        match self {
            UValueField::WallInsulated => "u_wall_insulated",
            UValueField::WallUninsulated => "u_wall_uninsulated",
            UValueField::Roof => "u_roof",
            UValueField::Floor => "u_floor",
            UValueField::Window => "u_window",
        }
    }

    /// Parameter key of the "manually set" marker of the U-value
    pub fn marker_key(self) -> String {
        format!("{}_manually_set", self.key())
    }
}

/// Input data of a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingParameters {
    /// User name
    pub user_name: String,
    /// Project name
    pub project_name: String,
    /// Number of occupants
    pub persons: f32,
    /// General energy savings factor [0, 1]
    pub savings_factor: f32,
    /// Yearly household electricity entered by the user, 0 to estimate it [kWh/a]
    pub household_electricity_manual: f32,
    /// Building age class label
    pub building_age_class: String,
    /// Window age class label
    pub window_age_class: String,
    /// Insulation standard of the insulated walls
    pub wall_insulation: WallInsulation,
    /// Envelope geometry with resolved U-values
    pub envelope: BuildingEnvelope,
    /// Manually set U-values
    pub overrides: BTreeSet<UValueField>,
    /// PV array
    pub pv: PvSystem,
    /// Battery
    pub battery: Battery,
    /// PV allocation policy
    pub dispatch_policy: DispatchPolicy,
    /// First year energy prices
    pub prices: Prices,
    /// Yearly price escalation
    pub escalation: Escalation,
    /// Forecast horizon [years]
    pub forecast_years: u32,
    /// Manual investment adjustments
    pub invest_adjustments: InvestAdjustments,
    /// Heating system already installed
    pub existing_system: ExistingSystem,
}

impl Default for BuildingParameters {
    fn default() -> Self {
        BuildingParameters {
            user_name: "default".to_string(),
            project_name: "project".to_string(),
            persons: 10.0,
            savings_factor: 0.1,
            household_electricity_manual: 0.0,
            building_age_class: DEFAULT_BUILDING_AGE_CLASS.to_string(),
            window_age_class: DEFAULT_WINDOW_AGE_CLASS.to_string(),
            wall_insulation: WallInsulation::AgeClass,
            envelope: BuildingEnvelope {
                wall_area: 300.0,
                wall_insulated_fraction: 1.0,
                roof_area: 150.0,
                floor_area: 150.0,
                window_area: 40.0,
                u_wall_insulated: 0.28,
                u_wall_uninsulated: 0.28,
                u_roof: 0.20,
                u_floor: 0.30,
                u_window: 0.9,
            },
            overrides: BTreeSet::new(),
            pv: PvSystem {
                enabled: true,
                kwp: 10.0,
                specific_yield: 950.0,
                orientation: Orientation::South,
                tilt: 35.0,
            },
            battery: Battery {
                enabled: true,
                capacity: 10.0,
            },
            dispatch_policy: DispatchPolicy::SelfConsumption,
            prices: Prices {
                electricity: 0.30,
                gas: 0.10,
                district_heat: 0.12,
                feed_in: 0.08,
            },
            escalation: Escalation {
                electricity: 3.0,
                gas: 4.0,
                district_heat: 3.5,
            },
            forecast_years: 15,
            invest_adjustments: InvestAdjustments::default(),
            existing_system: ExistingSystem::None,
        }
    }
}

/// Parse an optional label parameter, using a default when missing
fn get_label<T>(params: &Params, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
{
    match params.get_str(key)? {
        None => Ok(default),
        Some(label) => label.trim().parse::<T>().map_err(|_| {
            HeatCostError::ParseError(format!("{}: {}", key, label))
        }),
    }
}

impl BuildingParameters {
    /// Build the parameters of a calculation from the flat parameter mapping
    ///
    /// Missing keys take their default values. Values of the wrong kind and unknown labels
    /// are errors, except for the age classes, which fall back to the catalog defaults.
    pub fn from_params(params: &Params) -> Result<Self> {
        let d = BuildingParameters::default();
        let num = |key: &str, default: f32| -> Result<f32> {
            Ok(params.get_f32(key)?.unwrap_or(default))
        };
        let flag = |key: &str, default: bool| -> Result<bool> {
            Ok(params.get_bool(key)?.unwrap_or(default))
        };
        let text = |key: &str, default: &str| -> Result<String> {
            Ok(params.get_str(key)?.unwrap_or(default).to_string())
        };

        let building_age_class = text("building_age_class", &d.building_age_class)?;
        let window_age_class = text("window_age_class", &d.window_age_class)?;
        let wall_insulation = get_label(params, "wall_insulation", d.wall_insulation)?;

        let mut overrides = BTreeSet::new();
        for field in UValueField::iter() {
            if flag(&field.marker_key(), false)? {
                overrides.insert(field);
            }
        }

        let age_class_u = |component: EnvelopeComponent| {
            let lookup = building_u_value(&building_age_class, component);
            if lookup.is_default() {
                warn!(
                    "Unknown building age class \"{}\", using U-value {} for {}",
                    building_age_class,
                    lookup.value(),
                    component
                );
            }
            lookup.value()
        };
        // Stored value of a U-value field, falling back to a suggestion
        let stored = |field: UValueField, suggestion: f32| -> Result<f32> {
            Ok(params.get_f32(field.key())?.unwrap_or(suggestion))
        };
        let resolve = |field: UValueField, suggestion: f32| -> Result<f32> {
            if overrides.contains(&field) {
                stored(field, suggestion)
            } else {
                Ok(suggestion)
            }
        };

        let wall_insulated_fraction =
            num("wall_insulated_fraction", d.envelope.wall_insulated_fraction)?;
        let age_class_wall = age_class_u(EnvelopeComponent::Wall);
        let wall_suggestion = match wall_insulation {
            WallInsulation::AgeClass => age_class_wall,
            WallInsulation::Etics => WALL_U_VALUE_ETICS,
            WallInsulation::PassiveHouse => WALL_U_VALUE_PASSIVE_HOUSE,
            WallInsulation::Manual => stored(UValueField::WallInsulated, age_class_wall)?,
        };
        let u_wall_insulated = resolve(UValueField::WallInsulated, wall_suggestion)?;
        let u_wall_uninsulated = if overrides.contains(&UValueField::WallUninsulated) {
            stored(UValueField::WallUninsulated, age_class_wall)?
        } else if wall_insulated_fraction >= 1.0 {
            u_wall_insulated
        } else {
            age_class_wall
        };

        let window_lookup = window_u_value(&window_age_class);
        if window_lookup.is_default() {
            warn!(
                "Unknown window age class \"{}\", using U-value {}",
                window_age_class,
                window_lookup.value()
            );
        }

        let envelope = BuildingEnvelope {
            wall_area: num("wall_area", d.envelope.wall_area)?,
            wall_insulated_fraction,
            roof_area: num("roof_area", d.envelope.roof_area)?,
            floor_area: num("floor_area", d.envelope.floor_area)?,
            window_area: num("window_area", d.envelope.window_area)?,
            u_wall_insulated,
            u_wall_uninsulated,
            u_roof: resolve(UValueField::Roof, age_class_u(EnvelopeComponent::Roof))?,
            u_floor: resolve(UValueField::Floor, age_class_u(EnvelopeComponent::Floor))?,
            u_window: resolve(UValueField::Window, window_lookup.value())?,
        };

        let forecast_years = num("forecast_years", d.forecast_years as f32)?;
        if forecast_years < 0.0 || forecast_years.fract() != 0.0 {
            return Err(HeatCostError::WrongInput(format!(
                "forecast_years should be a whole number of years: {}",
                forecast_years
            )));
        }

        Ok(BuildingParameters {
            user_name: text("user_name", &d.user_name)?,
            project_name: text("project_name", &d.project_name)?,
            persons: num("persons", d.persons)?,
            savings_factor: num("savings_factor", d.savings_factor)?,
            household_electricity_manual: num(
                "household_electricity_manual",
                d.household_electricity_manual,
            )?,
            building_age_class,
            window_age_class,
            wall_insulation,
            envelope,
            overrides,
            pv: PvSystem {
                enabled: flag("use_pv", d.pv.enabled)?,
                kwp: num("pv_kwp", d.pv.kwp)?,
                specific_yield: num("pv_specific_yield", d.pv.specific_yield)?,
                orientation: get_label(params, "pv_orientation", d.pv.orientation)?,
                tilt: num("pv_tilt", d.pv.tilt)?,
            },
            battery: Battery {
                enabled: flag("use_battery", d.battery.enabled)?,
                capacity: num("battery_kwh", d.battery.capacity)?,
            },
            dispatch_policy: get_label(params, "dispatch_policy", d.dispatch_policy)?,
            prices: Prices {
                electricity: num("price_electricity", d.prices.electricity)?,
                gas: num("price_gas", d.prices.gas)?,
                district_heat: num("price_district_heat", d.prices.district_heat)?,
                feed_in: num("feed_in_tariff", d.prices.feed_in)?,
            },
            escalation: Escalation {
                electricity: num("escalation_electricity", d.escalation.electricity)?,
                gas: num("escalation_gas", d.escalation.gas)?,
                district_heat: num("escalation_district_heat", d.escalation.district_heat)?,
            },
            forecast_years: forecast_years as u32,
            invest_adjustments: InvestAdjustments {
                pv: num("invest_adjustment_pv", 0.0)?,
                gas: num("invest_adjustment_gas", 0.0)?,
                heat_pump: num("invest_adjustment_heat_pump", 0.0)?,
                district_heat: num("invest_adjustment_district_heat", 0.0)?,
            },
            existing_system: get_label(params, "existing_system", d.existing_system)?,
        })
    }

    /// Flat parameter mapping with the resolved values and the "manually set" markers
    pub fn to_params(&self) -> Params {
        let mut p = Params::default();
        let env = &self.envelope;
        p.set_param("user_name", self.user_name.as_str());
        p.set_param("project_name", self.project_name.as_str());
        p.set_param("persons", self.persons);
        p.set_param("savings_factor", self.savings_factor);
        p.set_param("household_electricity_manual", self.household_electricity_manual);
        p.set_param("building_age_class", self.building_age_class.as_str());
        p.set_param("window_age_class", self.window_age_class.as_str());
        p.set_param("wall_insulation", self.wall_insulation.to_string());
        p.set_param("wall_area", env.wall_area);
        p.set_param("wall_insulated_fraction", env.wall_insulated_fraction);
        p.set_param("roof_area", env.roof_area);
        p.set_param("floor_area", env.floor_area);
        p.set_param("window_area", env.window_area);
        for field in UValueField::iter() {
            p.set_param(field.key(), self.u_value(field));
            p.set_param(&field.marker_key(), self.overrides.contains(&field));
        }
        p.set_param("use_pv", self.pv.enabled);
        p.set_param("pv_kwp", self.pv.kwp);
        p.set_param("pv_specific_yield", self.pv.specific_yield);
        p.set_param("pv_orientation", self.pv.orientation.to_string());
        p.set_param("pv_tilt", self.pv.tilt);
        p.set_param("use_battery", self.battery.enabled);
        p.set_param("battery_kwh", self.battery.capacity);
        p.set_param("dispatch_policy", self.dispatch_policy.to_string());
        p.set_param("price_electricity", self.prices.electricity);
        p.set_param("price_gas", self.prices.gas);
        p.set_param("price_district_heat", self.prices.district_heat);
        p.set_param("feed_in_tariff", self.prices.feed_in);
        p.set_param("escalation_electricity", self.escalation.electricity);
        p.set_param("escalation_gas", self.escalation.gas);
        p.set_param("escalation_district_heat", self.escalation.district_heat);
        p.set_param("forecast_years", self.forecast_years as f32);
        p.set_param("invest_adjustment_pv", self.invest_adjustments.pv);
        p.set_param("invest_adjustment_gas", self.invest_adjustments.gas);
        p.set_param("invest_adjustment_heat_pump", self.invest_adjustments.heat_pump);
        p.set_param("invest_adjustment_district_heat", self.invest_adjustments.district_heat);
        p.set_param("existing_system", self.existing_system.to_string());
        p
    }

    /// Resolved U-value of a field [W/m2K]
    pub fn u_value(&self, field: UValueField) -> f32 {
        let env = &self.envelope;
        match field {
            UValueField::WallInsulated => env.u_wall_insulated,
            UValueField::WallUninsulated => env.u_wall_uninsulated,
            UValueField::Roof => env.u_roof,
            UValueField::Floor => env.u_floor,
            UValueField::Window => env.u_window,
        }
    }

    /// Check that the values are inside their domain
    pub fn validate(&self) -> Result<()> {
        let env = &self.envelope;
        let non_negative = [
            ("wall_area", env.wall_area),
            ("roof_area", env.roof_area),
            ("floor_area", env.floor_area),
            ("window_area", env.window_area),
            ("u_wall_insulated", env.u_wall_insulated),
            ("u_wall_uninsulated", env.u_wall_uninsulated),
            ("u_roof", env.u_roof),
            ("u_floor", env.u_floor),
            ("u_window", env.u_window),
            ("household_electricity_manual", self.household_electricity_manual),
            ("pv_kwp", self.pv.kwp),
            ("pv_specific_yield", self.pv.specific_yield),
            ("battery_kwh", self.battery.capacity),
            ("price_electricity", self.prices.electricity),
            ("price_gas", self.prices.gas),
            ("price_district_heat", self.prices.district_heat),
            ("feed_in_tariff", self.prices.feed_in),
        ];
        for (key, value) in non_negative.iter() {
            if !(*value >= 0.0) {
                return Err(out_of_domain(key, *value, "should not be negative"));
            }
        }
        let ranges = [
            ("wall_insulated_fraction", env.wall_insulated_fraction, 0.0, 1.0),
            ("savings_factor", self.savings_factor, 0.0, 1.0),
            ("pv_tilt", self.pv.tilt, 0.0, 90.0),
        ];
        for (key, value, min, max) in ranges.iter() {
            if !(*value >= *min && *value <= *max) {
                return Err(out_of_domain(
                    key,
                    *value,
                    &format!("should be in [{}, {}]", min, max),
                ));
            }
        }
        if !(self.persons >= 1.0) {
            return Err(out_of_domain("persons", self.persons, "should be at least 1"));
        }
        if self.persons.fract() != 0.0 {
            return Err(out_of_domain("persons", self.persons, "should be a whole number"));
        }
        if self.forecast_years < 1 || self.forecast_years > MAX_FORECAST_YEARS {
            return Err(out_of_domain(
                "forecast_years",
                self.forecast_years as f32,
                &format!("should be in [1, {}]", MAX_FORECAST_YEARS),
            ));
        }
        Ok(())
    }
}

fn out_of_domain(key: &str, value: f32, reason: &str) -> HeatCostError {
    warn!("Parameter out of domain: {} = {}", key, value);
    HeatCostError::WrongInput(format!("{} = {} {}", key, value, reason))
}
