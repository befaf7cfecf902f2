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
Building envelope
=================

Transmission heat loss coefficient of the building envelope.

The external walls are split into an insulated and an uninsulated part, each with its own
U-value. The total heat loss coefficient adds a fixed allowance for ventilation losses to the
transmission losses.
*/

use serde::{Deserialize, Serialize};

use crate::catalog::VENTILATION_FACTOR;

/// Geometry and thermal quality of the building envelope
///
/// Areas in m2, U-values in W/m2K.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingEnvelope {
    /// Total area of external walls [m2]
    pub wall_area: f32,
    /// Insulated share of the wall area [0, 1]
    pub wall_insulated_fraction: f32,
    /// Roof area [m2]
    pub roof_area: f32,
    /// Floor slab area [m2]
    pub floor_area: f32,
    /// Total window area [m2]
    pub window_area: f32,
    /// U-value of the insulated walls [W/m2K]
    pub u_wall_insulated: f32,
    /// U-value of the uninsulated walls [W/m2K]
    pub u_wall_uninsulated: f32,
    /// U-value of the roof [W/m2K]
    pub u_roof: f32,
    /// U-value of the floor slab [W/m2K]
    pub u_floor: f32,
    /// Mean U-value of the windows [W/m2K]
    pub u_window: f32,
}

/// Heat loss coefficient of each envelope component [W/K]
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct EnvelopeLosses {
    /// Insulated walls
    pub wall_insulated: f32,
    /// Uninsulated walls
    pub wall_uninsulated: f32,
    /// Roof
    pub roof: f32,
    /// Floor slab
    pub floor: f32,
    /// Windows
    pub window: f32,
}

impl EnvelopeLosses {
    /// Sum of the component coefficients [W/K]
    pub fn total(&self) -> f32 {
        self.wall_insulated + self.wall_uninsulated + self.roof + self.floor + self.window
    }
}

impl BuildingEnvelope {
    /// Insulated wall area [m2]
    pub fn wall_insulated_area(&self) -> f32 {
        self.wall_area * self.wall_insulated_fraction
    }

    /// Uninsulated wall area [m2]
    pub fn wall_uninsulated_area(&self) -> f32 {
        self.wall_area * (1.0 - self.wall_insulated_fraction)
    }

    /// Heat loss coefficient by component, U x A [W/K]
    pub fn losses(&self) -> EnvelopeLosses {
        EnvelopeLosses {
            wall_insulated: self.u_wall_insulated * self.wall_insulated_area(),
            wall_uninsulated: self.u_wall_uninsulated * self.wall_uninsulated_area(),
            roof: self.u_roof * self.roof_area,
            floor: self.u_floor * self.floor_area,
            window: self.u_window * self.window_area,
        }
    }

    /// Transmission heat loss coefficient H_T [W/K]
    pub fn h_t(&self) -> f32 {
        self.losses().total()
    }

    /// Total heat loss coefficient H_TR, including ventilation losses [W/K]
    pub fn h_tr(&self) -> f32 {
        self.h_t() * VENTILATION_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn envelope() -> BuildingEnvelope {
        BuildingEnvelope {
            wall_area: 300.0,
            wall_insulated_fraction: 1.0,
            roof_area: 150.0,
            floor_area: 150.0,
            window_area: 40.0,
            u_wall_insulated: 0.28,
            u_wall_uninsulated: 0.28,
            u_roof: 0.2,
            u_floor: 0.3,
            u_window: 0.9,
        }
    }

    #[test]
    fn envelope_coefficients() {
        let env = envelope();
        assert_relative_eq!(env.h_t(), 195.0, max_relative = 1e-5);
        assert_relative_eq!(env.h_tr(), 224.25, max_relative = 1e-5);
        assert_eq!(env.h_tr(), env.h_t() * VENTILATION_FACTOR);
    }

    #[test]
    fn envelope_wall_split() {
        let env = BuildingEnvelope {
            wall_insulated_fraction: 0.25,
            u_wall_uninsulated: 1.4,
            ..envelope()
        };
        let losses = env.losses();
        assert_relative_eq!(losses.wall_insulated, 75.0 * 0.28, max_relative = 1e-5);
        assert_relative_eq!(losses.wall_uninsulated, 225.0 * 1.4, max_relative = 1e-5);
        assert_relative_eq!(losses.total(), env.h_t());
    }

    #[test]
    fn uninsulated_u_value_is_irrelevant_when_fully_insulated() {
        let a = envelope();
        let b = BuildingEnvelope {
            u_wall_uninsulated: 5.0,
            ..a
        };
        assert_eq!(a.h_t(), b.h_t());
    }

    #[rstest]
    #[case::wall_area(|e: &mut BuildingEnvelope| e.wall_area += 20.0)]
    #[case::roof_area(|e: &mut BuildingEnvelope| e.roof_area += 20.0)]
    #[case::floor_area(|e: &mut BuildingEnvelope| e.floor_area += 20.0)]
    #[case::window_area(|e: &mut BuildingEnvelope| e.window_area += 20.0)]
    #[case::u_wall_insulated(|e: &mut BuildingEnvelope| e.u_wall_insulated += 0.3)]
    #[case::u_wall_uninsulated(|e: &mut BuildingEnvelope| e.u_wall_uninsulated += 0.3)]
    #[case::u_roof(|e: &mut BuildingEnvelope| e.u_roof += 0.3)]
    #[case::u_floor(|e: &mut BuildingEnvelope| e.u_floor += 0.3)]
    #[case::u_window(|e: &mut BuildingEnvelope| e.u_window += 0.3)]
    fn heat_loss_grows_with_u_values_and_areas(#[case] worsen: fn(&mut BuildingEnvelope)) {
        for fraction in [0.0, 0.4, 1.0].iter() {
            let base = BuildingEnvelope {
                wall_insulated_fraction: *fraction,
                u_wall_uninsulated: 1.4,
                ..envelope()
            };
            let mut worse = base;
            worsen(&mut worse);
            assert!(worse.h_t() >= base.h_t());
            assert!(worse.h_tr() >= base.h_tr());
        }
    }
}
