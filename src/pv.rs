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
Photovoltaic yield
==================

Yearly PV generation, corrected for orientation and tilt, distributed over the months with
the relative yield table.
*/

use serde::{Deserialize, Serialize};

use crate::catalog::{Orientation, PV_MONTHLY_SHAPE, PV_OPTIMAL_TILT, PV_TILT_PENALTY};
use crate::vecops::veckmul;

/// PV array configuration
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PvSystem {
    /// Is there a PV array?
    pub enabled: bool,
    /// Peak power [kWp]
    pub kwp: f32,
    /// Specific yearly yield of a south facing array at optimal tilt [kWh/kWp]
    pub specific_yield: f32,
    /// Array orientation
    pub orientation: Orientation,
    /// Module tilt [º], expected in [0, 90]
    pub tilt: f32,
}

/// Tilt correction factor [-]
///
/// Decreases linearly with the deviation from the optimal tilt. Tilts outside [0, 90] are not
/// clamped.
pub fn tilt_factor(tilt: f32) -> f32 {
    1.0 - (tilt - PV_OPTIMAL_TILT).abs() / 90.0 * PV_TILT_PENALTY
}

impl PvSystem {
    /// Yearly PV generation [kWh/a], zero without PV array
    pub fn annual_yield(&self) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        self.kwp * self.specific_yield * self.orientation.factor() * tilt_factor(self.tilt)
    }

    /// Monthly PV generation [kWh], January to December
    pub fn monthly_yield(&self) -> Vec<f32> {
        veckmul(&PV_MONTHLY_SHAPE, self.annual_yield())
    }
}
