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

//! Photovoltaic yield distribution and intra-day demand shapes

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Relative monthly PV yield, January to December (adds up to 1.0)
pub const PV_MONTHLY_SHAPE: [f32; 12] = [
    0.025, 0.045, 0.08, 0.11, 0.13, 0.14, 0.13, 0.12, 0.09, 0.06, 0.035, 0.025,
];

/// Module tilt with the highest yield [º]
pub const PV_OPTIMAL_TILT: f32 = 35.0;
/// Yield reduction at the maximum deviation (90º) from the optimal tilt [-]
pub const PV_TILT_PENALTY: f32 = 0.3;

/// Relative hourly PV generation on a typical day (0h to 23h)
pub const HOURLY_PV_SHAPE: [f32; 24] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.05, 0.2, 0.4, 0.6, 0.8, 0.95, 1.0, 0.95, 0.8, 0.6, 0.4, 0.2,
    0.05, 0.0, 0.0, 0.0, 0.0, 0.0,
];

/// Relative hourly household electricity use on a typical day (0h to 23h)
pub const HOURLY_HOUSEHOLD_SHAPE: [f32; 24] = [
    0.03, 0.025, 0.02, 0.02, 0.025, 0.035, 0.045, 0.05, 0.045, 0.04, 0.038, 0.038, 0.04, 0.04,
    0.042, 0.045, 0.05, 0.06, 0.06, 0.055, 0.05, 0.04, 0.035, 0.032,
];

/// Relative hourly domestic hot water use on a typical day (0h to 23h)
pub const HOURLY_DHW_SHAPE: [f32; 24] = [
    0.03, 0.02, 0.02, 0.02, 0.03, 0.05, 0.07, 0.06, 0.04, 0.03, 0.03, 0.03, 0.03, 0.03, 0.04, 0.05,
    0.06, 0.08, 0.07, 0.06, 0.05, 0.04, 0.03, 0.02,
];

/// Relative hourly space heating demand on a typical day (0h to 23h)
pub const HOURLY_HEATING_SHAPE: [f32; 24] = [
    0.035, 0.03, 0.025, 0.025, 0.03, 0.04, 0.05, 0.05, 0.045, 0.04, 0.04, 0.04, 0.04, 0.04, 0.045,
    0.045, 0.05, 0.05, 0.05, 0.045, 0.04, 0.035, 0.035, 0.035,
];

/// Orientation of the PV array
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum Orientation {
    /// South
    #[strum(to_string = "south", serialize = "Süd")]
    South,
    /// South-east or south-west
    #[strum(to_string = "south-east-west", serialize = "Süd-Ost/Süd-West")]
    SouthEastWest,
    /// East-west split array
    #[strum(to_string = "east-west", serialize = "Ost/West")]
    EastWest,
    /// North or flat array
    #[strum(to_string = "north-flat", serialize = "Nord (Flachdach)")]
    NorthFlat,
}

impl Orientation {
    /// Yield factor relative to a south facing array [-]
    pub fn factor(self) -> f32 {
        match self {
            Orientation::South => 1.0,
            Orientation::SouthEastWest => 0.95,
            Orientation::EastWest => 0.88,
            Orientation::NorthFlat => 0.75,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::South
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn monthly_shape_adds_up_to_one() {
        let total: f32 = PV_MONTHLY_SHAPE.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn orientation_labels() {
        assert_eq!("Ost/West".parse::<Orientation>().unwrap(), Orientation::EastWest);
        assert_eq!(Orientation::NorthFlat.to_string(), "north-flat");
        assert_eq!(Orientation::SouthEastWest.factor(), 0.95);
    }
}
