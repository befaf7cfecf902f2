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

//! Reference climate

use serde::Serialize;

/// Monthly reference climate record
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ClimateMonth {
    /// Short month label
    pub label: &'static str,
    /// Mean outdoor temperature [ºC]
    pub mean: f32,
    /// Mean daily minimum outdoor temperature [ºC]
    pub min: f32,
    /// Mean daily maximum outdoor temperature [ºC]
    pub max: f32,
    /// Days in the month
    pub days: u32,
}

macro_rules! month {
    ($label:expr, $mean:expr, $min:expr, $max:expr, $days:expr) => {
        ClimateMonth {
            label: $label,
            mean: $mean,
            min: $min,
            max: $max,
            days: $days,
        }
    };
}

/// Reference climate, January to December
pub const REFERENCE_CLIMATE: [ClimateMonth; 12] = [
    month!("Jan", 1.5, -1.0, 4.0, 31),
    month!("Feb", 2.0, -0.5, 4.5, 28),
    month!("Mar", 5.0, 2.0, 8.0, 31),
    month!("Apr", 9.0, 5.0, 13.0, 30),
    month!("May", 13.5, 8.0, 18.0, 31),
    month!("Jun", 16.5, 11.0, 21.0, 30),
    month!("Jul", 18.5, 13.0, 23.0, 31),
    month!("Aug", 18.0, 12.5, 22.5, 31),
    month!("Sep", 14.0, 9.0, 19.0, 30),
    month!("Oct", 9.5, 5.5, 13.5, 31),
    month!("Nov", 5.0, 2.0, 8.0, 30),
    month!("Dec", 2.5, -0.5, 4.5, 31),
];

/// Month labels, January to December
pub fn month_labels() -> Vec<&'static str> {
    REFERENCE_CLIMATE.iter().map(|m| m.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn climate_is_consistent() {
        let days: u32 = REFERENCE_CLIMATE.iter().map(|m| m.days).sum();
        assert_eq!(days, 365);
        assert!(REFERENCE_CLIMATE
            .iter()
            .all(|m| m.min <= m.mean && m.mean <= m.max));
        assert_eq!(month_labels()[11], "Dec");
    }
}
