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

//! Typical U-values [W/m2K] by construction period

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::Lookup;

/// Default U-value for unknown building age classes [W/m2K]
pub const BUILDING_U_VALUE_DEFAULT: f32 = 0.0;
/// Default U-value for unknown window age classes [W/m2K]
pub const WINDOW_U_VALUE_DEFAULT: f32 = 1.3;
/// Suggested U-value for walls with an external thermal insulation composite system [W/m2K]
pub const WALL_U_VALUE_ETICS: f32 = 0.25;
/// Suggested U-value for walls insulated to passive house level [W/m2K]
pub const WALL_U_VALUE_PASSIVE_HOUSE: f32 = 0.15;

/// Building envelope component of the age class tables
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum EnvelopeComponent {
    /// External walls
    #[strum(to_string = "wall", serialize = "Außenwand")]
    Wall,
    /// Roof
    #[strum(to_string = "roof", serialize = "Dach")]
    Roof,
    /// Floor slab or basement ceiling
    #[strum(to_string = "floor", serialize = "Bodenplatte")]
    Floor,
    /// Windows
    #[strum(to_string = "window", serialize = "Fenster")]
    Window,
}

/// Building age class, following the German thermal regulations in force at each period
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum BuildingAgeClass {
    /// Before 1918
    #[strum(to_string = "pre-1918", serialize = "Vor 1918")]
    Pre1918,
    /// 1919-1948
    #[strum(to_string = "1919-1948")]
    From1919To1948,
    /// 1949-1977
    #[strum(to_string = "1949-1977")]
    From1949To1977,
    /// 1978-1983 (WSchV 77)
    #[strum(to_string = "1978-1983", serialize = "1978-1983 (WSchV 77)")]
    From1978To1983,
    /// 1984-1994 (WSchV 84)
    #[strum(to_string = "1984-1994", serialize = "1984-1994 (WSchV 84)")]
    From1984To1994,
    /// 1995-2001 (WSchV 95)
    #[strum(to_string = "1995-2001", serialize = "1995-2001 (WSchV 95)")]
    From1995To2001,
    /// 2002-2008 (EnEV 2002)
    #[strum(to_string = "2002-2008", serialize = "2002-2008 (EnEV 2002)")]
    From2002To2008,
    /// 2009-2013 (EnEV 2009)
    #[strum(to_string = "2009-2013", serialize = "2009-2013 (EnEV 2009)")]
    From2009To2013,
    /// 2014-2020 (EnEV 2014/2016)
    #[strum(to_string = "2014-2020", serialize = "2014-2020 (EnEV 2014/2016)")]
    From2014To2020,
    /// New building to GEG 2020/2023
    #[strum(to_string = "geg-2020", serialize = "GEG 2020/2023 Neubau Standard")]
    Geg2020,
}

/// U-values [W/m2K] of an age class: wall, roof, floor, window
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AgeClassUValues {
    /// External walls
    pub wall: f32,
    /// Roof
    pub roof: f32,
    /// Floor slab
    pub floor: f32,
    /// Windows
    pub window: f32,
}

fn uv(wall: f32, roof: f32, floor: f32, window: f32) -> AgeClassUValues {
    AgeClassUValues {
        wall,
        roof,
        floor,
        window,
    }
}

impl BuildingAgeClass {
    /// Typical U-values of the age class
    pub fn u_values(self) -> AgeClassUValues {
        use BuildingAgeClass::*;
        match self {
            Pre1918 => uv(1.7, 1.5, 1.2, 4.0),
            From1919To1948 => uv(1.6, 1.4, 1.0, 3.5),
            From1949To1977 => uv(1.4, 1.0, 0.8, 2.8),
            From1978To1983 => uv(0.9, 0.5, 0.6, 2.6),
            From1984To1994 => uv(0.6, 0.4, 0.5, 2.2),
            From1995To2001 => uv(0.45, 0.3, 0.4, 1.8),
            From2002To2008 => uv(0.35, 0.25, 0.35, 1.5),
            From2009To2013 => uv(0.28, 0.20, 0.30, 1.3),
            From2014To2020 => uv(0.24, 0.20, 0.28, 1.1),
            Geg2020 => uv(0.20, 0.14, 0.25, 0.95),
        }
    }

    /// Typical U-value of a component for the age class
    pub fn u_value(self, component: EnvelopeComponent) -> f32 {
        let values = self.u_values();
        match component {
            EnvelopeComponent::Wall => values.wall,
            EnvelopeComponent::Roof => values.roof,
            EnvelopeComponent::Floor => values.floor,
            EnvelopeComponent::Window => values.window,
        }
    }

    /// U-value of a component for an optional (possibly unrecognized) age class
    pub fn lookup(class: Option<Self>, component: EnvelopeComponent) -> Lookup<f32> {
        match class {
            Some(class) => Lookup::Found(class.u_value(component)),
            None => Lookup::Default(BUILDING_U_VALUE_DEFAULT),
        }
    }
}

/// Window age class, by glazing type
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum WindowAgeClass {
    /// Before 1978, single glazing
    #[strum(to_string = "pre-1978", serialize = "Vor 1978 (Einfachglas)")]
    Pre1978,
    /// 1978-1994, double glazing
    #[strum(to_string = "1978-1994", serialize = "1978-1994 (Isolierglas)")]
    From1978To1994,
    /// 1995-2003, low-e double glazing
    #[strum(to_string = "1995-2003", serialize = "1995-2003 (WS-Glas)")]
    From1995To2003,
    /// 2004-2010, improved low-e double glazing
    #[strum(to_string = "2004-2010", serialize = "2004-2010 (Optimiertes WS-Glas)")]
    From2004To2010,
    /// After 2010, triple glazing
    #[strum(to_string = "after-2010", serialize = "Nach 2010 (3-fach Verglasung)")]
    After2010,
}

impl WindowAgeClass {
    /// Typical mean U-value of the windows [W/m2K]
    pub fn u_value(self) -> f32 {
        use WindowAgeClass::*;
        match self {
            Pre1978 => 5.2,
            From1978To1994 => 2.8,
            From1995To2003 => 1.7,
            From2004To2010 => 1.3,
            After2010 => 0.9,
        }
    }

    /// Window U-value for an optional (possibly unrecognized) age class
    pub fn lookup(class: Option<Self>) -> Lookup<f32> {
        match class {
            Some(class) => Lookup::Found(class.u_value()),
            None => Lookup::Default(WINDOW_U_VALUE_DEFAULT),
        }
    }
}

/// U-value of a building component by age class label
///
/// Unknown labels give `Lookup::Default(0.0)`.
pub fn building_u_value(key: &str, component: EnvelopeComponent) -> Lookup<f32> {
    BuildingAgeClass::lookup(key.trim().parse().ok(), component)
}

/// Window U-value by window age class label
///
/// Unknown labels give `Lookup::Default(1.3)`.
pub fn window_u_value(key: &str) -> Lookup<f32> {
    WindowAgeClass::lookup(key.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn building_lookup_by_label() {
        assert_eq!(
            building_u_value("2009-2013", EnvelopeComponent::Wall),
            Lookup::Found(0.28)
        );
        // German labels are accepted as aliases
        assert_eq!(
            building_u_value("1978-1983 (WSchV 77)", EnvelopeComponent::Roof),
            Lookup::Found(0.5)
        );
        assert_eq!(
            building_u_value("Vor 1918", EnvelopeComponent::Window),
            Lookup::Found(4.0)
        );
    }

    #[test]
    fn unknown_labels_use_defaults() {
        assert_eq!(
            building_u_value("1850-1900", EnvelopeComponent::Floor),
            Lookup::Default(0.0)
        );
        assert_eq!(window_u_value("bulletproof"), Lookup::Default(1.3));
        assert_eq!(window_u_value("after-2010"), Lookup::Found(0.9));
    }

    #[test]
    fn labels_roundtrip() {
        for class in BuildingAgeClass::iter() {
            assert_eq!(class.to_string().parse::<BuildingAgeClass>().unwrap(), class);
        }
        for class in WindowAgeClass::iter() {
            assert_eq!(class.to_string().parse::<WindowAgeClass>().unwrap(), class);
        }
    }

    #[test]
    fn newer_buildings_are_better_insulated() {
        let walls: Vec<f32> = BuildingAgeClass::iter().map(|c| c.u_values().wall).collect();
        assert!(walls.windows(2).all(|w| w[1] <= w[0]));
    }
}
