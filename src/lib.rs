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
Heatcost
========

Comparison of heating systems for multi-family buildings.

This library estimates the monthly heating demand of a building from its envelope and a
reference climate, adds domestic hot water and household electricity, simulates a rooftop PV
array with an optional battery and compares gas boilers, heat pumps and district heating by
their investment and operating costs over a multi-year horizon with escalating prices.

The calculation goes through these steps:

1. Heat loss coefficient of the envelope (H_T) and total heat loss coefficient with
   ventilation (H_TR).
2. Monthly space heating demand from degree-hours, for months below the heating threshold.
3. Domestic hot water and household electricity demand, spread evenly over the year.
4. Monthly PV yield from the installed power, specific yield, orientation and tilt.
5. Monthly dispatch of the PV generation between direct use, battery and grid export,
   following one of three policies.
6. Yearly energy, maintenance and investment costs of every heating system.
7. Cost forecast with escalating prices and ranking of the systems by their cumulative cost
   at the horizon.

All the energy values are expressed in kWh, powers in kW, heat loss coefficients in W/K and
costs in €.

The input data is a flat list of `key: value` parameters (text or JSON), turned into an
explicit [`BuildingParameters`] configuration:

```text
# Building data
persons: 10
savings_factor: 0.1
building_age_class: "2009-2013"
wall_area: 300
use_pv: true
pv_kwp: 10
dispatch_policy: "self-consumption"
```

Missing parameters take their default values.

# Example

```rust
use heatcost::*;

// Read the parameters and build the calculation data
let params: Params = "persons: 12\npv_kwp: 15\nforecast_years: 20".parse().unwrap();
let building = BuildingParameters::from_params(&params).unwrap();
building.validate().unwrap();

// Compare all heating systems
let cmp = compare_systems(&building);
if let Some(rec) = &cmp.recommended {
    println!("{}: {:.0} €", rec.name, rec.cumulative_cost);
}

// Plain text summary
println!("{}", report::comparison_to_plain(&cmp));
```

*/

#![deny(missing_docs)]

mod error;
mod vecops;

pub mod auxiliary;
pub mod catalog;
pub mod comparison;
pub mod costs;
pub mod daily;
pub mod dispatch;
pub mod envelope;
pub mod heating;
pub mod pv;
pub mod report;
pub mod types;

pub use comparison::{compare_systems, Comparison, Recommendation};
pub use daily::{typical_day, DailyProfile};
pub use error::*;
pub use types::*;

/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
