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
Reports
=======

Plain text summaries of the comparison results and the data handed over to chart renderers.

Chart rendering is provided from outside through the [`ChartRenderer`] trait. A chart that
fails to render is replaced by a placeholder, so a report can always be assembled.
*/

use itertools::Itertools;
use serde::Serialize;
use strum_macros::{Display, EnumIter};
use tracing::warn;

use crate::catalog::{month_labels, REFERENCE_CLIMATE};
use crate::comparison::Comparison;
use crate::daily::{typical_day, DailyProfile};
use crate::error::Result;

/// Plain text summary of a comparison
pub fn comparison_to_plain(cmp: &Comparison) -> String {
    let p = &cmp.params;
    let l = &cmp.losses;
    let d = &cmp.demand;
    let user = &p.user_name;
    let project = &p.project_name;
    let persons = p.persons;
    let savings = p.savings_factor;
    let age_class = &p.building_age_class;
    let window_class = &p.window_age_class;
    let policy = p.dispatch_policy;
    let pv = if p.pv.enabled {
        format!(
            "{:.1} kWp, {}, {:.0}º",
            p.pv.kwp, p.pv.orientation, p.pv.tilt
        )
    } else {
        "none".to_string()
    };
    let battery = if p.pv.enabled && p.battery.enabled && p.battery.capacity > 0.0 {
        format!("{:.1} kWh", p.battery.capacity)
    } else {
        "none".to_string()
    };
    let h_t = cmp.h_t;
    let h_tr = cmp.h_tr;
    let load = cmp.design_heat_load;
    let heating = d.annual_heating();
    let dhw = d.annual_dhw();
    let household = d.annual_household();
    let pv_gen = d.annual_pv();
    let pv_investment = cmp.pv_investment;

    let months = REFERENCE_CLIMATE
        .iter()
        .zip(cmp.heating_months.iter())
        .zip(d.pv.iter())
        .map(|((c, h), pv)| {
            format!(
                "{:<4}{:>7.1}{:>10.1}{:>10.1}",
                c.label, c.mean, h.demand, pv
            )
        })
        .join("\n");

    let systems = cmp
        .results
        .iter()
        .map(|r| {
            let fuel = if r.fuel_consumption > 0.0 {
                format!(", {}: {:.0} kWh/a", r.fuel, r.fuel_consumption)
            } else {
                String::new()
            };
            format!(
                "* {}
  Investment: system {:.0} €, total {:.0} €
  Costs: energy {:.0} €/a, maintenance {:.0} €/a, total {:.0} €/a
  Grid electricity: {:.0} kWh/a{}
  PV direct use: {:.0} kWh/a, PV export: {:.0} kWh/a",
                r.name,
                r.investment,
                r.investment_total,
                r.energy_cost,
                r.maintenance_cost,
                r.total_annual_cost,
                r.grid_import,
                fuel,
                r.pv_self_consumption,
                r.pv_export
            )
        })
        .join("\n\n");

    let years = p.forecast_years;
    let ranking = cmp
        .ranking
        .iter()
        .map(|(system, cost)| format!("- {}: {:.0} €", system.profile().name, cost))
        .join("\n");
    let recommendation = match &cmp.recommended {
        Some(rec) => format!(
            "Recommended system: {} ({:.0} € after {} years)",
            rec.name, rec.cumulative_cost, rec.years
        ),
        None => "No recommendation available".to_string(),
    };

    format!(
        "** Project

User: {user}
Project: {project}
Persons: {persons}
Savings factor: {savings:.2}
Building age class: {age_class}
Window age class: {window_class}
PV: {pv}
Battery: {battery}
Dispatch policy: {policy}

** Heat loss [W/K]

- insulated walls: {:.2}
- uninsulated walls: {:.2}
- roof: {:.2}
- floor: {:.2}
- windows: {:.2}

H_T = {h_t:.2} [W/K]
H_TR = {h_tr:.2} [W/K]
Design heat load = {load:.2} [kW]

** Yearly demand [kWh/a]

- space heating: {heating:.0}
- domestic hot water: {dhw:.0}
- household electricity: {household:.0}
- PV generation: {pv_gen:.0}

** Monthly values

Month  Tmean   Heating        PV
{months}

** Heating systems (first year)

PV and battery investment: {pv_investment:.0} €

{systems}

** Cumulative costs after {years} years

{ranking}

{recommendation}
",
        l.wall_insulated, l.wall_uninsulated, l.roof, l.floor, l.window
    )
}

/// Plain text table of a typical day
pub fn daily_to_plain(day: &DailyProfile) -> String {
    let rows = (0..24)
        .map(|h| {
            format!(
                "{:>2}h{:>9.2}{:>9.2}{:>9.2}{:>9.2}{:>9.2}",
                h, day.pv[h], day.demand[h], day.pv_direct[h], day.grid_import[h], day.export[h]
            )
        })
        .join("\n");
    format!(
        "** Typical day: {} ({}) [kWh]

Hour      PV   Demand   Direct     Grid   Export
{}
",
        day.label,
        day.system.profile().name,
        rows
    )
}

/// Kind of chart of a report
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum ChartKind {
    /// Monthly reference temperatures
    #[strum(to_string = "climate")]
    Climate,
    /// Monthly demand and PV generation
    #[strum(to_string = "monthly-balance")]
    MonthlyBalance,
    /// Cumulative cost forecast
    #[strum(to_string = "forecast")]
    Forecast,
    /// Typical day profile
    #[strum(to_string = "daily-profile")]
    DailyProfile,
}

/// Data series of a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Series name
    pub name: String,
    /// Values, one for each label of the x axis
    pub values: Vec<f32>,
}

impl Series {
    fn new<S: Into<String>>(name: S, values: Vec<f32>) -> Self {
        Series {
            name: name.into(),
            values,
        }
    }
}

/// Data of a chart, ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Kind of chart
    pub kind: ChartKind,
    /// Title
    pub title: String,
    /// Labels of the x axis
    pub x_labels: Vec<String>,
    /// Title of the y axis
    pub y_title: String,
    /// Data series
    pub series: Vec<Series>,
}

/// Chart renderer, turning chart data into an image
pub trait ChartRenderer {
    /// Render a chart as an encoded image
    fn render(&self, chart: &ChartData) -> Result<Vec<u8>>;
}

/// Chart image of a report
#[derive(Debug, Clone, PartialEq)]
pub enum ChartImage {
    /// Rendered image
    Rendered {
        /// Chart title
        title: String,
        /// Encoded image
        bytes: Vec<u8>,
    },
    /// Chart that could not be rendered
    Placeholder {
        /// Chart title
        title: String,
        /// Reason of the failure
        reason: String,
    },
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Data of the charts of a comparison
///
/// The monthly balance and the typical day (January) use the first system of the catalog.
pub fn chart_data(cmp: &Comparison) -> Vec<ChartData> {
    let months = labels(&month_labels());
    let mut charts = vec![ChartData {
        kind: ChartKind::Climate,
        title: "Reference climate".to_string(),
        x_labels: months.clone(),
        y_title: "Temperature [ºC]".to_string(),
        series: vec![
            Series::new("Mean", REFERENCE_CLIMATE.iter().map(|m| m.mean).collect()),
            Series::new("Minimum", REFERENCE_CLIMATE.iter().map(|m| m.min).collect()),
            Series::new("Maximum", REFERENCE_CLIMATE.iter().map(|m| m.max).collect()),
        ],
    }];

    if let Some(first) = cmp.results.first() {
        charts.push(ChartData {
            kind: ChartKind::MonthlyBalance,
            title: format!("Monthly energy balance: {}", first.name),
            x_labels: months,
            y_title: "Energy [kWh]".to_string(),
            series: vec![
                Series::new("Space heating", cmp.demand.heating.clone()),
                Series::new("Domestic hot water", cmp.demand.dhw.clone()),
                Series::new("Household electricity", cmp.demand.household.clone()),
                Series::new(
                    "Heating system electricity",
                    first.monthly_system_electricity.clone(),
                ),
                Series::new("PV generation", cmp.demand.pv.iter().map(|v| -v).collect()),
            ],
        });
    }

    let years = cmp.params.forecast_years;
    charts.push(ChartData {
        kind: ChartKind::Forecast,
        title: format!("Cumulative costs over {} years", years),
        x_labels: (1..=years).map(|y| y.to_string()).collect(),
        y_title: "Cost [€]".to_string(),
        series: cmp
            .results
            .iter()
            .map(|r| {
                let values = cmp
                    .forecast_for(r.system)
                    .iter()
                    .map(|e| e.cumulative_cost)
                    .collect();
                Series::new(r.name.as_str(), values)
            })
            .collect(),
    });

    if let Some(day) = cmp
        .results
        .first()
        .and_then(|first| typical_day(&cmp.demand, first, 1))
    {
        charts.push(ChartData {
            kind: ChartKind::DailyProfile,
            title: format!("Typical day in {}: {}", day.label, day.system.profile().name),
            x_labels: (0..24).map(|h| h.to_string()).collect(),
            y_title: "Energy [kWh]".to_string(),
            series: vec![
                Series::new("Electricity demand", day.demand),
                Series::new("PV generation", day.pv),
                Series::new("Grid import", day.grid_import),
                Series::new("Export", day.export),
            ],
        });
    }
    charts
}

/// Render the charts of a comparison, replacing failed charts by placeholders
pub fn collect_charts<R: ChartRenderer + ?Sized>(
    renderer: &R,
    cmp: &Comparison,
) -> Vec<ChartImage> {
    chart_data(cmp)
        .into_iter()
        .map(|chart| match renderer.render(&chart) {
            Ok(bytes) => ChartImage::Rendered {
                title: chart.title,
                bytes,
            },
            Err(e) => {
                warn!("Could not render chart \"{}\": {}", chart.title, e);
                ChartImage::Placeholder {
                    title: chart.title,
                    reason: e.to_string(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare_systems;
    use crate::error::HeatCostError;
    use crate::types::BuildingParameters;
    use pretty_assertions::assert_eq;

    struct Csv;

    impl ChartRenderer for Csv {
        fn render(&self, chart: &ChartData) -> Result<Vec<u8>> {
            let mut lines = chart
                .series
                .iter()
                .map(|s| format!("{},{}", s.name, s.values.iter().join(",")));
            Ok(lines.join("\n").into_bytes())
        }
    }

    struct NoForecasts;

    impl ChartRenderer for NoForecasts {
        fn render(&self, chart: &ChartData) -> Result<Vec<u8>> {
            match chart.kind {
                ChartKind::Forecast => Err(HeatCostError::WrongInput("too many lines".into())),
                _ => Ok(vec![0u8; 4]),
            }
        }
    }

    #[test]
    fn charts_of_a_comparison() {
        let cmp = compare_systems(&BuildingParameters::default());
        let charts = chart_data(&cmp);
        let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Climate,
                ChartKind::MonthlyBalance,
                ChartKind::Forecast,
                ChartKind::DailyProfile
            ]
        );
        for chart in &charts {
            for series in &chart.series {
                assert_eq!(series.values.len(), chart.x_labels.len());
            }
        }
        let images = collect_charts(&Csv, &cmp);
        assert!(images
            .iter()
            .all(|i| matches!(i, ChartImage::Rendered { .. })));
    }

    #[test]
    fn failed_charts_become_placeholders() {
        let cmp = compare_systems(&BuildingParameters::default());
        let images = collect_charts(&NoForecasts, &cmp);
        assert_eq!(images.len(), 4);
        match &images[2] {
            ChartImage::Placeholder { title, reason } => {
                assert_eq!(title, "Cumulative costs over 15 years");
                assert!(reason.contains("too many lines"));
            }
            other => panic!("unexpected chart image {:?}", other),
        }
        assert!(matches!(images[3], ChartImage::Rendered { .. }));
    }

    #[test]
    fn plain_summary() {
        let cmp = compare_systems(&BuildingParameters::default());
        let text = comparison_to_plain(&cmp);
        assert!(text.contains("H_TR = 224.25 [W/K]"));
        assert!(text.contains("Recommended system: Heat pump (air-water)"));
        assert!(text.contains("* District heating"));
        let day = typical_day(&cmp.demand, &cmp.results[0], 7).unwrap();
        assert!(daily_to_plain(&day).contains("** Typical day: Jul (Gas boiler)"));
    }
}
