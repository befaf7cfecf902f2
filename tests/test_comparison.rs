use std::fs::read_to_string;

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use rstest::rstest;

use heatcost::catalog::{ExistingSystem, HeatingSystem, Orientation, HEATING_SYSTEMS};
use heatcost::dispatch::{dispatch_system, DispatchConfig, DispatchPolicy};
use heatcost::report::{collect_charts, ChartData, ChartImage, ChartRenderer};
use heatcost::*;

fn params_from_file(path: &str) -> BuildingParameters {
    let contents = read_to_string(path).unwrap();
    let params = if path.ends_with(".json") {
        Params::from_json(&contents).unwrap()
    } else {
        contents.parse::<Params>().unwrap()
    };
    BuildingParameters::from_params(&params).unwrap()
}

fn with_policy(policy: DispatchPolicy) -> BuildingParameters {
    BuildingParameters {
        dispatch_policy: policy,
        ..BuildingParameters::default()
    }
}

#[test]
fn reference_building_file() {
    let building = params_from_file("test_data/default_building.txt");
    assert_eq!(building, BuildingParameters::default());
    building.validate().unwrap();

    let cmp = compare_systems(&building);
    assert_relative_eq!(cmp.h_t, 195.0, max_relative = 1e-5);
    assert_relative_eq!(cmp.h_tr, 224.25, max_relative = 1e-5);
    assert_relative_eq!(cmp.design_heat_load, 7.6245, max_relative = 1e-4);
    assert_relative_eq!(cmp.demand.annual_heating(), 19224.5, max_relative = 1e-3);
    assert_relative_eq!(cmp.demand.annual_dhw(), 5700.0, max_relative = 1e-4);
    assert_relative_eq!(cmp.demand.annual_household(), 11880.0, max_relative = 1e-4);
    assert_relative_eq!(cmp.demand.annual_pv(), 9500.0, max_relative = 1e-4);

    let rec = cmp.recommended.unwrap();
    assert_eq!(rec.system, HeatingSystem::HeatPump);
    assert_eq!(rec.years, 15);
}

#[test]
fn old_building_without_pv() {
    let building = params_from_file("test_data/old_building_nopv.json");
    building.validate().unwrap();
    assert_eq!(building.existing_system, ExistingSystem::OldGas);
    assert_eq!(building.envelope.u_wall_uninsulated, building.envelope.u_wall_insulated);

    let cmp = compare_systems(&building);
    assert_relative_eq!(cmp.h_t, 400.0, max_relative = 1e-5);
    assert_relative_eq!(cmp.h_tr, 460.0, max_relative = 1e-5);
    assert_relative_eq!(cmp.design_heat_load, 15.64, max_relative = 1e-5);
    assert_relative_eq!(
        cmp.demand.annual_heating(),
        19224.5 * 460.0 / 224.25,
        max_relative = 1e-3
    );
    assert_eq!(cmp.pv_investment, 0.0);
    assert_eq!(cmp.demand.annual_pv(), 0.0);

    let gas = cmp.result(HeatingSystem::Gas).unwrap();
    assert_relative_eq!(gas.investment, 13820.0, max_relative = 1e-5);
    let hp = cmp.result(HeatingSystem::HeatPump).unwrap();
    assert_relative_eq!(hp.investment, 25948.0, max_relative = 1e-5);
    let dh = cmp.result(HeatingSystem::DistrictHeat).unwrap();
    assert_relative_eq!(dh.investment, 12692.0, max_relative = 1e-5);

    for r in &cmp.results {
        assert_eq!(r.investment_total, r.investment);
        assert_eq!(r.pv_self_consumption, 0.0);
        assert_eq!(r.pv_export, 0.0);
    }
}

#[test]
fn german_interface_labels() {
    let building = params_from_file("test_data/german_labels.txt");
    assert_eq!(building.pv.orientation, Orientation::EastWest);
    assert_eq!(building.dispatch_policy, DispatchPolicy::StrongSelfConsumption);
    assert_eq!(building.existing_system, ExistingSystem::OldGas);
    assert_relative_eq!(building.envelope.u_wall_insulated, 0.25);
    assert_relative_eq!(building.envelope.u_roof, 1.5);
    assert_relative_eq!(building.envelope.u_window, 2.8);

    let cmp = compare_systems(&building);
    assert_relative_eq!(cmp.h_t, 592.0, max_relative = 1e-5);
    assert_relative_eq!(cmp.demand.annual_pv(), 9500.0 * 0.88, max_relative = 1e-4);
}

#[test]
fn wrong_parameters() {
    let contents = read_to_string("test_data/wrong_kind.txt").unwrap();
    let params = contents.parse::<Params>().unwrap();
    match BuildingParameters::from_params(&params) {
        Err(HeatCostError::WrongInput(desc)) => assert!(desc.contains("persons")),
        other => panic!("unexpected result {:?}", other),
    }

    let contents = read_to_string("test_data/out_of_domain.txt").unwrap();
    let params = contents.parse::<Params>().unwrap();
    let building = BuildingParameters::from_params(&params).unwrap();
    assert!(building.validate().is_err());

    assert!("persons 10".parse::<Params>().is_err());
    assert!(Params::from_json("[1, 2]").is_err());
}

#[test]
fn resolved_parameters_round_trip() {
    let building = params_from_file("test_data/old_building_nopv.json");
    let text = building.to_params().to_string();
    let again = BuildingParameters::from_params(&text.parse::<Params>().unwrap()).unwrap();
    assert_eq!(again, building);

    let json = building.to_params().to_json().unwrap();
    let again = BuildingParameters::from_params(&Params::from_json(&json).unwrap()).unwrap();
    assert_eq!(again, building);
}

#[rstest]
#[case(DispatchPolicy::ExportFirst)]
#[case(DispatchPolicy::SelfConsumption)]
#[case(DispatchPolicy::StrongSelfConsumption)]
fn monthly_flows_balance(#[case] policy: DispatchPolicy) {
    let building = with_policy(policy);
    let demand = comparison::monthly_demand(&building);
    let config = DispatchConfig {
        policy,
        battery: building.battery,
        use_pv: true,
    };
    for profile in HEATING_SYSTEMS.iter() {
        let dispatch = dispatch_system(profile, &demand, &config);
        assert_eq!(dispatch.months.len(), 12);
        for m in &dispatch.months {
            assert_relative_eq!(
                m.pv_direct + m.battery_charge + m.pv_export,
                m.pv_generation,
                epsilon = 1e-2
            );
            assert_relative_eq!(
                m.pv_direct + m.battery_delivered + m.grid_import,
                m.demand,
                epsilon = 1e-2
            );
            assert!(m.soc >= 0.0 && m.soc <= building.battery.capacity + 1e-4);
            assert!(m.pv_direct >= 0.0 && m.pv_export >= 0.0 && m.grid_import >= 0.0);
        }
    }
}

#[rstest]
#[case(HeatingSystem::Gas)]
#[case(HeatingSystem::HeatPump)]
#[case(HeatingSystem::DistrictHeat)]
fn self_consumption_imports_less_than_export_first(#[case] system: HeatingSystem) {
    let export_first = compare_systems(&with_policy(DispatchPolicy::ExportFirst));
    let self_consumption = compare_systems(&with_policy(DispatchPolicy::SelfConsumption));
    let ef = export_first.result(system).unwrap();
    let sc = self_consumption.result(system).unwrap();
    assert!(sc.grid_import <= ef.grid_import + 1e-3);
    assert!(sc.pv_export <= ef.pv_export + 1e-3);
    // the dispatch policy does not change the fuel use
    assert_relative_eq!(sc.fuel_consumption, ef.fuel_consumption, max_relative = 1e-6);
}

#[test]
fn longer_horizon_keeps_first_years() {
    let short = compare_systems(&BuildingParameters::default());
    let long = compare_systems(&BuildingParameters {
        forecast_years: 30,
        ..BuildingParameters::default()
    });
    for system in [HeatingSystem::Gas, HeatingSystem::HeatPump].iter() {
        let a = short.forecast_for(*system);
        let b = long.forecast_for(*system);
        assert_eq!(a.len(), 15);
        assert_eq!(b.len(), 30);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x, y);
        }
    }
    let last = long.ranking.first().unwrap();
    assert_eq!(long.recommended.unwrap().cumulative_cost, last.1);
}

#[test]
fn more_pv_lowers_heat_pump_grid_import() {
    let small = compare_systems(&BuildingParameters::default());
    let mut building = BuildingParameters::default();
    building.pv.kwp = 20.0;
    let large = compare_systems(&building);
    let hp_small = small.result(HeatingSystem::HeatPump).unwrap();
    let hp_large = large.result(HeatingSystem::HeatPump).unwrap();
    assert!(hp_large.grid_import <= hp_small.grid_import);
    assert!(hp_large.investment_total > hp_small.investment_total);
}

struct FailingRenderer;

impl ChartRenderer for FailingRenderer {
    fn render(&self, _chart: &ChartData) -> heatcost::Result<Vec<u8>> {
        Err(HeatCostError::WrongInput("no plotting backend".to_string()))
    }
}

#[test]
fn report_survives_chart_failures() {
    let cmp = compare_systems(&BuildingParameters::default());
    let images = collect_charts(&FailingRenderer, &cmp);
    assert_eq!(images.len(), 4);
    assert!(images
        .iter()
        .all(|i| matches!(i, ChartImage::Placeholder { .. })));
}

#[test]
fn comparison_as_json() {
    let cmp = compare_systems(&BuildingParameters::default());
    let json = serde_json::to_value(&cmp).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
    assert_eq!(json["forecast"].as_array().unwrap().len(), 45);
    assert_eq!(json["heating_months"].as_array().unwrap().len(), 12);
    assert_eq!(json["recommended"]["system"], "HeatPump");
}

#[test]
fn heat_pump_beats_gas_on_energy_cost() {
    let mut building = BuildingParameters::default();
    building.pv.enabled = false;
    building.battery.enabled = false;
    building.envelope.roof_area = 0.0;
    building.envelope.floor_area = 0.0;
    building.envelope.window_area = 0.0;
    building.envelope.u_wall_insulated = 500.0 / 1.15 / building.envelope.wall_area;
    let cmp = compare_systems(&building);
    assert_relative_eq!(cmp.h_tr, 500.0, max_relative = 1e-5);
    assert_relative_eq!(cmp.design_heat_load, 17.0, max_relative = 1e-5);

    let gas = cmp.result(HeatingSystem::Gas).unwrap();
    let hp = cmp.result(HeatingSystem::HeatPump).unwrap();
    let gas_profile = HeatingSystem::Gas.profile();
    let hp_profile = HeatingSystem::HeatPump.profile();
    assert!(
        building.prices.electricity / hp_profile.efficiency
            < building.prices.gas / gas_profile.efficiency
    );
    assert!(hp.energy_cost < gas.energy_cost);
    assert_relative_eq!(hp.investment, 26900.0, max_relative = 1e-5);
    for r in &cmp.results {
        assert_eq!(r.pv_self_consumption, 0.0);
        assert_relative_eq!(
            r.grid_import,
            cmp.demand.annual_household() + r.monthly_system_electricity.iter().sum::<f32>(),
            max_relative = 1e-4
        );
    }
}
