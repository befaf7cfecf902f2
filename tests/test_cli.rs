use std::fs::read_to_string;

#[test]
fn reference_building() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/default_building.txt"])
        .stdout()
        .contains("H_TR = 224.25 [W/K]")
        .stdout()
        .contains("Recommended system: Heat pump (air-water)")
        .stdout()
        .contains("Cumulative costs after 15 years")
        .unwrap();
}

#[test]
fn defaults_without_parameter_file() {
    assert_cli::Assert::main_binary()
        .stdout()
        .contains("Design heat load = 7.62 [kW]")
        .stdout()
        .contains("Battery: 10.0 kWh")
        .unwrap();
}

#[test]
fn old_building_json() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/old_building_nopv.json"])
        .stdout()
        .contains("H_TR = 460.00 [W/K]")
        .stdout()
        .contains("Design heat load = 15.64 [kW]")
        .stdout()
        .contains("PV: none")
        .unwrap();
}

#[test]
fn command_line_overrides_file() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-p",
            "test_data/default_building.txt",
            "-y",
            "20",
            "-s",
            "export-first",
            "--nopv",
            "-v",
        ])
        .stdout()
        .contains("Forecast horizon [years] (command line): 20")
        .stdout()
        .contains("Dispatch policy: export-first")
        .stdout()
        .contains("PV: none")
        .stdout()
        .contains("Cumulative costs after 20 years")
        .unwrap();
}

#[test]
fn typical_day() {
    assert_cli::Assert::main_binary()
        .with_args(&["-m", "1"])
        .stdout()
        .contains("** Typical day: Jan (Gas boiler) [kWh]")
        .unwrap();
}

#[test]
fn month_out_of_range() {
    assert_cli::Assert::main_binary()
        .with_args(&["-m", "13"])
        .fails_with(65)
        .stderr()
        .contains("ERROR: The month should be between 1 and 12")
        .unwrap();
}

#[test]
fn wrong_parameter_kind() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/wrong_kind.txt"])
        .fails_with(65)
        .stderr()
        .contains("ERROR: Wrong parameters")
        .unwrap();
}

#[test]
fn parameters_out_of_domain() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/out_of_domain.txt"])
        .fails_with(65)
        .stderr()
        .contains("savings_factor")
        .unwrap();
}

#[test]
fn missing_parameter_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/no_such_file.txt"])
        .fails_with(74)
        .unwrap();
}

#[test]
fn resolved_parameters_file() {
    let path = std::env::temp_dir().join("heatcost_test_resolved_params.txt");
    let path_str = path.to_str().unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-p", "test_data/german_labels.txt", "-y", "25", "--op", path_str])
        .unwrap();
    let contents = read_to_string(&path).unwrap();
    assert!(contents.contains("forecast_years: 25"));
    assert!(contents.contains("pv_orientation: \"east-west\""));
    assert!(contents.contains("u_wall_insulated: 0.25"));
}
