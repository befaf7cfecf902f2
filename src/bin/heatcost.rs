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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use tracing::Level;

use heatcost::dispatch::DispatchPolicy;
use heatcost::report::{comparison_to_plain, daily_to_plain};
use heatcost::{compare_systems, typical_day, BuildingParameters, ParamValue, ParamVec, Params};

const LICENSE: &str = "
Copyright (c) 2023-2024  The heatcost developers

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

// Helpers ------------------------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("File {} not found", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Could not read the file")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file =
        File::create(path).context(format!("Could not create {}", path.display()))?;
    file.write_all(content)
        .context(format!("Could not write to {}", path.display()))?;
    Ok(())
}

fn log_level(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Read the parameter file, JSON for `.json` files and text format otherwise
fn get_params(path: Option<&str>) -> Params {
    let path = match path {
        Some(path) => Path::new(path),
        None => return Params::default(),
    };
    let contents = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: Could not read the parameter file \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    });
    println!("Parameter file: \"{}\"", path.display());
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let parsed = if is_json {
        Params::from_json(&contents)
    } else {
        contents.parse::<Params>()
    };
    parsed.unwrap_or_else(|err| {
        eprintln!(
            "ERROR: Wrong format of the parameter file \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    })
}

/// Set a parameter, with priority command line > parameter file > default value
fn update_param<V>(params: &mut Params, key: &str, value: Option<V>, descr: &str, verbosity: u64)
where
    V: Into<ParamValue> + std::fmt::Display,
{
    match value {
        Some(value) => {
            if let Some(old) = params.get_param(key) {
                if verbosity > 0 {
                    println!(
                        "WARNING: {} from the parameter file ({}) replaced by the command line value",
                        descr, old
                    );
                }
            }
            if verbosity > 0 {
                println!("{} (command line): {}", descr, value);
            }
            params.set_param(key, value);
        }
        None => {
            if verbosity > 0 {
                match params.get_param(key) {
                    Some(v) => println!("{} (parameter file): {}", descr, v),
                    None => println!("{} (default)", descr),
                }
            }
        }
    }
}

// Main ----------------------------------------------------------------------------------------

fn main() {
    let matches = App::new("Heatcost")
        .bin_name("heatcost")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2023-2024  The heatcost developers

License: MIT.

")
        .about("Heatcost - Heating system cost comparison for multi-family buildings.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("params")
            .short("p")
            .long("params")
            .value_name("PARAMS_FILE")
            .help("Parameter file (JSON for .json files, key: value text otherwise)")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("years")
            .short("y")
            .long("years")
            .value_name("YEARS")
            .help("Forecast horizon [years]")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("policy")
            .short("s")
            .long("policy")
            .value_name("POLICY")
            .possible_values(&["export-first", "self-consumption", "strong-self-consumption"])
            .help("PV dispatch policy")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("nopv")
            .long("nopv")
            .help("Calculate without PV array and battery"))
        .arg(Arg::with_name("month")
            .short("m")
            .long("month")
            .value_name("MONTH")
            .help("Show the typical day of a month (1-12)")
            .takes_value(true))
        .arg(Arg::with_name("gen_params_file")
            .long("op")
            .value_name("GEN_PARAMS_FILE")
            .help("Output file of the resolved parameters")
            .takes_value(true))
        .arg(Arg::with_name("json_output_file")
            .long("json")
            .value_name("JSON_OUTPUT_FILE")
            .help("Output file of the detailed results in JSON format")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("license")
            .help("Show the license of the program (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!("{}", LICENSE);
        exit(exitcode::OK);
    }

    // Prologue -----------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("ERROR: Could not set up logging ({})", err);
    }

    if verbosity > 2 {
        println!("Options: ----------");
        println!("{:#?}", matches);
        println!("-------------------");
    }

    println!("** Input data");

    // Parameters ---------------------------------------------------------------------------------
    let mut params = get_params(matches.value_of("params"));

    let years = if matches.is_present("years") {
        let years = value_t!(matches, "years", u32).unwrap_or_else(|error| {
            eprintln!("ERROR: The forecast horizon is not a valid number of years");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        Some(years as f32)
    } else {
        None
    };
    update_param(&mut params, "forecast_years", years, "Forecast horizon [years]", verbosity);

    let policy = matches
        .value_of("policy")
        .map(|v| {
            v.parse::<DispatchPolicy>().unwrap_or_else(|_| {
                eprintln!("ERROR: Unknown dispatch policy \"{}\"", v);
                exit(exitcode::USAGE);
            })
        })
        .map(|policy| policy.to_string());
    update_param(&mut params, "dispatch_policy", policy, "Dispatch policy", verbosity);

    let nopv = if matches.is_present("nopv") {
        Some(false)
    } else {
        None
    };
    update_param(&mut params, "use_pv", nopv, "PV array", verbosity);
    update_param(&mut params, "use_battery", nopv, "Battery", verbosity);

    let month = if matches.is_present("month") {
        let month = value_t!(matches, "month", usize).unwrap_or_else(|error| {
            eprintln!("ERROR: The month is not a valid number");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        if month < 1 || month > 12 {
            eprintln!("ERROR: The month should be between 1 and 12 and is {}", month);
            exit(exitcode::DATAERR);
        }
        Some(month)
    } else {
        None
    };

    let building = BuildingParameters::from_params(&params).unwrap_or_else(|err| {
        eprintln!("ERROR: Wrong parameters ({})", err);
        exit(exitcode::DATAERR);
    });
    if let Err(err) = building.validate() {
        eprintln!("ERROR: Invalid parameters ({})", err);
        exit(exitcode::DATAERR);
    }

    if verbosity > 1 {
        println!("Parameters:");
        for param in &building.to_params().params {
            println!("  {}", param);
        }
    }

    // Resolved parameters ------------------------------------------------------------------------
    if let Some(path) = matches.value_of_os("gen_params_file") {
        let path = Path::new(path);
        let params_string = building.to_params().to_string();
        if let Err(err) = writefile(path, params_string.as_bytes()) {
            eprintln!("ERROR: {}", err);
            exit(exitcode::IOERR);
        }
        if verbosity > 0 {
            println!("Saved parameter file: {}", path.display());
        }
    }

    // Comparison ---------------------------------------------------------------------------------
    let cmp = compare_systems(&building);

    // Results ------------------------------------------------------------------------------------
    if let Some(path) = matches.value_of_os("json_output_file") {
        let path = Path::new(path);
        if verbosity > 0 {
            println!("Results in JSON format: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&cmp).unwrap_or_else(|error| {
            eprintln!("ERROR: Could not convert the results to JSON ({})", error);
            exit(exitcode::DATAERR);
        });
        if let Err(err) = writefile(path, json.as_bytes()) {
            eprintln!("ERROR: {}", err);
            exit(exitcode::IOERR);
        }
    }

    println!("{}", comparison_to_plain(&cmp));

    if let Some(month) = month {
        let day = cmp
            .results
            .first()
            .and_then(|first| typical_day(&cmp.demand, first, month));
        if let Some(day) = day {
            println!("{}", daily_to_plain(&day));
        }
    }
}
