mod commands;
mod flatten;
mod measure;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use commands::*;

use glide::math::point;
use glide::path::PathOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::stdout;

fn main() {
    env_logger::init();

    let matches = App::new("glide command-line interface")
        .version("0.3")
        .about("Path measurement and flattening tool")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("flatten")
                .about("Flattens a path")
                .arg(
                    Arg::with_name("GAP")
                        .short("g")
                        .long("gap")
                        .help("Sets the length of the line segments replacing curves (3 by default)")
                        .value_name("GAP")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("COUNT")
                        .short("c")
                        .long("count")
                        .help("Prints the number of segments"),
                ),
        )
        .subcommand(SubCommand::with_name("length").about("Prints the length of a path"))
        .subcommand(
            SubCommand::with_name("extents")
                .about("Prints the bounding box of a path, control points included"),
        )
        .subcommand(
            SubCommand::with_name("sample")
                .about("Prints the position and angle at a distance along a path")
                .arg(
                    Arg::with_name("OFFSET")
                        .short("d")
                        .long("offset")
                        .help("Distance from the start of the path")
                        .value_name("DISTANCE")
                        .takes_value(true)
                        .allow_hyphen_values(true)
                        .required(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("nearest")
                .about("Prints the distance along a path that comes closest to a point")
                .arg(coordinate_arg("X", "x"))
                .arg(coordinate_arg("Y", "y"))
                .arg(
                    Arg::with_name("START")
                        .long("start")
                        .help("Distance at which to start searching (0 by default)")
                        .value_name("DISTANCE")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("END")
                        .long("end")
                        .help("Distance at which to stop searching (the length of the path by default)")
                        .value_name("DISTANCE")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                ),
        )
        .arg(
            Arg::with_name("PATH")
                .value_name("PATH")
                .help("An SVG path")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .short("i")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the output file to use")
                .value_name("FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn coordinate_arg(name: &'static str, long: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .long(long)
        .help("Coordinate of the target point")
        .value_name("COORD")
        .takes_value(true)
        .allow_hyphen_values(true)
        .required(true)
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let mut input_buffer = matches.value_of("PATH").unwrap_or("").to_string();

    if let Some(input_file) = matches.value_of("INPUT") {
        let mut file = File::open(input_file).map_err(|source| CliError::Open {
            file: input_file.to_string(),
            source,
        })?;
        file.read_to_string(&mut input_buffer)?;
    }

    let mut output: Box<dyn Write> = Box::new(stdout());

    if let Some(output_file) = matches.value_of("OUTPUT") {
        let file = File::create(output_file).map_err(|source| CliError::Open {
            file: output_file.to_string(),
            source,
        })?;
        output = Box::new(file);
    }

    let path = glide::svg::build_path(&input_buffer)?;
    log::debug!("Parsed {} segments", path.len());

    match matches.subcommand() {
        ("flatten", Some(flatten_matches)) => {
            let cmd = FlattenCmd {
                path,
                gap: get_f64(flatten_matches, "GAP")?.unwrap_or(PathOptions::DEFAULT_FLATTEN_GAP),
                count: flatten_matches.is_present("COUNT"),
            };
            flatten::flatten(cmd, &mut *output)
        }
        ("length", Some(_)) => measure::length(path, &mut *output),
        ("extents", Some(_)) => measure::extents(&path, &mut *output),
        ("sample", Some(sample_matches)) => {
            let cmd = SampleCmd {
                path,
                offset: require_f64(sample_matches, "OFFSET")?,
            };
            measure::sample(cmd, &mut *output)
        }
        ("nearest", Some(nearest_matches)) => {
            let cmd = NearestCmd {
                path,
                target: point(
                    require_f64(nearest_matches, "X")?,
                    require_f64(nearest_matches, "Y")?,
                ),
                start: get_f64(nearest_matches, "START")?,
                end: get_f64(nearest_matches, "END")?,
            };
            measure::nearest(cmd, &mut *output)
        }
        _ => Err(CliError::MissingCommand),
    }
}

fn get_f64(matches: &ArgMatches, name: &'static str) -> Result<Option<f64>, CliError> {
    match matches.value_of(name) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| CliError::InvalidValue {
                name,
                value: value.to_string(),
            }),
        None => Ok(None),
    }
}

fn require_f64(matches: &ArgMatches, name: &'static str) -> Result<f64, CliError> {
    get_f64(matches, name)?.ok_or(CliError::MissingValue(name))
}
