extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate image;
extern crate julia;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use julia::config::{self, SessionConfig};
use julia::{Click, Renderer, ZoomCommand};
use num::Complex;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

/// A click is `X,Y`, optionally followed by the modifiers `out` (zoom
/// out) and `pan` (re-center only), in either order.
fn parse_click(s: &str) -> Option<Click> {
    let mut parts = s.split(',').map(str::trim);
    let x = f64::from_str(parts.next()?).ok()?;
    let y = f64::from_str(parts.next()?).ok()?;
    let mut click = Click::at(x, y);
    for modifier in parts {
        match modifier {
            "out" => click.zoom_out = true,
            "pan" => click.pan_only = true,
            _ => return None,
        }
    }
    Some(click)
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const PARAMETER: &str = "parameter";
const PRESET: &str = "preset";
const CLICK: &str = "click";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set explorer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x768")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of the viewport"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Iteration cap per pixel"),
        )
        .arg(
            Arg::with_name(PARAMETER)
                .required(false)
                .long(PARAMETER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .conflicts_with(PRESET)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse the Julia parameter"))
                .help("The Julia parameter c, as RE,IM [default: -0.4,0.6]"),
        )
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .validator(|s| config::preset(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Use a named Julia parameter"),
        )
        .arg(
            Arg::with_name(CLICK)
                .required(false)
                .long(CLICK)
                .short("k")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .allow_hyphen_values(true)
                .validator(|s| match parse_click(&s) {
                    Some(_) => Ok(()),
                    None => Err("Clicks are X,Y with optional ,out and ,pan".to_string()),
                })
                .help("Click at X,Y before writing; add ,out to zoom out and ,pan to only re-center"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to render with"),
        )
        .get_matches()
}

fn session(matches: &ArgMatches) -> Result<SessionConfig, failure::Error> {
    let (width, height) = parse_pair::<u16>(matches.value_of(SIZE).unwrap_or("1024x768"), 'x')
        .ok_or_else(|| failure::err_msg("Error parsing image dimensions"))?;
    let max_iterations = usize::from_str(matches.value_of(ITERATIONS).unwrap_or("1000"))?;
    let parameter = match (matches.value_of(PARAMETER), matches.value_of(PRESET)) {
        (Some(c), _) => {
            parse_complex(c).ok_or_else(|| failure::err_msg("Error parsing the Julia parameter"))?
        }
        (None, Some(name)) => config::preset(name)?,
        (None, None) => SessionConfig::default().parameter,
    };
    Ok(SessionConfig {
        width: usize::from(width),
        height: usize::from(height),
        max_iterations,
        parameter,
    })
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let config = session(matches)?;
    let threads = usize::from_str(matches.value_of(THREADS).unwrap_or("1"))?;
    let clicks: Vec<Click> = matches
        .values_of(CLICK)
        .map(|values| values.filter_map(parse_click).collect())
        .unwrap_or_default();

    info!(
        "Exploring c = {} at {}x{}, {} iterations",
        config.parameter, config.width, config.height, config.max_iterations
    );

    let mut renderer = Renderer::new(config)?;
    renderer.generate_image_threaded(threads)?;
    for click in clicks {
        let command = ZoomCommand::from(click);
        renderer.zoom(command.x, command.y, command.factor, command.zoom_in)?;
        renderer.generate_image_threaded(threads)?;
    }

    let outfile = matches.value_of(OUTPUT).unwrap_or("julia.png");
    image::save_buffer(
        Path::new(outfile),
        renderer.buffer(),
        renderer.width() as u32,
        renderer.height() as u32,
        image::ColorType::RGBA(8),
    )?;
    info!("Wrote {}", outfile);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
