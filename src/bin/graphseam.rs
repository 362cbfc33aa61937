// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use graphseam::{calculate_energy, energy_to_image, Carver};
use std::env;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("GRAPHSEAM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if env::var("DEBUG").is_ok() {
            "graphseam=debug,info"
        } else {
            "graphseam=info,warn"
        }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn dimension(matches: &ArgMatches, name: &str, default: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        None => Ok(default),
        Some(v) => v
            .parse::<u32>()
            .map_err(|e| format_err!("--{} {}: {}", name, v, e)),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // Both are required arguments; clap has already refused to run without them.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?.to_rgb();
    let (width, height) = image.dimensions();
    info!(input, width, height, "loaded");

    if matches.is_present("energy") {
        energy_to_image(&calculate_energy(&image)).save(output)?;
        info!(output, "wrote energy map");
        return Ok(());
    }

    let new_width = dimension(matches, "width", width)?;
    let new_height = dimension(matches, "height", height)?;

    let mut carver = Carver::new(&image)?;
    carver.resize(new_width, new_height)?;
    carver.picture().save(output)?;
    info!(output, width = carver.width(), height = carver.height(), "wrote");
    Ok(())
}

fn main() -> Result<(), Error> {
    let matches = App::new("graphseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by shortest-path seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map as a grayscale image instead of resizing"),
        )
        .get_matches();

    init_tracing();
    run(&matches)
}
