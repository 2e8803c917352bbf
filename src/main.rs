#[macro_use]
extern crate clap;

use std::error::Error;
use std::fmt;

use onion::file;
use onion::gen::{self, Scatter, Shape};
use onion::hull::Peeling;
use onion::spatial::{Point, PointSet};
use onion::visual::VisOptions;

#[derive(Debug, Clone)]
enum OnionError {
    ArgError(String),
    RunError(String),
}

fn main() -> Result<(), OnionError> {
    let yaml = load_yaml!("cli.yml");
    let matches = clap::App::from_yaml(yaml).get_matches();

    match matches.subcommand() {
        ("random", Some(random_matches)) => random(random_matches),
        ("trace", Some(trace_matches)) => trace(trace_matches),
        ("", None) => Ok(()),
        _ => unreachable!(),
    }
}

fn random<'a>(args: &clap::ArgMatches<'a>) -> Result<(), OnionError> {
    // scatter random points and peel them into nested hulls as they land
    let count: usize = args
        .value_of("COUNT")
        .unwrap()
        .parse()
        .map_err(|_| OnionError::arg_error("could not parse point count argument"))?;
    if count == 0 {
        return Err(OnionError::arg_error("point count must be positive"));
    }

    let shape: Shape = args
        .value_of("shape")
        .unwrap_or("square")
        .parse()
        .map_err(OnionError::arg_error)?;

    let spiral = args.is_present("spiral");

    let center: f64 = args
        .value_of("center")
        .unwrap_or("250.0")
        .parse()
        .map_err(|_| OnionError::arg_error("could not parse center argument"))?;

    // a spiral starts tight and marches outward
    let radius_default = if spiral { "10.0" } else { "230.0" };
    let radius: f64 = args
        .value_of("radius")
        .unwrap_or(radius_default)
        .parse()
        .map_err(|_| OnionError::arg_error("could not parse radius argument"))?;

    let seed = match args.value_of("seed") {
        None => None,
        Some(s) => Some(
            s.parse::<u64>()
                .map_err(|_| OnionError::arg_error("could not parse seed argument"))?,
        ),
    };

    let mut scatter = Scatter::new(shape, Point::new(center, center), radius, seed);
    if spiral {
        // march the radius out to just shy of the frame edge over the run
        let frame = 2.0 * center;
        let step = ((frame - 20.0) - (center + radius)) / count as f64;
        scatter = scatter.with_growth(step);
    }

    eprintln!("scattering {} points ...", count);

    let mut set = PointSet::new();
    let mut peel = Peeling::new();

    for p in scatter.take(count) {
        let id = set.push(p)?;
        peel.insert(&set, id)?;
    }

    eprintln!("peeling complete ({} layers)\n---------------", peel.depth());

    print_stats(&peel);

    if let Some(dump_path) = args.value_of("dump") {
        file::save_points(dump_path, &set)?;
        eprintln!("point set saved to {}", dump_path);
    }

    let im_size: u32 = args
        .value_of("imsize")
        .unwrap_or("512")
        .parse()
        .map_err(|_| OnionError::arg_error("could not parse image size argument"))?;

    let out_path = args.value_of("out").unwrap_or("out.png");
    peel.visualize(&set)
        .draw(out_path, VisOptions::new().im_size(im_size));

    eprintln!("rendering complete ({})", out_path);

    Ok(())
}

fn trace<'a>(args: &clap::ArgMatches<'a>) -> Result<(), OnionError> {
    // peel a point set loaded from a file
    let file_path = args.value_of("INPUT").unwrap();

    eprintln!("reading point file ...");
    let points = file::read_points(file_path)?;
    eprintln!("file read (point count: {})", points.len());

    let seed = match args.value_of("seed") {
        None => None,
        Some(s) => Some(
            s.parse::<u64>()
                .map_err(|_| OnionError::arg_error("could not parse seed argument"))?,
        ),
    };

    let jitter = args.is_present("jitter");
    let rng = gen::rng(seed);

    let mut set = PointSet::new();
    for p in points {
        let p = if jitter { gen::jitter(&rng, p) } else { p };
        set.push(p)?;
    }

    eprintln!("peeling ...");
    let mut peel = Peeling::new();
    peel.rebuild(&set)?;
    eprintln!("peeling complete ({} layers)\n---------------", peel.depth());

    print_stats(&peel);

    let im_size: u32 = args
        .value_of("imsize")
        .unwrap_or("512")
        .parse()
        .map_err(|_| OnionError::arg_error("could not parse image size argument"))?;

    let out_path = args.value_of("out").unwrap_or("out.png");
    peel.visualize(&set)
        .draw(out_path, VisOptions::new().im_size(im_size));

    eprintln!("rendering complete ({})", out_path);

    Ok(())
}

fn print_stats(peel: &Peeling) {
    for (k, layer) in peel.layers().enumerate() {
        println!(
            "layer {:02}: {} points (max {}, avg {:.3}, {} updates)",
            k,
            layer.len(),
            layer.max_len(),
            layer.mean_len(),
            layer.updates()
        );
    }
}

impl OnionError {
    fn arg_error<T: fmt::Display>(msg: T) -> Self {
        Self::ArgError(msg.to_string())
    }
    fn run_error<T: fmt::Display>(msg: T) -> Self {
        Self::RunError(msg.to_string())
    }
}

impl<T> From<T> for OnionError
where
    T: Error,
{
    fn from(x: T) -> Self {
        OnionError::run_error(x.to_string())
    }
}

impl fmt::Display for OnionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OnionError: ")?;
        match self.clone() {
            OnionError::ArgError(msg) => {
                write!(f, "argument error: {}", msg)
            }
            OnionError::RunError(msg) => {
                write!(f, "runtime error: {}", msg)
            }
        }
    }
}
