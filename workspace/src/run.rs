use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use log::{ info, LevelFilter };
use num_complex::Complex64 as C64;
use lib::{ color::ColorMap, frames::write_ppm };
use snewton::{ params::Params, wave::Wave };

/// Run the Schrödinger-Newton integrator headlessly, writing one PPM image per
/// frame.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 256)]
    width: usize,

    /// Grid height in cells.
    #[arg(long, default_value_t = 128)]
    height: usize,

    /// Number of frames to render.
    #[arg(short, long, default_value_t = 100)]
    frames: usize,

    /// Time steps between frames.
    #[arg(short, long, default_value_t = 5)]
    steps: usize,

    /// TOML file of simulation parameters; missing entries take their
    /// defaults.
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Directory to write frames into.
    #[arg(short, long, default_value = "output")]
    outdir: PathBuf,

    #[arg(short, long, value_enum, default_value_t = ColorMap::Phase)]
    colormap: ColorMap,

    /// Add a bump to the wavefunction at `x,y` before the first frame. May be
    /// repeated.
    #[arg(long, value_parser = parse_point)]
    bump: Vec<(isize, isize)>,

    /// Raise the static potential around `x,y` before the first frame. May be
    /// repeated.
    #[arg(long, value_parser = parse_point)]
    barrier: Vec<(isize, isize)>,

    /// Radius of bumps and barriers in cells.
    #[arg(long, default_value_t = 6)]
    size: usize,

    /// Strength of bumps and barriers.
    #[arg(long, default_value_t = 0.3)]
    weight: f64,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    verbosity: LevelFilter,
}

fn parse_point(s: &str) -> Result<(isize, isize), String> {
    let (x, y)
        = s.split_once(',')
        .ok_or_else(|| format!("expected `x,y`; got `{}`", s))?;
    let coord = |c: &str| {
        c.trim().parse::<isize>()
            .map_err(|e| format!("bad coordinate `{}`: {}", c, e))
    };
    Ok((coord(x)?, coord(y)?))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(args.verbosity)
        .init();

    let params = match &args.params {
        Some(path) => Params::read_toml(path)?,
        None => Params::default(),
    };
    let (w, h) = (args.width, args.height);
    let mut wave = Wave::with_params(w, h, params)?;
    info!("{}×{} grid, dr = {:.3e} m", w, h, wave.consts().dr);

    let c = C64::from_polar(2.0 * args.weight, 0.0);
    for &(x, y) in args.bump.iter() {
        wave.add_bump(x, y, c, args.size);
    }
    for &(x, y) in args.barrier.iter() {
        wave.add_potential_bump(x, y, args.weight, args.size);
    }

    std::fs::create_dir_all(&args.outdir)
        .with_context(|| {
            format!("couldn't create directory {}", args.outdir.display())
        })?;
    let color = args.colormap.func();
    let mut pixels: Vec<u32> = vec![0; w * h];
    for frame in 0..args.frames {
        wave.normalize();
        let mut sweeps: usize = 0;
        let mut unconverged: usize = 0;
        for _ in 0..args.steps {
            let relaxation = wave.evolve();
            sweeps += relaxation.iters;
            if !relaxation.converged { unconverged += 1; }
        }
        wave.draw(&mut pixels, color)?;
        write_ppm(
            args.outdir.join(format!("frame-{:05}.ppm", frame)),
            w, h, &pixels,
        )?;
        info!(
            "frame {}: norm {:.6}, {} poisson sweeps ({} unconverged)",
            frame, wave.norm(), sweeps, unconverged,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points() {
        assert_eq!(parse_point("3,4"), Ok((3, 4)));
        assert_eq!(parse_point(" -2 , 10"), Ok((-2, 10)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["snewton-run"]).unwrap();
        assert_eq!((args.width, args.height), (256, 128));
        assert_eq!(args.steps, 5);
        assert_eq!(args.colormap, ColorMap::Phase);
        assert_eq!(args.verbosity, LevelFilter::Warn);
        assert!(args.bump.is_empty());

        let args = Args::try_parse_from([
            "snewton-run", "--bump", "10,20", "--bump", "1,2", "-c", "re-im",
        ]).unwrap();
        assert_eq!(args.bump, vec![(10, 20), (1, 2)]);
        assert_eq!(args.colormap, ColorMap::ReIm);
    }
}
