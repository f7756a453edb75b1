//! Writing rendered frames to disk as binary PPM (`P6`) images.

use std::{
    fs::File,
    io::{ BufWriter, Write },
    path::Path,
};
use anyhow::{ ensure, Context };

/// Encode `0x00RRGGBB` pixels in row-major order as a binary PPM image.
pub fn encode_ppm<W>(mut out: W, width: usize, height: usize, pixels: &[u32])
    -> anyhow::Result<()>
where W: Write
{
    ensure!(
        pixels.len() == width * height,
        "expected {} pixels for a {}×{} image; got {}",
        width * height, width, height, pixels.len(),
    );
    write!(out, "P6\n{} {}\n255\n", width, height)?;
    let bytes: Vec<u8>
        = pixels.iter()
        .flat_map(|px| {
            let [_, r, g, b] = px.to_be_bytes();
            [r, g, b]
        })
        .collect();
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

/// Write a PPM image to `path`, replacing any existing file.
pub fn write_ppm<P>(path: P, width: usize, height: usize, pixels: &[u32])
    -> anyhow::Result<()>
where P: AsRef<Path>
{
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("couldn't create {}", path.display()))?;
    encode_ppm(BufWriter::new(file), width, height, pixels)
        .with_context(|| format!("couldn't write {}", path.display()))
}
