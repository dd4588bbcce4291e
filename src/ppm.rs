//! PPM Image Writer
//!
//! Serializes a framebuffer to a binary P6 portable pixel map:
//! `P6\n<width> <height>\n255\n` followed by one raw (R, G, B) byte
//! triple per pixel in row-major order. Alpha is dropped - P6 is an
//! opaque-RGB format.
//!
//! Output is byte-exact: the same buffer always produces the same file.

use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `buffer` to `path` as a binary P6 file.
///
/// Any I/O failure is surfaced as a hard error; a partially written file
/// is not valid output and no retry is attempted.
pub fn write_ppm(path: impl AsRef<Path>, buffer: &Framebuffer) -> Result<(), String> {
    let (w, h) = (buffer.width(), buffer.height());
    assert_eq!(
        buffer.pixels().len(),
        (w * h) as usize,
        "framebuffer length does not match {}x{} dimensions",
        w,
        h
    );

    let file = File::create(path.as_ref())
        .map_err(|e| format!("cannot create {}: {}", path.as_ref().display(), e))?;
    let mut out = BufWriter::new(file);

    write!(out, "P6\n{} {}\n255\n", w, h).map_err(|e| e.to_string())?;
    for pixel in buffer.pixels() {
        let (r, g, b, _a) = pixel.unpack();
        out.write_all(&[r, g, b]).map_err(|e| e.to_string())?;
    }
    out.flush().map_err(|e| e.to_string())
}
