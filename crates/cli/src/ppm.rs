use std::{fs::File, io::Write, path::Path};

use anyhow::Result;
use facet::{fill_triangle, Color, PixelBuffer};

use crate::args;

/// The demo scene: one large triangle with red, green and blue corners, the
/// classic picture for checking barycentric interpolation by eye.
const TRIANGLE: [(i32, i32); 3] = [(0, 200), (100, 0), (500, 100)];
const COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

pub fn render_command(args: args::RenderArgs) -> Result<()> {
    let mut buffer = PixelBuffer::new(args.width, args.height);
    fill_triangle(&mut buffer, TRIANGLE, COLORS);
    log::info!(
        "rasterized demo triangle into a {}x{} surface",
        args.width,
        args.height
    );

    write_ppm(&args.output, &buffer)?;
    log::info!("wrote {}", args.output);
    Ok(())
}

/// Binary PPM (P6): three header lines, then raw row-major RGB bytes.
fn write_ppm<P: AsRef<Path>>(p: P, buffer: &PixelBuffer) -> Result<()> {
    let mut f = File::create(p)?;
    writeln!(f, "P6")?;
    writeln!(f, "{} {}", buffer.width(), buffer.height())?;
    writeln!(f, "255")?;
    f.write_all(&buffer.to_rgb8_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_writes_a_valid_ppm_with_the_golden_pixel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.ppm");

        render_command(args::RenderArgs {
            output: path.to_str().unwrap().to_string(),
            width: 512,
            height: 256,
        })
        .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n512 256\n255\n"));

        // Pixel (100, 100) carries the alpha=beta=4/9, gamma=1/9 blend.
        let header_len = b"P6\n512 256\n255\n".len();
        let offset = header_len + (100 * 512 + 100) * 3;
        assert_eq!(&bytes[offset..offset + 3], &[113, 113, 28]);

        // Total payload is one RGB triple per pixel.
        assert_eq!(bytes.len(), header_len + 512 * 256 * 3);
    }
}
