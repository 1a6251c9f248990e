//! ASCII preview of quiz photos
//!
//! Each character cell averages a block of pixels and picks a glyph by
//! luminance, darkest to brightest. With color enabled the glyph is also
//! painted with the block's average color.

use colored::Colorize;
use dog_quiz_domain::DecodedImage;

const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Height-to-width ratio of a terminal cell
const CELL_ASPECT: u64 = 2;

/// Render `image` at most `columns` wide. Empty for a zero width.
pub fn ascii_preview(image: &DecodedImage, columns: u16, color: bool) -> Vec<String> {
    let (width, height) = (u64::from(image.width()), u64::from(image.height()));
    if columns == 0 || width == 0 || height == 0 {
        return Vec::new();
    }

    let cols = u64::from(columns).min(width);
    let rows = (height * cols / (width * CELL_ASPECT)).max(1);

    (0..rows)
        .map(|row| {
            let (y0, y1) = span(row, rows, height);
            (0..cols)
                .map(|col| {
                    let (x0, x1) = span(col, cols, width);
                    let [r, g, b] = average(image, x0..x1, y0..y1);
                    let glyph = glyph(r, g, b);
                    if color {
                        glyph.to_string().truecolor(r, g, b).to_string()
                    } else {
                        glyph.to_string()
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Pixel range covered by cell `index` of `cells` over `len` pixels
fn span(index: u64, cells: u64, len: u64) -> (u64, u64) {
    let start = index * len / cells;
    let end = ((index + 1) * len / cells).max(start + 1);
    (start, end)
}

/// Mean color of a block, composited over black
fn average(image: &DecodedImage, xs: std::ops::Range<u64>, ys: std::ops::Range<u64>) -> [u8; 3] {
    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for y in ys {
        for x in xs.clone() {
            if let Some([r, g, b, a]) = image.pixel(x as u32, y as u32) {
                let a = u64::from(a);
                sum[0] += u64::from(r) * a / 255;
                sum[1] += u64::from(g) * a / 255;
                sum[2] += u64::from(b) * a / 255;
                count += 1;
            }
        }
    }
    if count == 0 {
        return [0, 0, 0];
    }
    sum.map(|c| (c / count) as u8)
}

fn glyph(r: u8, g: u8, b: u8) -> char {
    // ITU-R BT.601 luma, integer weights summing to 1000
    let luma = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    RAMP[(luma as usize * (RAMP.len() - 1)) / 255]
}
