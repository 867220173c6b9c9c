//! PNG encoding for RGBA chart output.
//!
//! Charts are written directly over flate2 + crc32fast rather than
//! pulling in a full encoder. Two modes:
//! - **Indexed (color type 3)**: used when the image has ≤256 unique
//!   colors, which a four-color polygon chart usually does.
//! - **RGBA (color type 6)**: fallback for anything else.

use std::collections::HashMap;
use std::io::Write;

use histo_common::HistoResult;

/// Maximum palette entries for an indexed PNG.
const MAX_PALETTE_SIZE: usize = 256;

/// Encode RGBA pixels, choosing indexed or full-color output.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: image width in pixels
/// - `height`: image height in pixels
pub fn encode_auto(pixels: &[u8], width: usize, height: usize) -> HistoResult<Vec<u8>> {
    match extract_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Encode RGBA pixels as a full-color PNG (color type 6).
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> HistoResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat = deflate_scanlines(pixels, width * 4)?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Encode palette indices as an indexed PNG (color type 3).
///
/// A tRNS chunk is emitted only when some palette entry is not fully
/// opaque.
pub fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[(u8, u8, u8, u8)],
    indices: &[u8],
) -> HistoResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let mut plte = Vec::with_capacity(palette.len() * 3);
    for &(r, g, b, _) in palette {
        plte.extend_from_slice(&[r, g, b]);
    }
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|&(_, _, _, a)| a < 255) {
        let trns: Vec<u8> = palette.iter().map(|&(_, _, _, a)| a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width)?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// IHDR payload for an 8-bit image of the given color type.
fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Map each pixel to a palette index, or None once the palette would
/// exceed 256 entries.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<(u8, u8, u8, u8)>, Vec<u8>)> {
    // Packed u32 keys hash faster than 4-tuples
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<(u8, u8, u8, u8)> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for px in pixels.chunks_exact(4) {
        let packed = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((px[0], px[1], px[2], px[3]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Prefix each scanline with a no-filter byte, then zlib-compress.
fn deflate_scanlines(rows: &[u8], row_bytes: usize) -> HistoResult<Vec<u8>> {
    let mut raw = Vec::new();
    if row_bytes > 0 {
        raw.reserve(rows.len() / row_bytes * (1 + row_bytes));
        for row in rows.chunks_exact(row_bytes) {
            raw.push(0); // filter type: none
            raw.extend_from_slice(row);
        }
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&raw)?;
    Ok(encoder.finish()?)
}

/// Write one length-prefixed, CRC-suffixed PNG chunk.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
