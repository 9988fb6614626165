//! PNG export for rendered collages.

use collage_render_2d::SoftwareRenderer;

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const COMPRESSION_LEVEL: u8 = 6;

/// Export a rendered canvas to PNG.
pub fn export(renderer: &SoftwareRenderer) -> Vec<u8> {
    encode_png(renderer.buffer(), renderer.width(), renderer.height())
}

/// Encode raw RGBA pixels as PNG.
pub(crate) fn encode_png(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
    let mut output = Vec::new();
    output.extend_from_slice(&SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.push(8); // Bit depth
    ihdr.push(6); // Color type: RGBA
    ihdr.push(0); // Compression method
    ihdr.push(0); // Filter method
    ihdr.push(0); // Interlace method
    write_chunk(&mut output, b"IHDR", &ihdr);

    // Every scanline starts with its filter byte (0 = none).
    let row_size = width as usize * 4;
    let mut raw = Vec::with_capacity(height as usize * (row_size + 1));
    for row in pixels.chunks_exact(row_size.max(1)).take(height as usize) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, COMPRESSION_LEVEL);
    write_chunk(&mut output, b"IDAT", &compressed);
    write_chunk(&mut output, b"IEND", &[]);

    output
}

/// Write a PNG chunk: length, type, data, CRC over type and data.
fn write_chunk(output: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    output.extend_from_slice(&(data.len() as u32).to_be_bytes());
    output.extend_from_slice(chunk_type);
    output.extend_from_slice(data);

    let crc = crc32_update(crc32_update(0xFFFF_FFFF, chunk_type), data) ^ 0xFFFF_FFFF;
    output.extend_from_slice(&crc.to_be_bytes());
}

fn crc32_update(mut crc: u32, data: &[u8]) -> u32 {
    for byte in data {
        let index = ((crc ^ u32::from(*byte)) & 0xFF) as usize;
        crc = CRC_TABLE[index] ^ (crc >> 8);
    }
    crc
}

/// CRC32 lookup table (polynomial 0xEDB88320).
static CRC_TABLE: [u32; 256] = build_crc_table();

const fn build_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}
