//! Little-endian byte assembly, independent of host byte order.
//!
//! Values are composed with explicit shifts rather than reinterpreting
//! memory, so the same bytes decode identically on every architecture.

pub fn u32_from_le(b: [u8; 4]) -> u32 {
    u32::from(b[0]) | (u32::from(b[1]) << 8) | (u32::from(b[2]) << 16) | (u32::from(b[3]) << 24)
}

pub fn f32_from_le(b: [u8; 4]) -> f32 {
    f32::from_bits(u32_from_le(b))
}

pub fn u32_to_le(v: u32) -> [u8; 4] {
    [v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
}

pub fn f32_to_le(v: f32) -> [u8; 4] {
    u32_to_le(v.to_bits())
}

/// Decode `N` consecutive little-endian floats from `buf`.
pub fn floats_from_le<const N: usize>(buf: &[u8]) -> [f32; N] {
    let mut out = [0.0f32; N];
    for (i, chunk) in buf.chunks_exact(4).take(N).enumerate() {
        out[i] = f32_from_le([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    out
}
