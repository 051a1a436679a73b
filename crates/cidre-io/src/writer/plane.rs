use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::container::Endianness;

const BYTES_PER_SAMPLE: usize = std::mem::size_of::<f64>();

/// Serialize one column-major f64 plane into the container's row-major
/// scan order.
///
/// The source is indexed `values[x * height + y]`; the output holds the
/// IEEE-754 bytes for pixel (x, y) at offset `8 * (y * width + x)`. The
/// transposition is deliberate and bit-exact. A zero-sized plane yields
/// an empty buffer.
pub fn serialize_plane(
    values: &[f64],
    width: usize,
    height: usize,
    order: Endianness,
) -> Vec<u8> {
    debug_assert_eq!(values.len(), width * height);
    let mut buffer = vec![0u8; BYTES_PER_SAMPLE * width * height];
    let mut offset = 0;
    for y in 0..height {
        for x in 0..width {
            let value = values[x * height + y];
            let slot = &mut buffer[offset..offset + BYTES_PER_SAMPLE];
            match order {
                Endianness::Big => BigEndian::write_f64(slot, value),
                Endianness::Little => LittleEndian::write_f64(slot, value),
            }
            offset += BYTES_PER_SAMPLE;
        }
    }
    buffer
}
