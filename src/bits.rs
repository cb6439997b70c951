/// Reverse the bit order of a byte, so bit 0 becomes bit 7 and so on.
///
/// This does not touch the device and is usable on any byte.
///
/// ```
/// assert_eq!(pcf8574_hal::reverse_bits(0b1011_0000), 0b0000_1101);
/// ```
pub fn reverse_bits(byte: u8) -> u8 {
    // Swap nibbles, then pairs within each nibble, then neighbouring bits.
    let byte = ((byte & 0xF0) >> 4) | ((byte & 0x0F) << 4);
    let byte = ((byte & 0xCC) >> 2) | ((byte & 0x33) << 2);
    ((byte & 0xAA) >> 1) | ((byte & 0x55) << 1)
}
