/// Encode a string into a fixed-size byte field, truncating past `N` bytes.
pub fn str_to_fixed<const N: usize>(value: &str) -> [u8; N] {
    let mut out = [0u8; N];
    let bytes = value.as_bytes();
    let len = bytes.len().min(N);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_truncates() {
        let padded: [u8; 8] = str_to_fixed("ab");
        assert_eq!(padded, [b'a', b'b', 0, 0, 0, 0, 0, 0]);

        let truncated: [u8; 4] = str_to_fixed("abcdef");
        assert_eq!(truncated, [b'a', b'b', b'c', b'd']);
    }
}
