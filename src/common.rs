/// Largest input whose power-set size still fits a `u128`.
pub const MAX_ELEMENTS: usize = 127;

/// `2^n`, or `None` once it no longer fits.
pub fn power_set_size(n: usize) -> Option<u128> {
    if n > MAX_ELEMENTS {
        None
    } else {
        Some(1u128 << n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small() {
        assert_eq!(power_set_size(0), Some(1));
        assert_eq!(power_set_size(3), Some(8));
        assert_eq!(power_set_size(MAX_ELEMENTS), Some(1u128 << 127));
        assert_eq!(power_set_size(MAX_ELEMENTS + 1), None);
    }
}
