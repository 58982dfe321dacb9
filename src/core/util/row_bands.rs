use std::num::NonZeroU32;

/// Bands handed to rayon per available thread. Escape times vary wildly
/// between rows, so a few extra bands let work stealing even the load out.
pub const BANDS_PER_THREAD: u32 = 4;

/// Number of bands to split `rows` into, never more than one row per band.
#[must_use]
pub fn calculate_bands(max_bands: NonZeroU32, rows: u32) -> u32 {
    rows.clamp(1, max_bands.get())
}

#[must_use]
pub fn calculate_render_bands(rows: u32) -> u32 {
    let num_avail_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1) as u32;

    let max_bands = NonZeroU32::new(num_avail_threads.saturating_mul(BANDS_PER_THREAD))
        .unwrap_or(NonZeroU32::MIN);

    calculate_bands(max_bands, rows)
}

/// Rows per band so that `bands` bands cover every row.
#[must_use]
pub fn rows_per_band(rows: u32, bands: u32) -> u32 {
    rows.div_ceil(bands.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_gives_one_band() {
        let bands = calculate_bands(NonZeroU32::new(8).unwrap(), 1);

        assert_eq!(bands, 1);
    }

    #[test]
    fn test_bands_limited_by_row_count() {
        let bands = calculate_bands(NonZeroU32::new(16).unwrap(), 5);

        assert_eq!(bands, 5);
    }

    #[test]
    fn test_bands_limited_by_max_bands() {
        let bands = calculate_bands(NonZeroU32::new(4).unwrap(), 600);

        assert_eq!(bands, 4);
    }

    #[test]
    fn test_render_bands_never_exceed_rows() {
        assert_eq!(calculate_render_bands(1), 1);
        assert!(calculate_render_bands(3) <= 3);
        assert!(calculate_render_bands(600) >= 1);
    }

    #[test]
    fn test_rows_per_band_covers_every_row() {
        assert_eq!(rows_per_band(600, 4), 150);
        assert_eq!(rows_per_band(10, 3), 4);
        assert_eq!(rows_per_band(1, 1), 1);
        assert!(rows_per_band(601, 4) * 4 >= 601);
    }
}
