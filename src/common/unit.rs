//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU).
//! Slide geometry in this crate is authored in inches and font metrics in
//! points, so both are converted here.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU, rounding to the nearest unit.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// Font sizes in `a:rPr/@sz` are hundredths of a point.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(0.05), 45_720);
        // 16:9 widescreen width used by the deck
        assert_eq!(inches(13.333), 12_191_695);
    }

    #[test]
    fn test_points() {
        assert_eq!(pt_to_emu_f64(1.5), 19_050);
        assert_eq!(pt_to_centipoints(54.0), 5400);
        assert_eq!(pt_to_centipoints(18.0), 1800);
    }
}
