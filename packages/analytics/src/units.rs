//! Unit conversions shared by the canopy computations.
//!
//! Geometry arrives in a projected CRS with meter units; tract land areas
//! and the cover output use acres; canopy widths are measured in feet.

/// Square meters per acre.
pub const SQ_M_PER_ACRE: f64 = 4046.86;

/// Converts square meters to acres.
#[must_use]
pub fn sq_m_to_acres(sq_m: f64) -> f64 {
    sq_m / SQ_M_PER_ACRE
}

/// Converts acres to square meters.
#[must_use]
pub fn acres_to_sq_m(acres: f64) -> f64 {
    acres * SQ_M_PER_ACRE
}

/// Area of a circle given its diameter.
#[must_use]
pub fn circle_area_from_diameter(diameter: f64) -> f64 {
    let radius = diameter / 2.0;
    std::f64::consts::PI * radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acre_conversion_round_trips() {
        let sq_m = 123_456.789;
        assert!((acres_to_sq_m(sq_m_to_acres(sq_m)) - sq_m).abs() < 1e-9);

        let acres = 42.5;
        assert!((sq_m_to_acres(acres_to_sq_m(acres)) - acres).abs() < 1e-12);
    }

    #[test]
    fn one_acre_is_the_expected_square_meters() {
        assert!((acres_to_sq_m(1.0) - 4046.86).abs() < f64::EPSILON);
    }

    #[test]
    fn circle_area_uses_half_diameter_radius() {
        // Diameter 10 -> radius 5 -> area 25*pi.
        let area = circle_area_from_diameter(10.0);
        assert!((area - 25.0 * std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn zero_diameter_has_zero_area() {
        assert!(circle_area_from_diameter(0.0).abs() < f64::EPSILON);
    }
}
