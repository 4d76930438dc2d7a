//! Degree/radian helpers used by steering.

pub fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed difference `to - from` in degrees, folded onto the shortest arc.
///
/// Both inputs are expected in `[0, 360)`. A difference above 180 is reduced
/// by 360 and one below -180 is raised by 360, so the result lies in
/// `[-180, 180]`.
pub fn shortest_arc_degrees(from: f64, to: f64) -> f64 {
    let diff = to - from;
    if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees(PI / 2.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(0.0) - 0.0).abs() < EPSILON);
        assert!((normalize_degrees(370.0) - 10.0).abs() < EPSILON);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < EPSILON);
        assert!((normalize_degrees(720.0) - 0.0).abs() < EPSILON);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_shortest_arc() {
        assert!((shortest_arc_degrees(10.0, 350.0) - -20.0).abs() < EPSILON);
        assert!((shortest_arc_degrees(350.0, 10.0) - 20.0).abs() < EPSILON);
        assert!((shortest_arc_degrees(90.0, 180.0) - 90.0).abs() < EPSILON);
        assert!((shortest_arc_degrees(0.0, 180.0) - 180.0).abs() < EPSILON);
    }
}
