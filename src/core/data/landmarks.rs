use crate::core::data::complex::Complex;

/// A well-known spot on the set, usable as a `jump_to` target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub name: &'static str,
    pub center: Complex,
    pub zoom: f64,
}

pub const LANDMARKS: &[Landmark] = &[
    Landmark {
        name: "seahorse-valley",
        center: Complex::new(-0.743_643_887_037_151, 0.131_825_904_205_33),
        zoom: 200.0,
    },
    Landmark {
        name: "elephant-valley",
        center: Complex::new(0.282, 0.01),
        zoom: 60.0,
    },
    Landmark {
        name: "triple-spiral",
        center: Complex::new(-0.088, 0.654),
        zoom: 80.0,
    },
    Landmark {
        name: "mini-mandelbrot",
        center: Complex::new(-1.768_778_833, -0.001_738_996),
        zoom: 3000.0,
    },
    Landmark {
        name: "scepter-valley",
        center: Complex::new(-1.362_25, 0.004_15),
        zoom: 120.0,
    },
];

#[must_use]
pub fn find_landmark(name: &str) -> Option<&'static Landmark> {
    LANDMARKS
        .iter()
        .find(|landmark| landmark.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_names_are_unique() {
        for (i, a) in LANDMARKS.iter().enumerate() {
            for b in &LANDMARKS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn landmarks_are_valid_jump_targets() {
        for landmark in LANDMARKS {
            assert!(landmark.center.is_finite(), "{}", landmark.name);
            assert!(landmark.zoom > 0.0, "{}", landmark.name);
        }
    }

    #[test]
    fn find_landmark_ignores_case() {
        let found = find_landmark("Seahorse-Valley").unwrap();

        assert_eq!(found.name, "seahorse-valley");
        assert!(find_landmark("nowhere").is_none());
    }
}
