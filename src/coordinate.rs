use std::fmt;
use std::ops::Sub;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from(coord: (f64, f64)) -> Self {
        Coordinate {
            x: coord.0,
            y: coord.1,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Cross product of the vector self x rhs
    pub fn cross(&self, rhs: Coordinate) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Coordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Coordinate {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_sign() {
        let east = Coordinate::new(1., 0.);
        let north = Coordinate::new(0., 1.);
        assert_eq!(east.cross(north), 1.);
        assert_eq!(north.cross(east), -1.);
        assert_eq!(east.cross(east), 0.);
    }

    #[test]
    fn test_is_finite() {
        assert!(Coordinate::new(0., -3.5).is_finite());
        assert!(!Coordinate::new(f64::NAN, 0.).is_finite());
        assert!(!Coordinate::new(0., f64::INFINITY).is_finite());
    }
}
