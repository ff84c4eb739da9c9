/// A closed-open range of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval starting at `min` and extending to infinity.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is within [min, max).
    ///
    /// This is the acceptance test for hit parameters: a hit exactly at
    /// the current closest `t` does not replace it.
    pub fn admits(&self, x: f32) -> bool {
        self.min <= x && x < self.max
    }

    /// Returns a copy of the interval with a new upper bound.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        assert_eq!(Interval::new(2.0, 7.0).size(), 5.0);
        assert_eq!(Interval::from_min(0.0).size(), f32::INFINITY);
    }

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_admits_is_half_open() {
        let interval = Interval::new(0.001, 5.0);

        assert!(interval.admits(0.001));
        assert!(interval.admits(4.999));
        assert!(!interval.admits(5.0));
        assert!(!interval.admits(0.0));
        assert!(!interval.admits(f32::NAN));
    }

    #[test]
    fn test_interval_with_max() {
        let shrunk = Interval::from_min(0.5).with_max(2.0);
        assert_eq!(shrunk, Interval::new(0.5, 2.0));
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 255.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(128.0), 128.0);
        assert_eq!(interval.clamp(300.0), 255.0);
    }

    #[test]
    fn test_interval_empty() {
        let empty = Interval::EMPTY;

        assert!(empty.min > empty.max);
        assert!(!empty.contains(0.0));
        assert!(!empty.admits(0.0));
    }
}
