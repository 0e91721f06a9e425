//! Evenly spaced pin markers around the wheel rim.

use crate::angle::FULL_TURN;
use crate::wheel::Point;

/// Lazy iterator over pin-head offsets relative to the wheel center.
///
/// Pin `i` of `count` sits at `(360 / count) * i - 90` degrees (so pin 1 is
/// offset a quarter turn counterclockwise from 0°), pulled in from the
/// wheel's outer radius by the pin's own radius. Finite and restartable:
/// clone it to iterate again.
#[derive(Debug, Clone)]
pub struct PinPositions {
    count: u32,
    radial: f64,
    next: u32,
}

impl PinPositions {
    pub fn new(count: u32, wheel_outer_radius: f64, pin_radius: f64) -> Self {
        Self {
            count,
            radial: wheel_outer_radius - pin_radius,
            next: 1,
        }
    }
}

impl Iterator for PinPositions {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next > self.count {
            return None;
        }

        let degrees = (FULL_TURN / self.count as f64) * self.next as f64 - 90.0;
        let radians = degrees.to_radians();
        self.next += 1;
        Some(Point::new(
            self.radial * radians.cos(),
            self.radial * radians.sin(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count.saturating_sub(self.next - 1) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for PinPositions {}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn four_pins_land_on_the_axes() {
        let positions: Vec<Point> = PinPositions::new(4, 100.0, 10.0).collect();
        assert_eq!(positions.len(), 4);

        // (360/4)*i - 90 for i = 1..=4: 0°, 90°, 180°, 270° at radius 90
        let expected = [(90.0, 0.0), (0.0, 90.0), (-90.0, 0.0), (0.0, -90.0)];
        for (position, (x, y)) in positions.iter().zip(expected) {
            assert!(approx(position.x, x), "{position:?}");
            assert!(approx(position.y, y), "{position:?}");
        }
    }

    #[test]
    fn first_pin_sits_a_quarter_turn_back() {
        let first = PinPositions::new(36, 100.0, 3.0).next().unwrap();
        let radians = (10.0f64 - 90.0).to_radians();
        assert!(approx(first.x, 97.0 * radians.cos()));
        assert!(approx(first.y, 97.0 * radians.sin()));
    }

    #[test]
    fn cloning_restarts_the_sequence() {
        let mut positions = PinPositions::new(6, 50.0, 5.0);
        assert_eq!(positions.len(), 6);
        positions.next();
        positions.next();
        assert_eq!(positions.len(), 4);

        let restarted = positions.clone();
        assert_eq!(restarted.count(), 4);
        assert_eq!(PinPositions::new(6, 50.0, 5.0).count(), 6);
    }

    #[test]
    fn zero_pins_yield_nothing() {
        assert_eq!(PinPositions::new(0, 100.0, 3.0).count(), 0);
    }
}
