// ABOUTME: Pure clock-face geometry — hand angles, hour marks, and minute ticks.
// ABOUTME: Maps a clock reading and a canvas size to drawable segments and labels.

use crate::reading::ClockReading;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourMark {
    pub dot: Point,
    pub label_at: Point,
    pub label: String,
}

/// Everything a redraw needs, in absolute canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGeometry {
    pub center: Point,
    pub radius: f32,
    pub hour_hand: Segment,
    pub minute_hand: Segment,
    pub second_hand: Segment,
    pub hour_marks: Vec<HourMark>,
    pub minute_ticks: Vec<Segment>,
}

// Rotates the trigonometric zero (3 o'clock) to the clock-face zero (12 o'clock).
const FACE_ROTATION: f32 = -90.0;

pub fn hour_hand_angle(hour12: u32, minute: u32) -> f32 {
    360.0 * (hour12 as f32 + minute as f32 / 60.0) / 12.0 + FACE_ROTATION
}

pub fn minute_hand_angle(minute: u32, second: u32) -> f32 {
    360.0 * minute as f32 / 60.0 + 360.0 * (second as f32 / 60.0) / 60.0 + FACE_ROTATION
}

pub fn second_hand_angle(second: u32) -> f32 {
    360.0 * second as f32 / 60.0 + FACE_ROTATION
}

/// Cartesian offset from the face center for an angle in degrees.
pub fn polar_offset(degrees: f32, radius: f32) -> Point {
    let radians = degrees.to_radians();
    Point {
        x: radius * radians.cos(),
        y: radius * radians.sin(),
    }
}

pub fn face_geometry(reading: ClockReading, width: f32, height: f32) -> FaceGeometry {
    let center = Point {
        x: width / 2.0,
        y: height / 2.0,
    };
    let min_dim = width.min(height);

    let hand = |angle: f32, length: f32| Segment {
        from: center,
        to: center + polar_offset(angle, length),
    };

    let hour_hand = hand(
        hour_hand_angle(reading.hour12(), reading.minute),
        min_dim / 3.0,
    );
    let minute_hand = hand(
        minute_hand_angle(reading.minute, reading.second),
        min_dim / 2.5,
    );
    let second_hand = hand(second_hand_angle(reading.second), min_dim / 2.2);

    let mark_radius = min_dim / 2.7;
    let label_inset = min_dim / 30.0;
    let hour_marks = (0..12)
        .map(|i| {
            let angle = 360.0 * (i as f32 / 12.0) + FACE_ROTATION;
            HourMark {
                dot: center + polar_offset(angle, mark_radius),
                label_at: center + polar_offset(angle, mark_radius - label_inset),
                label: hour_label(i).to_string(),
            }
        })
        .collect();

    let tick_outer = min_dim / 2.2;
    let tick_inner = tick_outer / 1.2;
    let minute_ticks = (0..60)
        .map(|i| {
            let angle = 360.0 * (i as f32 / 60.0) + FACE_ROTATION;
            Segment {
                from: center + polar_offset(angle, tick_outer),
                to: center + polar_offset(angle, tick_inner),
            }
        })
        .collect();

    FaceGeometry {
        center,
        radius: min_dim / 2.0,
        hour_hand,
        minute_hand,
        second_hand,
        hour_marks,
        minute_ticks,
    }
}

// Dial labels read 12, 1, 2, .. 11 clockwise from the top.
fn hour_label(index: u32) -> u32 {
    if index == 0 { 12 } else { index }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "{actual} is not within {TOLERANCE} of {expected}"
        );
    }

    #[test]
    fn hour_angle_matches_formula_for_all_inputs() {
        for h in 0..12u32 {
            for m in 0..60u32 {
                let expected = 360.0 * (h as f32 + m as f32 / 60.0) / 12.0 - 90.0;
                assert_close(hour_hand_angle(h, m), expected);
            }
        }
    }

    #[test]
    fn minute_angle_matches_simplified_formula() {
        for m in 0..60u32 {
            for s in 0..60u32 {
                let expected = 6.0 * m as f32 + s as f32 / 10.0 - 90.0;
                assert_close(minute_hand_angle(m, s), expected);
            }
        }
    }

    #[test]
    fn second_angle_matches_simplified_formula() {
        for s in 0..60u32 {
            assert_close(second_hand_angle(s), 6.0 * s as f32 - 90.0);
        }
    }

    #[test]
    fn three_oclock_reading_points_right() {
        assert_close(hour_hand_angle(3, 0), 0.0);
        assert_close(minute_hand_angle(0, 0), -90.0);
        assert_close(second_hand_angle(0), -90.0);
    }

    #[test]
    fn midnight_hour_angle_points_up() {
        assert_close(hour_hand_angle(0, 0), -90.0);
    }

    #[test]
    fn half_past_six_hour_angle() {
        assert_close(hour_hand_angle(6, 30), 105.0);
    }

    #[test]
    fn geometry_is_pure() {
        let reading = ClockReading::from_hms(10, 8, 42);
        let first = face_geometry(reading, 320.0, 480.0);
        let second = face_geometry(reading, 320.0, 480.0);
        assert_eq!(first, second);
    }

    #[test]
    fn first_hour_mark_sits_at_twelve_oclock() {
        let geometry = face_geometry(ClockReading::from_hms(3, 15, 30), 400.0, 400.0);
        let top = &geometry.hour_marks[0];
        assert_eq!(top.label, "12");
        assert_close(top.dot.x, 200.0);
        assert_close(top.dot.y, 200.0 - 400.0 / 2.7);
        // Label sits between the dot and the center
        assert!(top.label_at.y > top.dot.y);
        assert!(top.label_at.y < 200.0);
    }

    #[test]
    fn hour_labels_run_clockwise_from_twelve() {
        let geometry = face_geometry(ClockReading::from_hms(0, 0, 0), 400.0, 400.0);
        let labels: Vec<&str> = geometry
            .hour_marks
            .iter()
            .map(|m| m.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["12", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]
        );
        // "3" lands on the right edge of the dial ring
        let three = &geometry.hour_marks[3];
        assert_close(three.dot.x, 200.0 + 400.0 / 2.7);
        assert_close(three.dot.y, 200.0);
    }

    #[test]
    fn tick_geometry_ignores_the_time() {
        let morning = face_geometry(ClockReading::from_hms(9, 12, 1), 360.0, 640.0);
        let evening = face_geometry(ClockReading::from_hms(21, 47, 59), 360.0, 640.0);
        assert_eq!(morning.hour_marks, evening.hour_marks);
        assert_eq!(morning.minute_ticks, evening.minute_ticks);
    }

    #[test]
    fn first_minute_tick_shares_the_twelve_oclock_convention() {
        let geometry = face_geometry(ClockReading::from_hms(0, 0, 0), 440.0, 440.0);
        assert_eq!(geometry.minute_ticks.len(), 60);
        let tick = &geometry.minute_ticks[0];
        assert_close(tick.from.x, 220.0);
        assert_close(tick.from.y, 220.0 - 440.0 / 2.2);
        // Inner end is closer to the center
        assert!(tick.to.y > tick.from.y);
    }

    #[test]
    fn face_stays_circular_on_a_tall_canvas() {
        let geometry = face_geometry(ClockReading::from_hms(0, 0, 0), 360.0, 640.0);
        assert_close(geometry.radius, 180.0);
        assert_close(geometry.center.x, 180.0);
        assert_close(geometry.center.y, 320.0);
        // Hands are sized from the smaller dimension
        let hour = &geometry.hour_hand;
        assert_close(hour.to.y - hour.from.y, -360.0 / 3.0);
    }

    #[test]
    fn hand_lengths_are_strictly_ordered() {
        let geometry = face_geometry(ClockReading::from_hms(7, 23, 51), 500.0, 500.0);
        let length = |seg: &Segment| {
            ((seg.to.x - seg.from.x).powi(2) + (seg.to.y - seg.from.y).powi(2)).sqrt()
        };
        let hour = length(&geometry.hour_hand);
        let minute = length(&geometry.minute_hand);
        let second = length(&geometry.second_hand);
        assert!(hour < minute);
        assert!(minute < second);
    }

    #[test]
    fn twelve_hour_marks_on_the_dial() {
        let geometry = face_geometry(ClockReading::from_hms(0, 0, 0), 300.0, 300.0);
        assert_eq!(geometry.hour_marks.len(), 12);
    }
}
