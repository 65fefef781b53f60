// ABOUTME: Core library for SimpleClock — clock readings and face geometry.
// ABOUTME: Pure functions only; the app crate owns all UI and scheduling.

pub mod geometry;
pub mod reading;

pub use geometry::{FaceGeometry, HourMark, Point, Segment, face_geometry};
pub use reading::{ClockReading, format_time};
