// ABOUTME: Analog time source — a one-second repeating timer on the UI event loop.
// ABOUTME: Each tick captures a clock reading and republishes the face geometry.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use clockface::{ClockReading, FaceGeometry, Segment};
use slint::ComponentHandle;

use crate::{ClockWindow, DialMark, HandSegment};

pub struct AnalogClock {
    _timer: slint::Timer,
}

impl AnalogClock {
    pub fn start(window: &ClockWindow) -> Self {
        let current = Rc::new(Cell::new(ClockReading::now()));

        paint(window, current.get());

        // A resize repaints with the last published reading; the time only
        // advances on timer ticks
        let weak = window.as_weak();
        let reading = current.clone();
        window.on_face_resized(move || {
            if let Some(w) = weak.upgrade() {
                paint(&w, reading.get());
            }
        });

        let weak = window.as_weak();
        let timer = slint::Timer::default();
        timer.start(
            slint::TimerMode::Repeated,
            Duration::from_secs(1),
            move || {
                if let Some(w) = weak.upgrade() {
                    let reading = ClockReading::now();
                    current.set(reading);
                    paint(&w, reading);
                }
            },
        );

        Self { _timer: timer }
    }
}

fn paint(window: &ClockWindow, reading: ClockReading) {
    let geometry = clockface::face_geometry(
        reading,
        window.get_face_width(),
        window.get_face_height(),
    );
    publish(window, &geometry);
}

fn publish(window: &ClockWindow, geometry: &FaceGeometry) {
    window.set_dial_x(geometry.center.x);
    window.set_dial_y(geometry.center.y);
    window.set_dial_radius(geometry.radius);
    window.set_hour_hand(hand_segment(&geometry.hour_hand));
    window.set_minute_hand(hand_segment(&geometry.minute_hand));
    window.set_second_hand(hand_segment(&geometry.second_hand));

    let marks: Vec<DialMark> = geometry
        .hour_marks
        .iter()
        .map(|mark| DialMark {
            x: mark.dot.x,
            y: mark.dot.y,
            label: mark.label.as_str().into(),
            label_x: mark.label_at.x,
            label_y: mark.label_at.y,
        })
        .collect();
    window.set_hour_marks(Rc::new(slint::VecModel::from(marks)).into());

    let ticks: Vec<HandSegment> = geometry.minute_ticks.iter().map(hand_segment).collect();
    window.set_minute_ticks(Rc::new(slint::VecModel::from(ticks)).into());
}

fn hand_segment(segment: &Segment) -> HandSegment {
    HandSegment {
        x1: segment.from.x,
        y1: segment.from.y,
        x2: segment.to.x,
        y2: segment.to.y,
    }
}
