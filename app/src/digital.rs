// ABOUTME: Digital time source — formats the readout off the UI thread once per second.
// ABOUTME: Publishes the string to the window through the slint event loop.

use std::thread::JoinHandle;
use std::time::Duration;

use chrono::Local;
use slint::ComponentHandle;
use tokio::sync::oneshot;

use crate::ClockWindow;

pub struct DigitalClock {
    shutdown: Option<oneshot::Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl DigitalClock {
    pub fn start(window: &ClockWindow) -> Self {
        // Seed the readout so the first frame shows a real time, not a placeholder
        window.set_digital_time(clockface::format_time(&Local::now()).into());

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        // Background tokio thread formats the time; the UI thread applies it
        let weak = window.as_weak();
        let worker = std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async move {
                loop {
                    let text = clockface::format_time(&Local::now());
                    let weak = weak.clone();
                    let _ = slint::invoke_from_event_loop(move || {
                        if let Some(w) = weak.upgrade() {
                            w.set_digital_time(text.into());
                        }
                    });

                    tokio::select! {
                        _ = tokio::time::sleep(Duration::from_secs(1)) => {}
                        _ = &mut shutdown_rx => break,
                    }
                }
            });
        });

        Self {
            shutdown: Some(shutdown_tx),
            worker: Some(worker),
        }
    }
}

impl Drop for DigitalClock {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
