// ABOUTME: SimpleClock application — a digital readout above an analog face.
// ABOUTME: Two independent one-second clocks publish into the slint window.

mod analog;
mod digital;

use tracing::info;

slint::include_modules!();

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("starting clock");

    let window = ClockWindow::new()?;

    // The handles own the refresh loops; both stop when they drop after run() returns.
    let _digital = digital::DigitalClock::start(&window);
    let _analog = analog::AnalogClock::start(&window);

    info!("clock running");
    window.run()?;

    Ok(())
}
