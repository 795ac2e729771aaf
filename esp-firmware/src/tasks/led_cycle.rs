// LED Cycle Task - Status-LED + APA102 Farbrad, Taster wird nur gelesen
use core::fmt::Debug;

use defmt::{Debug2Format, debug, error, info, trace};
use embassy_time::{Duration, Timer};
use embedded_hal::digital::{InputPin, OutputPin};
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};

use crate::config::LOOP_DELAY_MS;
use crate::hal::Apa102LedWriter;
use crate::{LedCycle, SmartLedWriter};

/// LED Cycle Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Pro Iteration:
/// - Status-LED an solange der Zähler <= 50 ist
/// - Farbrad-Farbe des Zählers auf die RGB LED schreiben
/// - 10 ms warten, Zähler mit Überlauf weiterzählen
///
/// Der Taster ändert nichts an der Ausgabe, Zustandswechsel werden nur geloggt.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben echte Pins/SPI im Production-Code
/// und Mocks in Tests (siehe esp-tests).
pub async fn led_cycle_logic<S, L, B>(mut cycle: LedCycle<S, L, B>)
where
    S: OutputPin,
    S::Error: Debug,
    L: SmartLedWriter,
    B: InputPin,
{
    info!("LED cycle: starting");

    loop {
        match cycle.step() {
            Ok(report) => {
                trace!("LED cycle: {}", report.frame);

                if report.rgb_result.is_err() {
                    error!("Failed to write to RGB LED");
                }

                if let Some(state) = report.button_changed {
                    debug!("Button: {}", state);
                }

                if report.frame.counter == u8::MAX {
                    info!("LED cycle: color wheel round complete");
                }
            }
            Err(e) => error!("Failed to set status LED: {}", Debug2Format(&e)),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(LOOP_DELAY_MS)).await;
    }
}

/// LED Cycle Task - Embassy Task für die Hauptschleife
///
/// Dieser Task übernimmt die Pin-Initialisierung und ruft dann
/// die testbare `led_cycle_logic()` Funktion auf.
///
/// # Parameter
/// - `status_pin`: GPIO15 für die Status-LED
/// - `button_pin`: GPIO9 für den Taster (Pull-Up)
/// - `rgb_led`: APA102 Writer, schon beim Boot erstellt und auf
///   Schleifen-Helligkeit gesetzt
#[embassy_executor::task]
pub async fn led_cycle_task(
    status_pin: esp_hal::peripherals::GPIO15<'static>,
    button_pin: esp_hal::peripherals::GPIO9<'static>,
    rgb_led: Apa102LedWriter<'static>,
) {
    let status_led = Output::new(status_pin, Level::Low, OutputConfig::default());
    let button = Input::new(button_pin, InputConfig::default().with_pull(Pull::Up));

    // Business Logic aufrufen (läuft bis zum Reset)
    led_cycle_logic(LedCycle::new(status_led, rgb_led, button)).await;
}
