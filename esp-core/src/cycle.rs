//! LED-Schleife ohne Timing
//!
//! `LedCycle::step()` erledigt eine Iteration: Status-LED schalten,
//! Farbrad-Farbe auf die RGB LED schreiben, Zähler weiterdrehen.
//! Das Delay zwischen den Iterationen macht der Aufrufer (Embassy Timer).

use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::logic::{next_counter, status_led_on, wheel_u8};
use crate::traits::{LedError, SmartLedWriter};
use crate::types::{ButtonState, LoopFrame};

/// Berechnet die Ausgabe für einen Zählerstand
pub fn frame_for(counter: u8) -> LoopFrame {
    LoopFrame {
        counter,
        status_led_on: status_led_on(counter),
        color: wheel_u8(counter),
    }
}

/// Ergebnis einer Iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Was auf die LEDs geschrieben wurde
    pub frame: LoopFrame,
    /// Ergebnis des RGB-Schreibvorgangs
    pub rgb_result: Result<(), LedError>,
    /// Neuer Taster-Zustand, nur wenn er sich geändert hat
    pub button_changed: Option<ButtonState>,
}

/// Zustand der Hauptschleife
///
/// Der Taster wird nur gelesen und gemeldet. Keine Ausgabe hängt von ihm ab.
pub struct LedCycle<S, L, B> {
    counter: u8,
    status_led: S,
    rgb_led: L,
    button: B,
    last_button: Option<ButtonState>,
}

impl<S, L, B> LedCycle<S, L, B>
where
    S: OutputPin,
    L: SmartLedWriter,
    B: InputPin,
{
    pub fn new(status_led: S, rgb_led: L, button: B) -> Self {
        Self {
            counter: 0,
            status_led,
            rgb_led,
            button,
            last_button: None,
        }
    }

    /// Aktueller Zählerstand (der nächste `step()` benutzt diesen Wert)
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Eine Iteration ohne Delay
    ///
    /// Fehler der Status-LED werden zurückgegeben, ein fehlgeschlagener
    /// RGB-Write steht im Report und hält die Schleife nicht an.
    pub fn step(&mut self) -> Result<StepReport, S::Error> {
        let frame = frame_for(self.counter);

        self.status_led
            .set_state(PinState::from(frame.status_led_on))?;

        let rgb_result = self.rgb_led.write(frame.color);

        let button_changed = self.sample_button();

        self.counter = next_counter(self.counter);

        Ok(StepReport {
            frame,
            rgb_result,
            button_changed,
        })
    }

    /// Liest den Taster, meldet nur Änderungen
    ///
    /// Lesefehler zählen als "kein neuer Zustand".
    fn sample_button(&mut self) -> Option<ButtonState> {
        let state = ButtonState::from_active_low(self.button.is_low().ok()?);
        if self.last_button == Some(state) {
            return None;
        }
        self.last_button = Some(state);
        Some(state)
    }

    /// Gibt die Hardware wieder frei
    pub fn release(self) -> (S, L, B) {
        (self.status_led, self.rgb_led, self.button)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StepReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StepReport {{ frame: {}, rgb_ok: {} }}",
            self.frame,
            self.rgb_result.is_ok()
        )
    }
}
