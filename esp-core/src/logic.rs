//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Status-LED leuchtet solange der Zähler <= diesem Wert ist
pub const STATUS_LED_THRESHOLD: u8 = 50;

/// Farbrad: bildet eine Position 0..=255 auf einen Farbton ab
///
/// Der Verlauf geht Rot → Grün → Blau → zurück zu Rot.
/// Positionen außerhalb von 0..=255 liefern Schwarz.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::wheel;
/// assert_eq!(wheel(0), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(wheel(85), RGB8 { r: 0, g: 255, b: 0 });
/// assert_eq!(wheel(170), RGB8 { r: 0, g: 0, b: 255 });
/// assert_eq!(wheel(-1), RGB8 { r: 0, g: 0, b: 0 });
/// ```
pub fn wheel(pos: i32) -> RGB8 {
    if !(0..=255).contains(&pos) {
        return RGB8::default();
    }

    // Innerhalb der Bänder bleibt jeder Kanal in 0..=255
    let channel = |v: i32| v as u8;

    if pos < 85 {
        RGB8 {
            r: channel(255 - pos * 3),
            g: channel(pos * 3),
            b: 0,
        }
    } else if pos < 170 {
        let p = pos - 85;
        RGB8 {
            r: 0,
            g: channel(255 - p * 3),
            b: channel(p * 3),
        }
    } else {
        let p = pos - 170;
        RGB8 {
            r: channel(p * 3),
            g: 0,
            b: channel(255 - p * 3),
        }
    }
}

/// Farbrad für den Schleifenzähler
pub fn wheel_u8(pos: u8) -> RGB8 {
    wheel(i32::from(pos))
}

/// Status-LED an für Zähler 0..=50, aus für den Rest der Runde
pub fn status_led_on(counter: u8) -> bool {
    counter <= STATUS_LED_THRESHOLD
}

/// Nächster Zählerwert, 255 → 0
pub fn next_counter(counter: u8) -> u8 {
    counter.wrapping_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_primary_colors() {
        assert_eq!(wheel(0), RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(85), RGB8 { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(170), RGB8 { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_wheel_inside_bands() {
        assert_eq!(wheel(42), RGB8 { r: 129, g: 126, b: 0 });
        assert_eq!(wheel(127), RGB8 { r: 0, g: 129, b: 126 });
        assert_eq!(wheel(212), RGB8 { r: 126, g: 0, b: 129 });
    }

    #[test]
    fn test_wheel_last_position() {
        // p = 85 → (255, 0, 0), schließt den Kreis zu wheel(0)
        assert_eq!(wheel(255), RGB8 { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_wheel_out_of_range_is_black() {
        for pos in [-1000, -1, 256, 1000, i32::MIN, i32::MAX] {
            assert_eq!(wheel(pos), RGB8::default(), "pos = {}", pos);
        }
    }

    #[test]
    fn test_status_led_threshold() {
        assert!(status_led_on(0));
        assert!(status_led_on(50));
        assert!(!status_led_on(51));
        assert!(!status_led_on(255));
    }

    #[test]
    fn test_next_counter_wraps() {
        assert_eq!(next_counter(0), 1);
        assert_eq!(next_counter(254), 255);
        assert_eq!(next_counter(255), 0);
    }
}
