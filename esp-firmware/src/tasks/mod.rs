// Task-Modul: Boot-Probe und Hauptschleife
//
// Die Sensor-Probe läuft einmal synchron beim Boot,
// danach übernimmt der LED-Task als einziger Embassy Task.

pub mod led_cycle;
pub mod sensor_probe;

// Re-export für einfachen Import
pub use led_cycle::{led_cycle_logic, led_cycle_task};
pub use sensor_probe::run_sensor_probe;
