// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Logging
use defmt::{info, warn};

// Projekt-Module und Konfiguration
use esp_io_demo::config::{
    BOOT_LED_BRIGHTNESS_PERCENT, BOOT_READY_HOLD_MS, I2C_FREQUENCY_KHZ,
    RGB_LED_BRIGHTNESS_PERCENT, RGB_LED_SPI_FREQUENCY_MHZ,
};
use esp_io_demo::hal::{
    Apa102LedWriter, I2cBusMutex, SharedI2cBus, create_apa102_led_writer, create_i2c_bus,
};
use esp_io_demo::tasks::{led_cycle_task, run_sensor_probe};
use esp_io_demo::{BootStage, show_boot_stage};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Boot-Phase: Hardware initialisieren, Sensor einmal auslesen.
/// Die RGB LED zeigt dabei die aktuelle Boot-Phase an.
/// Danach startet der LED-Task und main() schläft.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // RGB LED zuerst, damit sie den restlichen Boot anzeigen kann
    let mut rgb_led = create_apa102_led_writer(
        peripherals.SPI2,
        peripherals.GPIO19,
        peripherals.GPIO18,
        RGB_LED_SPI_FREQUENCY_MHZ,
        BOOT_LED_BRIGHTNESS_PERCENT,
    );
    show_stage(&mut rgb_led, BootStage::Start);

    // Geteilter I2C-Bus, muss 'static sein
    show_stage(&mut rgb_led, BootStage::Peripherals);
    static I2C_BUS: static_cell::StaticCell<I2cBusMutex> = static_cell::StaticCell::new();
    let i2c_bus = &*I2C_BUS.init(I2cBusMutex::new(create_i2c_bus(
        peripherals.I2C0,
        peripherals.GPIO22,
        peripherals.GPIO23,
        I2C_FREQUENCY_KHZ,
    )));

    // Boot-Phase: Sensor einmal auslesen (Fehler → Panic)
    let mut delay = Delay::new();
    run_sensor_probe(&SharedI2cBus::new(i2c_bus), &mut delay);

    show_stage(&mut rgb_led, BootStage::Ready);
    Timer::after(Duration::from_millis(BOOT_READY_HOLD_MS)).await;

    // Ab hier gedimmt: Farbrad mit Schleifen-Helligkeit
    rgb_led.set_brightness(RGB_LED_BRIGHTNESS_PERCENT);

    // Spawn LED Task (Status-LED, Taster, APA102 über SPI2)
    spawner
        .spawn(led_cycle_task(peripherals.GPIO15, peripherals.GPIO9, rgb_led))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im LED-Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

/// Zeigt eine Boot-Phase an und loggt sie
///
/// Ein LED-Fehler bricht den Boot nicht ab, die LED ist nur Anzeige.
fn show_stage(rgb_led: &mut Apa102LedWriter<'static>, stage: BootStage) {
    info!("Boot: {}", stage);
    if let Err(e) = show_boot_stage(rgb_led, stage) {
        warn!("Boot-Farbe {} nicht geschrieben: {}", stage, e);
    }
}
