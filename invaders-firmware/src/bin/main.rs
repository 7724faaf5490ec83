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
use esp_hal::gpio::{Input, InputConfig, Io, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use color_invaders::config::{
    BUZZER_GPIO_PIN, ENCODER_A_GPIO_PIN, ENCODER_B_GPIO_PIN, FIRE_GPIO_PIN, LED_COUNT,
    LED_GPIO_PIN, game_config,
};
use color_invaders::hal::{EncoderPins, install_encoder};
use color_invaders::tasks::game_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime, hängt den Drehgeber an
/// den GPIO-Interrupt und spawnt den Game Task.
/// Danach schläft main() - alle Arbeit läuft im Task und im Interrupt.
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

    defmt::info!(
        "Color Invaders: {} LEDs an GPIO{}, Buzzer GPIO{}, Taster GPIO{}, Encoder GPIO{}/GPIO{}",
        LED_COUNT,
        LED_GPIO_PIN,
        BUZZER_GPIO_PIN,
        FIRE_GPIO_PIN,
        ENCODER_A_GPIO_PIN,
        ENCODER_B_GPIO_PIN
    );

    // Drehgeber: beide Kanäle mit Pull-Up, Interrupt nur auf Kanal A
    let pull_up = InputConfig::default().with_pull(Pull::Up);
    let encoder = EncoderPins {
        a: Input::new(peripherals.GPIO2, pull_up),
        b: Input::new(peripherals.GPIO3, pull_up),
    };
    let mut io = Io::new(peripherals.IO_MUX);
    install_encoder(&mut io, encoder);

    // Feuer-Taster ist high-aktiv
    let fire_button = Input::new(
        peripherals.GPIO6,
        InputConfig::default().with_pull(Pull::Down),
    );

    // Buzzer startet stumm
    let buzzer = Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default());

    // Spawn Game Task (LED Strip wird im Task initialisiert)
    spawner
        .spawn(game_task(
            peripherals.GPIO4,
            peripherals.RMT,
            fire_button,
            buzzer,
            game_config(),
        ))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
