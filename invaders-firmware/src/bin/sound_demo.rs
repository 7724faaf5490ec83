// Sound-Demo: spielt alle Sound-Effekte nacheinander auf dem Buzzer
//
// Kein LED Strip, kein Spiel. Nützlich um Buzzer und Verkabelung zu prüfen.
#![no_std]
#![no_main]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;
use invaders_core::ToneGenerator;
use invaders_core::sounds::demo_sequence;

use {esp_backtrace as _, esp_println as _};

use color_invaders::config::{BUZZER_GPIO_PIN, DEMO_REPEAT_PAUSE_SECS};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    let buzzer = Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default());
    let mut tone = ToneGenerator::new(buzzer);
    let mut delay = Delay::new();

    defmt::info!("Sound-Demo auf GPIO{}", BUZZER_GPIO_PIN);

    loop {
        // Töne blockieren; zwischen den Durchläufen darf der Executor ran
        for note in demo_sequence() {
            if let Err(e) = tone.play_note(&mut delay, note) {
                defmt::error!("Ton fehlgeschlagen: {}", e);
            }
        }

        defmt::info!("Sound-Demo fertig, Wiederholung in {}s", DEMO_REPEAT_PAUSE_SECS);
        Timer::after(Duration::from_secs(DEMO_REPEAT_PAUSE_SECS)).await;
    }
}
