// Game Task - Spiel-Loop auf LED Strip, Taster und Buzzer
use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, Output};
use esp_hal_smartled::smart_led_buffer;
use invaders_core::{Board, Game, GameConfig, GameEvent, HalBoard, ToneGenerator};

use crate::DIAL;
use crate::config::{LED_COUNT, RMT_CLOCK_MHZ, TICK_PAUSE_MS};
use crate::hal::{EmbassyClock, RmtLedStrip};

/// Game Logic - läuft mit jedem `Board` (Hardware oder Mock)
///
/// Startet das Spiel und tickt endlos. Ein fehlgeschlagener Frame oder Ton
/// wird geloggt, das Spiel läuft weiter.
pub async fn game_logic<B: Board>(mut board: B, config: GameConfig) -> ! {
    let mut game = Game::new(&DIAL, config);

    if let Err(e) = game.start(&mut board) {
        error!("Game start failed: {}", e);
    }
    info!("Color Invaders gestartet, Zielfarbe: {}", game.aim());

    loop {
        match game.tick(&mut board) {
            Ok(events) => {
                for event in events {
                    log_event(event);
                }
            }
            Err(e) => warn!("Tick failed: {}", e),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(TICK_PAUSE_MS)).await;
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::Hit { .. } | GameEvent::GameOver { .. } => info!("{}", event),
        GameEvent::Miss { .. } | GameEvent::MissileLost => warn!("{}", event),
        _ => defmt::debug!("{}", event),
    }
}

/// Game Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `game_logic()` Funktion auf.
///
/// # Parameter
/// - `data_pin`: GPIO für die LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `fire_button`: Feuer-Taster (high-aktiv)
/// - `buzzer`: Ausgang zum Piezo-Buzzer
/// - `config`: Spiel-Parameter
#[embassy_executor::task]
pub async fn game_task(
    data_pin: esp_hal::peripherals::GPIO4<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    fire_button: Input<'static>,
    buzzer: Output<'static>,
    config: GameConfig,
) {
    // Buffer für SmartLED Daten erstellen (ganzer Strip)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    let strip = match RmtLedStrip::new(data_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(strip) => strip,
        Err(e) => {
            error!("LED strip init failed: {}", e);
            return;
        }
    };

    let board = HalBoard::new(
        strip,
        fire_button,
        ToneGenerator::new(buzzer),
        Delay::new(),
        EmbassyClock,
    );

    game_logic(board, config).await
}
