//! Integration Tests für den Game Core
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockBoard/MockStrip

mod common;

use common::*;
use invaders_core::{
    Game, GameConfig, GameError, GameEvent, Hsv, HueDial, LedError, Missile, STRIP_LEN,
};

// ============================================================================
// Tests: Startaufstellung
// ============================================================================

#[test]
fn test_start_places_missile_and_first_invader() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());

    game.start(&mut board).unwrap();

    let missile = game.missile().unwrap();
    assert_eq!(missile.position, 0);
    assert!(!missile.is_in_flight());
    assert_eq!(game.invader_count(), 1);
    assert_eq!(game.invaders().front_position(), STRIP_LEN - 1);

    let front = game.invaders().front().unwrap();
    assert_eq!(board.strip.frame[STRIP_LEN - 1], Some(Hsv::ready(front)));
    assert_eq!(board.strip.frame[0], Some(Hsv::charging(dial.hue())));
    assert_eq!(board.strip.flush_count, 1);
}

#[test]
fn test_missile_brightens_when_charged() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    tick(&mut game, &mut board, 100);
    assert_eq!(board.strip.frame[0], Some(Hsv::charging(dial.hue())));

    tick(&mut game, &mut board, 700);
    assert_eq!(board.strip.frame[0], Some(Hsv::ready(dial.hue())));
}

#[test]
fn test_charging_missile_follows_dial() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    dial.rotate(1);
    tick(&mut game, &mut board, 10);

    assert_eq!(game.aim(), dial.hue());
    assert_eq!(board.strip.frame[0], Some(Hsv::charging(dial.hue())));
}

#[test]
fn test_press_before_charged_does_not_fire() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    board.press();
    let events = tick(&mut game, &mut board, 100);

    assert!(events.is_empty());
    assert!(!game.missile().unwrap().is_in_flight());
}

// ============================================================================
// Tests: Kontakt
// ============================================================================

#[test]
fn test_matching_color_explodes_invader() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    let event = shoot(&mut game, &mut board, &dial, front);

    assert_eq!(
        event,
        GameEvent::Hit {
            position: STRIP_LEN - 1,
            streak: 1
        }
    );
    assert_eq!(game.streak(), 1);
    assert_eq!(game.invader_count(), 0);
    assert_eq!(game.advance_interval_ms(), 2900);
    assert!(game.missile().is_none());
    assert_eq!(board.strip.frame[STRIP_LEN - 1], None);
}

#[test]
fn test_wrong_color_misses() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    let event = shoot(&mut game, &mut board, &dial, other_than(front));

    assert_eq!(
        event,
        GameEvent::Miss {
            position: STRIP_LEN - 1
        }
    );
    assert_eq!(game.streak(), 0);
    assert_eq!(game.invader_count(), 1);
    assert!(game.missile().is_none());
    // Invader wird neu gezeichnet
    assert_eq!(board.strip.frame[STRIP_LEN - 1], Some(Hsv::ready(front)));
}

#[test]
fn test_miss_resets_streak() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    shoot(&mut game, &mut board, &dial, front);
    assert_eq!(game.streak(), 1);

    let front = wait_for_invader(&mut game, &mut board);
    let event = shoot(&mut game, &mut board, &dial, other_than(front));

    assert!(matches!(event, GameEvent::Miss { .. }));
    assert_eq!(game.streak(), 0);
}

#[test]
fn test_missile_past_empty_strip_is_lost() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let config = GameConfig {
        advance_interval_ms: 1_000_000,
        ..quiet()
    };
    let mut game = Game::new(&dial, config);
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    shoot(&mut game, &mut board, &dial, front);
    assert_eq!(game.invader_count(), 0);

    let event = shoot(&mut game, &mut board, &dial, front);

    assert_eq!(event, GameEvent::MissileLost);
    assert_eq!(game.streak(), 0);
    assert!(game.missile().is_none());
}

#[test]
fn test_in_flight_color_is_fixed() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    wait_until_charged(&mut game, &mut board);
    aim_at(&dial, front);
    board.press();
    tick(&mut game, &mut board, 5);
    assert!(game.missile().unwrap().is_in_flight());

    // Drehen während des Flugs ändert nur die Zielfarbe, nicht das Missile
    aim_at(&dial, other_than(front));
    let event = run_until(&mut game, &mut board, 5, 1000, |e| {
        matches!(e, GameEvent::Hit { .. } | GameEvent::Miss { .. })
    });

    assert!(matches!(event, GameEvent::Hit { .. }));
    assert_eq!(game.aim(), other_than(front));
}

// ============================================================================
// Tests: Missile-Flug
// ============================================================================

#[test]
fn test_missile_moves_monotonically() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    wait_until_charged(&mut game, &mut board);
    aim_at(&dial, front);
    board.press();

    let mut last = 0;
    for _ in 0..1000 {
        tick(&mut game, &mut board, 5);
        let Some(missile) = game.missile().copied() else {
            break;
        };
        assert!(missile.position >= last);
        assert!(missile.position - last <= 1);
        last = missile.position;

        // genau ein Pixel vor den Invadern leuchtet
        let lit = board.strip.lit_before(game.invaders().front_position());
        assert_eq!(lit, vec![missile.position]);
    }
    // der Tick der Position 29 erreicht löst auch gleich den Kontakt auf
    assert_eq!(last, STRIP_LEN - 2);
}

#[test]
fn test_missile_never_passes_an_invader() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let config = GameConfig {
        charge_ms: 0,
        advance_interval_ms: 40,
        advance_decrement_ms: 0,
        min_advance_interval_ms: 40,
        ..quiet()
    };
    let mut game = Game::new(&dial, config);
    game.start(&mut board).unwrap();

    for round in 0..3000 {
        let ready = game.missile().is_some_and(|m: &Missile| !m.is_in_flight());
        if ready {
            if round % 2 == 0 {
                if let Some(front) = game.invaders().front() {
                    aim_at(&dial, front);
                }
            }
            board.press();
        }
        tick(&mut game, &mut board, 5);
        board.button.clear();

        if let Some(missile) = game.missile() {
            if missile.is_in_flight() {
                assert!(missile.position < game.invaders().front_position());
            }
        }
    }
}

// ============================================================================
// Tests: Invader
// ============================================================================

#[test]
fn test_invaders_advance_on_interval() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    let events = tick(&mut game, &mut board, 2999);
    assert!(events.is_empty());

    let events = tick(&mut game, &mut board, 1);
    assert_eq!(
        events.as_slice(),
        &[GameEvent::InvadersAdvanced { invaders: 2 }]
    );
    assert_eq!(game.invaders().front_position(), STRIP_LEN - 2);
    for (position, hue) in game.invaders().iter() {
        assert_eq!(board.strip.frame[position], Some(Hsv::ready(hue)));
    }
}

#[test]
fn test_advance_interval_has_floor() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let config = GameConfig {
        advance_interval_ms: 400,
        advance_decrement_ms: 100,
        min_advance_interval_ms: 250,
        ..quiet()
    };
    let mut game = Game::new(&dial, config);
    game.start(&mut board).unwrap();

    for _ in 0..3 {
        let front = wait_for_invader(&mut game, &mut board);
        let event = shoot(&mut game, &mut board, &dial, front);
        assert!(matches!(event, GameEvent::Hit { .. }));
    }

    assert_eq!(game.advance_interval_ms(), 250);
}

// ============================================================================
// Tests: Super-Missile
// ============================================================================

#[test]
fn test_ten_hits_give_super_missile() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    for expected in 1..=10 {
        let front = wait_for_invader(&mut game, &mut board);
        let event = shoot(&mut game, &mut board, &dial, front);
        assert!(matches!(event, GameEvent::Hit { streak, .. } if streak == expected));
        if expected < 10 {
            let events = tick(&mut game, &mut board, 1);
            assert!(events.contains(&GameEvent::MissileCreated {
                super_missile: false
            }));
        }
    }

    let events = tick(&mut game, &mut board, 1);
    assert!(events.contains(&GameEvent::MissileCreated {
        super_missile: true
    }));
    let missile = game.missile().unwrap();
    assert!(missile.is_super());
    assert!(missile.is_charged(board.now, game.config().charge_ms));
}

#[test]
fn test_super_missile_hits_any_color() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let config = GameConfig {
        super_streak: 1,
        ..quiet()
    };
    let mut game = Game::new(&dial, config);
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    shoot(&mut game, &mut board, &dial, front);
    assert_eq!(game.streak(), 1);

    tick(&mut game, &mut board, 1);
    assert!(game.missile().unwrap().is_super());

    let front = wait_for_invader(&mut game, &mut board);
    let event = shoot(&mut game, &mut board, &dial, other_than(front));

    assert!(matches!(event, GameEvent::Hit { streak: 2, .. }));
}

#[test]
fn test_super_missile_cycles_hue() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let config = GameConfig {
        super_streak: 1,
        ..quiet()
    };
    let mut game = Game::new(&dial, config);
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    shoot(&mut game, &mut board, &dial, front);
    tick(&mut game, &mut board, 1);

    let first = game.missile().unwrap().flight_color().unwrap();
    tick(&mut game, &mut board, 1);
    let second = game.missile().unwrap().flight_color().unwrap();

    assert_eq!(second, first.rotate(15));
    assert_eq!(board.strip.frame[0], Some(Hsv::ready(second)));
}

// ============================================================================
// Tests: Game Over
// ============================================================================

#[test]
fn test_game_over_resets_everything() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    let front = game.invaders().front().unwrap();
    shoot(&mut game, &mut board, &dial, front);
    assert_eq!(game.streak(), 1);

    let mut count = game.invader_count();
    let event = loop {
        let events = tick(&mut game, &mut board, 50);
        assert!(game.invader_count() <= STRIP_LEN);
        if let Some(over) = events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            break *over;
        }
        assert!(game.invader_count() <= count + 1);
        count = game.invader_count();
    };

    assert_eq!(event, GameEvent::GameOver { streak: 1 });
    assert_eq!(game.streak(), 0);
    assert_eq!(game.invader_count(), 1);
    assert_eq!(game.advance_interval_ms(), 3000);

    let missile = game.missile().unwrap();
    assert_eq!(missile.position, 0);
    assert!(!missile.is_in_flight());
    assert!(!missile.is_super());

    let front = game.invaders().front().unwrap();
    assert_eq!(board.strip.frame[STRIP_LEN - 1], Some(Hsv::ready(front)));
    assert_eq!(board.strip.lit_before(STRIP_LEN - 1), vec![0]);
}

// ============================================================================
// Tests: Fehler
// ============================================================================

#[test]
fn test_failed_flush_is_reported() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    board.strip.fail_next_flush = true;
    let result = game.tick(&mut board);
    assert_eq!(result, Err(GameError::Led(LedError::WriteFailed)));

    // nächster Tick läuft wieder
    assert!(game.tick(&mut board).is_ok());
}

#[test]
fn test_hit_finishes_despite_failed_flush() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let mut game = Game::new(&dial, quiet());
    game.start(&mut board).unwrap();

    wait_until_charged(&mut game, &mut board);
    let front = game.invaders().front().unwrap();
    aim_at(&dial, front);
    board.press();
    tick(&mut game, &mut board, 5);
    assert!(game.missile().is_some_and(|m| m.is_in_flight()));

    // jeder Tick verliert einen Frame, bis der Treffer kommt
    for _ in 0..1000 {
        board.strip.fail_next_flush = true;
        board.now += 5;
        let result = game.tick(&mut board);
        if game.streak() == 1 {
            assert_eq!(result, Err(GameError::Led(LedError::WriteFailed)));
            assert!(game.missile().is_none());
            assert_eq!(game.invader_count(), 0);
            // Explosions-Pixel ist trotzdem wieder gelöscht
            assert_eq!(board.strip.frame[STRIP_LEN - 1], None);
            return;
        }
    }
    panic!("no hit");
}

#[test]
fn test_game_over_restarts_despite_failed_flush() {
    let dial = HueDial::new();
    let mut board = MockBoard::new();
    let config = GameConfig {
        advance_interval_ms: 100,
        min_advance_interval_ms: 50,
        ..quiet()
    };
    let mut game = Game::new(&dial, config);
    game.start(&mut board).unwrap();

    while game.invader_count() < STRIP_LEN - 1 {
        tick(&mut game, &mut board, 20);
    }

    // der nächste Vorstoß füllt den Strip, das rote Glühen kommt nicht an
    board.now += game.advance_interval_ms();
    board.strip.fail_next_flush = true;
    let result = game.tick(&mut board);
    assert_eq!(result, Err(GameError::Led(LedError::WriteFailed)));

    assert_eq!(game.invader_count(), 1);
    assert_eq!(game.streak(), 0);
    let missile = game.missile().unwrap();
    assert_eq!(missile.position, 0);
    assert!(!missile.is_in_flight());
    assert_eq!(board.strip.lit_before(STRIP_LEN - 1), vec![0]);

    tick(&mut game, &mut board, 5);
    assert_eq!(game.invader_count(), 1);
}
