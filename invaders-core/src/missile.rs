//! Missile des Spielers
//!
//! Es gibt höchstens ein Missile; "kein Missile" ist `Option::None` im Game.

use crate::types::Hue;

/// Normales Missile oder Super-Missile (Streak-Belohnung)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileKind {
    Normal,
    /// Trifft jede Farbe, Farbton läuft ständig durchs Farbrad
    Super { hue: Hue },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileState {
    Charging,
    /// Farbe ist beim Abschuss festgelegt
    InFlight { color: Hue, last_move_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Missile {
    pub position: usize,
    pub kind: MissileKind,
    pub state: MissileState,
    charge_start_ms: u32,
}

impl Missile {
    /// Normales Missile an Position 0, lädt ab `now_ms`
    pub fn charging(now_ms: u32) -> Self {
        Self {
            position: 0,
            kind: MissileKind::Normal,
            state: MissileState::Charging,
            charge_start_ms: now_ms,
        }
    }

    /// Super-Missile an Position 0, sofort geladen
    pub fn super_charged(hue: Hue) -> Self {
        Self {
            position: 0,
            kind: MissileKind::Super { hue },
            state: MissileState::Charging,
            charge_start_ms: 0,
        }
    }

    pub fn is_super(&self) -> bool {
        matches!(self.kind, MissileKind::Super { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, MissileState::InFlight { .. })
    }

    pub fn is_charged(&self, now_ms: u32, charge_ms: u32) -> bool {
        match self.kind {
            MissileKind::Super { .. } => true,
            MissileKind::Normal => now_ms.wrapping_sub(self.charge_start_ms) >= charge_ms,
        }
    }

    /// Farbe auf dem Strip während des Flugs
    ///
    /// Beim Super-Missile der aktuelle Regenbogen-Farbton, sonst die beim
    /// Abschuss fixierte Farbe. `None` solange ein normales Missile lädt.
    pub fn flight_color(&self) -> Option<Hue> {
        match (self.kind, self.state) {
            (MissileKind::Super { hue }, _) => Some(hue),
            (MissileKind::Normal, MissileState::InFlight { color, .. }) => Some(color),
            (MissileKind::Normal, MissileState::Charging) => None,
        }
    }

    /// Abschuss: Farbe fixieren und ersten Schritt machen
    pub fn launch(&mut self, color: Hue, now_ms: u32) {
        self.state = MissileState::InFlight {
            color,
            last_move_ms: now_ms,
        };
        self.position += 1;
    }

    /// Ist es Zeit für den nächsten Pixel?
    pub fn due_to_move(&self, now_ms: u32, step_ms: u32) -> bool {
        match self.state {
            MissileState::InFlight { last_move_ms, .. } => {
                now_ms.wrapping_sub(last_move_ms) >= step_ms
            }
            MissileState::Charging => false,
        }
    }

    /// Einen Pixel weiterfliegen (nur im Flug)
    pub fn step(&mut self, now_ms: u32) {
        if let MissileState::InFlight { last_move_ms, .. } = &mut self.state {
            *last_move_ms = now_ms;
            self.position += 1;
        }
    }
}
