use tarmac_kernel::Session;

/// Read-only per-frame HUD values: speed and position, the two numbers the
/// overlay shows while driving.
#[derive(Debug, Clone, Copy)]
pub struct HudSummary {
    pub speed: f32,
    pub x: f32,
    pub y: f32,
}

impl HudSummary {
    pub fn from_session(session: &Session) -> Self {
        let player = session.player();
        Self {
            speed: player.speed(),
            x: player.body.pos.x,
            y: player.body.pos.y,
        }
    }
}

impl std::fmt::Display for HudSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Speed: {}  X: {}  Y: {}",
            self.speed.round(),
            self.x.round(),
            self.y.round()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarmac_common::Intents;
    use tarmac_kernel::SessionConfig;

    #[test]
    fn summary_reflects_player_state() {
        let mut session = Session::new(SessionConfig::default(), 42);
        session.step(
            &Intents {
                accel: true,
                ..Intents::default()
            },
            0.016,
        );
        let hud = HudSummary::from_session(&session);
        assert!(hud.speed > 0.0);
        assert_eq!(hud.x, session.player().body.pos.x);
    }

    #[test]
    fn display_rounds_values() {
        let hud = HudSummary {
            speed: 123.4,
            x: 2616.7,
            y: 1970.2,
        };
        let s = format!("{hud}");
        assert_eq!(s, "Speed: 123  X: 2617  Y: 1970");
    }
}
