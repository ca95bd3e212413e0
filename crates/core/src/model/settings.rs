use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum GameSettingsError {
    #[error("drop buffer must be finite and non-negative, got {provided}")]
    InvalidDropBuffer { provided: f64 },

    #[error("base points must be > 0")]
    InvalidBasePoints,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tunable gameplay parameters.
///
/// The drop buffer is a UX knob, not a contract: observed builds of the game
/// shipped with 150 px and with 120/100 px, so it stays configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    drop_buffer: f64,
    base_points: u32,
    streak_bonus_step: u32,
}

impl GameSettings {
    /// Creates settings with explicit values.
    ///
    /// # Errors
    ///
    /// Returns `GameSettingsError::InvalidDropBuffer` if the buffer is
    /// negative, NaN, or infinite, and `GameSettingsError::InvalidBasePoints`
    /// if a correct answer would award nothing.
    pub fn new(
        drop_buffer: f64,
        base_points: u32,
        streak_bonus_step: u32,
    ) -> Result<Self, GameSettingsError> {
        if !drop_buffer.is_finite() || drop_buffer < 0.0 {
            return Err(GameSettingsError::InvalidDropBuffer {
                provided: drop_buffer,
            });
        }
        if base_points == 0 {
            return Err(GameSettingsError::InvalidBasePoints);
        }

        Ok(Self {
            drop_buffer,
            base_points,
            streak_bonus_step,
        })
    }

    /// Creates the arcade-style defaults the game ships with:
    /// - 150 px drop tolerance (forgiving for touch input)
    /// - 10 points per correct answer
    /// - +5 bonus points per streak level
    #[must_use]
    pub fn default_arcade() -> Self {
        Self {
            drop_buffer: 150.0,
            base_points: 10,
            streak_bonus_step: 5,
        }
    }

    /// Symmetric tolerance margin, in pixels, applied around the drop zone.
    #[must_use]
    pub fn drop_buffer(&self) -> f64 {
        self.drop_buffer
    }

    /// Points awarded for a correct answer before the streak bonus.
    #[must_use]
    pub fn base_points(&self) -> u32 {
        self.base_points
    }

    /// Extra points per consecutive correct answer already on the streak.
    #[must_use]
    pub fn streak_bonus_step(&self) -> u32 {
        self.streak_bonus_step
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::default_arcade()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
