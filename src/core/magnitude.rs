use serde::{Deserialize, Serialize};

use crate::error::{QuakeError, QuakeResult};

/// Magnitude bins used for filtering and stacking.
///
/// Bins are closed on the right: `(-inf, 6]`, `(6, 7]`, `(7, 8]`, `(8, inf)`.
/// A boundary value belongs to the lower bin, so `6.0` is `One` and `8.0` is `Three`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MagnitudeCategory {
    One,
    Two,
    Three,
    Four,
}

impl MagnitudeCategory {
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    pub fn from_magnitude(magnitude: f64) -> QuakeResult<Self> {
        if magnitude.is_nan() {
            return Err(QuakeError::UnknownMagnitudeCategory { magnitude });
        }

        Ok(if magnitude <= 6.0 {
            Self::One
        } else if magnitude <= 7.0 {
            Self::Two
        } else if magnitude <= 8.0 {
            Self::Three
        } else {
            Self::Four
        })
    }

    /// Zero-based position, also the stacking layer index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }
}

/// One enable flag per magnitude bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryToggles {
    enabled: [bool; 4],
}

impl Default for CategoryToggles {
    fn default() -> Self {
        Self::all()
    }
}

impl CategoryToggles {
    #[must_use]
    pub const fn all() -> Self {
        Self { enabled: [true; 4] }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self {
            enabled: [false; 4],
        }
    }

    #[must_use]
    pub fn with(mut self, category: MagnitudeCategory, enabled: bool) -> Self {
        self.set(category, enabled);
        self
    }

    pub fn set(&mut self, category: MagnitudeCategory, enabled: bool) {
        self.enabled[category.index()] = enabled;
    }

    #[must_use]
    pub fn is_enabled(self, category: MagnitudeCategory) -> bool {
        self.enabled[category.index()]
    }

    #[must_use]
    pub fn any_enabled(self) -> bool {
        self.enabled.iter().any(|enabled| *enabled)
    }
}
