use std::fmt;

/// A temperature range used to pick the flask's rendering.
///
/// Bands are evaluated in order and every boundary falls to the lower band:
///
/// - [`Ice`](Self::Ice): below 0°C
/// - [`Cool`](Self::Cool): 0°C to 20°C inclusive
/// - [`RoomTemp`](Self::RoomTemp): above 20°C up to 25°C
/// - [`Warm`](Self::Warm): above 25°C up to 40°C
/// - [`Hot`](Self::Hot): above 40°C
///
/// A `NaN` temperature matches none of the bounded ranges and is treated as [`Hot`](Self::Hot).
///
/// # Example
///
/// ```
/// use flask_core::TemperatureBand;
///
/// assert_eq!(TemperatureBand::from_celsius(20.0), TemperatureBand::Cool);
/// assert_eq!(TemperatureBand::from_celsius(20.0001), TemperatureBand::RoomTemp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    Ice,
    Cool,
    RoomTemp,
    Warm,
    Hot,
}

impl TemperatureBand {
    /// Selects the band containing `temperature` (°C).
    #[must_use]
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature < 0.0 {
            Self::Ice
        } else if temperature <= 20.0 {
            Self::Cool
        } else if temperature <= 25.0 {
            Self::RoomTemp
        } else if temperature <= 40.0 {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Returns the band's human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ice => "ICE",
            Self::Cool => "COOL",
            Self::RoomTemp => "ROOM TEMP",
            Self::Warm => "WARM",
            Self::Hot => "HOT!",
        }
    }

    /// Returns the three lines drawn inside the flask body for this band.
    #[must_use]
    pub fn interior(self) -> [&'static str; 3] {
        match self {
            Self::Ice => ["  |   :::  |", "  |  ICE   |", "  | :::  |"],
            Self::Cool => ["  |   ....   |", "  |  COOL   |", "  | ....   |"],
            Self::RoomTemp => ["  |   ....   |", "  |  ROOM   |", "  | TEMP    |"],
            Self::Warm => ["  |   ,,,,   |", "  |  WARM   |", "  | ,,,,    |"],
            Self::Hot => ["  |   ~~~~   |", "  |  HOT!   |", "  | ~~~~    |"],
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
