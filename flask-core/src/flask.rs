mod band;

use std::fmt;

use uom::si::{
    f64::{ThermodynamicTemperature, Volume},
    thermodynamic_temperature::degree_celsius,
    volume::milliliter,
};

pub use band::TemperatureBand;

/// A flask holding a volume of liquid at a temperature.
///
/// Temperature is tracked in degrees Celsius and is unbounded.
/// Volume is tracked in milliliters and every [`fill`](Self::fill) or
/// [`drink`](Self::drink) saturates at `[0, capacity]` rather than rejecting
/// the request.
///
/// Capacity is fixed at [`Flask::CAPACITY`] for every flask.
///
/// # Example
///
/// ```
/// use flask_core::Flask;
///
/// let mut flask = Flask::new(25.0, 250.0);
///
/// flask.fill(300.0);
/// assert_eq!(flask.current_volume(), 500.0);
///
/// flask.drink(600.0);
/// assert_eq!(flask.current_volume(), 0.0);
///
/// flask.heat(20.0);
/// assert_eq!(flask.temperature(), 45.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flask {
    temperature: f64,
    current_volume: f64,
}

/// Initial state of a [`Flask`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlaskConfig {
    /// Starting temperature in °C.
    pub initial_temperature: f64,

    /// Starting volume in ml, capped at [`Flask::CAPACITY`].
    pub initial_volume: f64,
}

impl Default for FlaskConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 25.0,
            initial_volume: 250.0,
        }
    }
}

impl Flask {
    /// Maximum volume of any flask, in ml.
    pub const CAPACITY: f64 = 500.0;

    /// Creates a flask at `initial_temperature` (°C) holding `initial_volume` (ml).
    ///
    /// The volume is capped at [`Flask::CAPACITY`].
    /// It is not raised to zero, so a negative initial volume is kept as given.
    #[must_use]
    pub fn new(initial_temperature: f64, initial_volume: f64) -> Self {
        let current_volume = if initial_volume <= Self::CAPACITY {
            initial_volume
        } else {
            Self::CAPACITY
        };

        Self {
            temperature: initial_temperature,
            current_volume,
        }
    }

    /// Creates a flask from a [`FlaskConfig`].
    #[must_use]
    pub fn from_config(config: FlaskConfig) -> Self {
        let FlaskConfig {
            initial_temperature,
            initial_volume,
        } = config;

        Self::new(initial_temperature, initial_volume)
    }

    /// Raises the temperature by `degrees`.
    pub fn heat(&mut self, degrees: f64) {
        self.temperature += degrees;
    }

    /// Lowers the temperature by `degrees`.
    pub fn cool(&mut self, degrees: f64) {
        self.temperature -= degrees;
    }

    /// Adds `volume` ml, saturating at capacity.
    ///
    /// Any excess above capacity is discarded.
    pub fn fill(&mut self, volume: f64) {
        if self.current_volume + volume <= Self::CAPACITY {
            self.current_volume += volume;
        } else {
            self.current_volume = Self::CAPACITY;
        }
    }

    /// Removes `volume` ml, saturating at empty.
    pub fn drink(&mut self, volume: f64) {
        if self.current_volume - volume >= 0.0 {
            self.current_volume -= volume;
        } else {
            self.current_volume = 0.0;
        }
    }

    /// Returns the temperature in °C.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Returns the current volume in ml.
    #[must_use]
    pub fn current_volume(&self) -> f64 {
        self.current_volume
    }

    /// Returns the capacity in ml.
    #[must_use]
    pub fn capacity(&self) -> f64 {
        Self::CAPACITY
    }

    /// Returns `true` once the flask holds its full capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.current_volume >= Self::CAPACITY
    }

    /// Returns `true` once nothing is left to drink.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current_volume <= 0.0
    }

    /// Returns the band used to render the current temperature.
    #[must_use]
    pub fn band(&self) -> TemperatureBand {
        TemperatureBand::from_celsius(self.temperature)
    }

    /// Returns the temperature as a unit-aware quantity.
    #[must_use]
    pub fn thermodynamic_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.temperature)
    }

    /// Returns the current volume as a unit-aware quantity.
    #[must_use]
    pub fn volume(&self) -> Volume {
        Volume::new::<milliliter>(self.current_volume)
    }

    /// Returns the capacity as a unit-aware quantity.
    #[must_use]
    pub fn capacity_volume(&self) -> Volume {
        Volume::new::<milliliter>(Self::CAPACITY)
    }

    /// Renders the multi-line status summary.
    ///
    /// Equivalent to `self.to_string()`.
    #[must_use]
    pub fn current_display(&self) -> String {
        self.to_string()
    }
}

impl Default for Flask {
    fn default() -> Self {
        Self::from_config(FlaskConfig::default())
    }
}

const STEM: &str = "      |||";
const RIM: &str = "   |______|";

/// Writes the temperature and volume lines followed by the ASCII-art flask.
///
/// Numbers use `Debug` formatting so whole values keep their `.0`.
impl fmt::Display for Flask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Temperature: {:?}°C", self.temperature)?;
        writeln!(
            f,
            "Current Volume: {:?} ml / {:?} ml",
            self.current_volume,
            Self::CAPACITY
        )?;

        for _ in 0..3 {
            writeln!(f, "{STEM}")?;
        }
        writeln!(f, "{RIM}")?;
        for line in self.band().interior() {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{RIM}")
    }
}
