//! Toolkit-independent form controller for a [`Flask`].
//!
//! The controller owns the flask and the most recent rendering.
//! A shell forwards each button press as a [`Trigger`] with the raw text of
//! the matching [`Field`], then redraws from [`Controller::display`] and
//! [`Controller::visibility`].

mod error;
mod trigger;

use tracing::{debug, warn};

use crate::{Flask, FlaskConfig};

pub use error::InputError;
pub use trigger::{Field, Transition, Trigger};

/// Which conditional triggers are currently shown.
///
/// Heat and cool are always available.
/// Fill is hidden once the flask is full and drink once it is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub fill: bool,
    pub drink: bool,
}

impl Visibility {
    /// Evaluates visibility for the flask's current volume.
    #[must_use]
    pub fn of(flask: &Flask) -> Self {
        Self {
            fill: !flask.is_full(),
            drink: !flask.is_empty(),
        }
    }

    /// Returns whether `trigger` should be shown.
    #[must_use]
    pub fn is_visible(self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Heat | Trigger::Cool => true,
            Trigger::Fill => self.fill,
            Trigger::Drink => self.drink,
        }
    }
}

/// Drives a single flask from form input.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    flask: Flask,
    display: String,
    visibility: Visibility,
    error: Option<InputError>,
}

impl Controller {
    /// Creates a controller around `flask` and renders its initial state.
    #[must_use]
    pub fn new(flask: Flask) -> Self {
        Self {
            flask,
            display: flask.current_display(),
            visibility: Visibility::of(&flask),
            error: None,
        }
    }

    /// Returns the controlled flask.
    #[must_use]
    pub fn flask(&self) -> &Flask {
        &self.flask
    }

    /// Returns the rendering produced after the last applied trigger.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the visibility evaluated after the last applied trigger.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the error from the last submission, if it was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    /// Applies `trigger` with an already parsed `amount`, then re-renders.
    ///
    /// Clears any previous input error.
    pub fn apply(&mut self, trigger: Trigger, amount: f64) {
        trigger.transition()(&mut self.flask, amount);

        self.display = self.flask.current_display();
        self.visibility = Visibility::of(&self.flask);
        self.error = None;

        debug!(
            %trigger,
            amount,
            temperature = self.flask.temperature(),
            volume = self.flask.current_volume(),
            "applied trigger"
        );
    }

    /// Parses `raw` as the amount for `trigger` and applies it.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if `raw` is not a number.
    /// The flask, rendering, and visibility are left unchanged and the error is
    /// kept until the next successful submission.
    pub fn submit(&mut self, trigger: Trigger, raw: &str) -> Result<(), &InputError> {
        match parse_amount(trigger.field(), raw) {
            Ok(amount) => {
                self.apply(trigger, amount);
                Ok(())
            }
            Err(err) => {
                warn!(%trigger, input = raw, "rejected input: {err}");
                Err(&*self.error.insert(err))
            }
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Flask::from_config(FlaskConfig::default()))
    }
}

/// Parses the text of `field` as an amount.
///
/// Surrounding whitespace is ignored.
/// Any value accepted by `f64`'s parser is returned as-is, including
/// negative, infinite, and `NaN` amounts.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for blank input and
/// [`InputError::Malformed`] for anything that is not a number.
pub fn parse_amount(field: Field, raw: &str) -> Result<f64, InputError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(InputError::Empty { field });
    }

    input.parse().map_err(|source| InputError::Malformed {
        field,
        input: input.to_owned(),
        source,
    })
}
