use std::fmt;

use crate::Flask;

/// A state transition applied to a flask with a parsed amount.
pub type Transition = fn(&mut Flask, f64);

/// One of the two numeric input fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Temperature delta in °C, read by heat and cool.
    Temperature,
    /// Volume delta in ml, read by fill and drink.
    Volume,
}

impl Field {
    /// Returns the label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C):",
            Self::Volume => "Volume (ml):",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Temperature => "temperature",
            Self::Volume => "volume",
        })
    }
}

/// A user action on the flask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Heat,
    Cool,
    Fill,
    Drink,
}

/// Dispatch table: each trigger, the field it reads, and its transition.
const DISPATCH: [(Trigger, Field, Transition); 4] = [
    (Trigger::Heat, Field::Temperature, Flask::heat),
    (Trigger::Cool, Field::Temperature, Flask::cool),
    (Trigger::Fill, Field::Volume, Flask::fill),
    (Trigger::Drink, Field::Volume, Flask::drink),
];

impl Trigger {
    /// All triggers in form order.
    pub const ALL: [Trigger; 4] = [Self::Heat, Self::Cool, Self::Fill, Self::Drink];

    /// Returns the button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Heat => "Heat",
            Self::Cool => "Cool",
            Self::Fill => "Fill",
            Self::Drink => "Drink",
        }
    }

    /// Returns the input field this trigger reads its amount from.
    #[must_use]
    pub fn field(self) -> Field {
        self.entry().1
    }

    /// Returns the flask transition this trigger applies.
    #[must_use]
    pub fn transition(self) -> Transition {
        self.entry().2
    }

    fn entry(self) -> (Trigger, Field, Transition) {
        DISPATCH[self as usize]
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
