//! State model and form controller for a water flask.
//!
//! A [`Flask`] tracks temperature (°C) and volume (ml).
//! Temperature is unbounded and volume saturates at `[0, capacity]`.
//! The [`controller`] module turns form input into flask operations without
//! depending on any UI toolkit.

mod flask;

pub mod controller;

pub use controller::{Controller, InputError, Trigger, Visibility};
pub use flask::{Flask, FlaskConfig, TemperatureBand};
