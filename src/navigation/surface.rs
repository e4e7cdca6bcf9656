//! Seams to the presentation layer: the scroll container and the notice medium.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// User-facing notice. The presentation layer picks the medium (alert, banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// Forward navigation into the result section was refused.
    EnterSimulationInfo,
    /// The prediction failed and the user was returned to the form.
    PredictionFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::EnterSimulationInfo => "Enter the simulation info before proceeding.",
            Self::PredictionFailed => "The simulation could not be completed. Please try again.",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ScrollSurface: Send + Sync {
    /// Smooth-scrolls the container so that `offset` is at the viewport top.
    fn smooth_scroll_to(&self, offset: f64);
}

#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Surface for headless use: records nothing, only logs the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSurface;

impl ScrollSurface for LoggingSurface {
    fn smooth_scroll_to(&self, offset: f64) {
        info!(offset, "scroll requested");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, notice: Notice) {
        warn!(?notice, message = notice.message(), "user notice");
    }
}
