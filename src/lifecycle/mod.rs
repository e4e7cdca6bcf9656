//! # Simulation Lifecycle
//!
//! One end-to-end run: mark loading, jump to the result section, call the
//! prediction service while holding the loading view for at least the floor
//! duration, then either publish the result or fall back to the form.
//!
//! The run is split into [`SimulationLifecycle::begin`],
//! [`SimulationLifecycle::predict_with_floor`] and
//! [`SimulationLifecycle::settle`] so an event loop can keep handling scroll
//! and navigation events while the request is pending. [`SimulationLifecycle::run`]
//! chains all three for callers that own the controller for the whole run.

pub mod loading;

pub use loading::*;

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{BuildingType, PredictionResult, Section, SimulationInput};
use crate::navigation::{Notice, SectionController};
use crate::prediction::{PredictionClient, PredictionError};

/// Everything a pending run needs, captured at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub id: Uuid,
    pub input: SimulationInput,
    pub building: BuildingType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    Failed,
}

#[derive(Clone)]
pub struct SimulationLifecycle {
    client: Arc<dyn PredictionClient>,
    floor: Duration,
}

impl SimulationLifecycle {
    pub fn new(client: Arc<dyn PredictionClient>, floor: Duration) -> Self {
        Self { client, floor }
    }

    pub fn floor(&self) -> Duration {
        self.floor
    }

    /// Raises the loading flag and moves to the result section, which the
    /// raised flag makes reachable.
    pub fn begin(
        &self,
        controller: &mut SectionController,
        input: SimulationInput,
        building: BuildingType,
    ) -> RunTicket {
        let ticket = RunTicket {
            id: Uuid::new_v4(),
            input,
            building,
        };
        controller.set_loading(true);
        controller.go_to(Section::Result.index() as i64);
        info!(
            run_id = %ticket.id,
            city = %input.location,
            building = %building,
            floor_ms = self.floor.as_millis() as u64,
            "simulation started"
        );
        ticket
    }

    /// Completes at `max(request latency, floor)`.
    pub async fn predict_with_floor(
        &self,
        ticket: &RunTicket,
    ) -> Result<PredictionResult, PredictionError> {
        let (outcome, ()) = tokio::join!(
            self.client.predict(&ticket.input, ticket.building),
            tokio::time::sleep(self.floor),
        );
        outcome
    }

    pub fn settle(
        &self,
        controller: &mut SectionController,
        ticket: &RunTicket,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> RunOutcome {
        match outcome {
            Ok(result) => {
                info!(
                    run_id = %ticket.id,
                    savings_percent = result.savings_percent,
                    "simulation finished"
                );
                controller.set_result(Some(result));
                controller.set_loading(false);
                RunOutcome::Succeeded
            }
            Err(e) => {
                warn!(run_id = %ticket.id, error_kind = e.kind(), error = %e, "simulation failed");
                controller.set_result(None);
                controller.set_loading(false);
                controller.go_to(Section::Simulator.index() as i64);
                controller.notifier().notify(Notice::PredictionFailed);
                RunOutcome::Failed
            }
        }
    }

    /// Runs a simulation to completion. No retry on failure; the user resubmits.
    pub async fn run(
        &self,
        controller: &mut SectionController,
        input: SimulationInput,
        building: BuildingType,
    ) -> RunOutcome {
        let ticket = self.begin(controller, input, building);
        let outcome = self.predict_with_floor(&ticket).await;
        self.settle(controller, &ticket, outcome)
    }
}
