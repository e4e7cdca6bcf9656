//! Serialized event loop around [`SectionController`] and [`SimulationLifecycle`].
//!
//! Navigation clicks, scroll observations and prediction completions all land
//! on one queue and are applied one at a time, so the two navigation sources
//! can never race each other. State goes out on a `watch` channel.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{Config, DeviceConfig};
use crate::device::is_mobile_viewport;
use crate::domain::{
    BuildingScene, BuildingType, ForwardControl, PredictionResult, Section, SimulationInput,
};
use crate::lifecycle::{LoadingSchedule, LoadingStage, RunTicket, SimulationLifecycle};
use crate::navigation::{Notifier, ScrollSurface, SectionController, SectionLayout};
use crate::prediction::{PredictionClient, PredictionError};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Advance,
    Retreat,
    GoTo(i64),
    Scroll { offset: f64, viewport_height: f64 },
    Resize { width: f64, height: f64 },
    SetLayout(SectionLayout),
    SelectBuilding(BuildingType),
    Submit(SimulationInput),
}

#[derive(Debug)]
enum Inbound {
    App(AppEvent),
    Settled {
        ticket: RunTicket,
        outcome: Result<PredictionResult, PredictionError>,
    },
}

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSnapshot {
    pub section: Section,
    pub loading: bool,
    pub result: Option<PredictionResult>,
    pub can_enter_result: bool,
    pub forward_control: ForwardControl,
    pub building: BuildingType,
    pub scene: BuildingScene,
    pub mobile_blocked: bool,
    pub run_id: Option<Uuid>,
    pub run_started_at: Option<Instant>,
}

#[derive(Debug, Error)]
#[error("application runtime has shut down")]
pub struct RuntimeClosed;

struct PendingRun {
    id: Uuid,
    started_at: Instant,
}

pub struct AppRuntime {
    controller: SectionController,
    lifecycle: SimulationLifecycle,
    device: DeviceConfig,
    building: BuildingType,
    mobile_blocked: bool,
    pending: Option<PendingRun>,
    rx: mpsc::UnboundedReceiver<Inbound>,
    tx: mpsc::WeakUnboundedSender<Inbound>,
    state_tx: watch::Sender<AppSnapshot>,
}

impl AppRuntime {
    /// Starts the event loop on the current tokio runtime. The loop stops once
    /// every [`AppHandle`] is dropped and no run is pending.
    pub fn spawn(
        cfg: &Config,
        client: Arc<dyn PredictionClient>,
        surface: Arc<dyn ScrollSurface>,
        notifier: Arc<dyn Notifier>,
    ) -> AppHandle {
        let controller = SectionController::new(
            SectionLayout::full_viewport(cfg.navigation.default_viewport_height),
            surface,
            notifier,
        );
        let lifecycle = SimulationLifecycle::new(client, cfg.simulation.floor_duration());
        let (tx, rx) = mpsc::unbounded_channel();

        let mut runtime = AppRuntime {
            controller,
            lifecycle,
            device: cfg.device.clone(),
            building: BuildingType::default(),
            mobile_blocked: false,
            pending: None,
            rx,
            tx: tx.downgrade(),
            state_tx: watch::Sender::new(initial_snapshot()),
        };
        runtime.publish();
        let state = runtime.state_tx.subscribe();

        tokio::spawn(async move {
            runtime.run().await;
        });

        AppHandle {
            tx,
            state,
            schedule: LoadingSchedule::new(cfg.loading.step_interval()),
        }
    }

    async fn run(&mut self) {
        info!("app runtime started");
        while let Some(inbound) = self.rx.recv().await {
            self.handle(inbound);
            self.publish();
        }
        info!("app runtime stopped");
    }

    fn handle(&mut self, inbound: Inbound) {
        match inbound {
            Inbound::App(AppEvent::Advance) => {
                self.controller.advance();
            }
            Inbound::App(AppEvent::Retreat) => {
                self.controller.retreat();
            }
            Inbound::App(AppEvent::GoTo(index)) => {
                self.controller.go_to(index);
            }
            Inbound::App(AppEvent::Scroll {
                offset,
                viewport_height,
            }) => {
                self.controller.observe_scroll(offset, viewport_height);
            }
            Inbound::App(AppEvent::Resize { width, height }) => {
                self.mobile_blocked = is_mobile_viewport(width, &self.device);
                self.controller.resize_viewport(height);
            }
            Inbound::App(AppEvent::SetLayout(layout)) => {
                self.controller.set_layout(layout);
            }
            Inbound::App(AppEvent::SelectBuilding(building)) => {
                debug!(%building, "building selected");
                self.building = building;
            }
            Inbound::App(AppEvent::Submit(input)) => self.submit(input),
            Inbound::Settled { ticket, outcome } => self.settle(ticket, outcome),
        }
    }

    fn submit(&mut self, input: SimulationInput) {
        if let Some(pending) = &self.pending {
            warn!(run_id = %pending.id, "submission ignored while a run is in flight");
            return;
        }
        let Some(tx) = self.tx.upgrade() else {
            return;
        };
        let ticket = self.lifecycle.begin(&mut self.controller, input, self.building);
        self.pending = Some(PendingRun {
            id: ticket.id,
            started_at: Instant::now(),
        });

        let lifecycle = self.lifecycle.clone();
        tokio::spawn(async move {
            let outcome = lifecycle.predict_with_floor(&ticket).await;
            let _ = tx.send(Inbound::Settled { ticket, outcome });
        });
    }

    fn settle(&mut self, ticket: RunTicket, outcome: Result<PredictionResult, PredictionError>) {
        if self.pending.as_ref().map(|p| p.id) != Some(ticket.id) {
            debug!(run_id = %ticket.id, "discarding stale run result");
            return;
        }
        self.pending = None;
        self.lifecycle.settle(&mut self.controller, &ticket, outcome);
    }

    fn publish(&self) {
        let section = self.controller.current();
        self.state_tx.send_replace(AppSnapshot {
            section,
            loading: self.controller.loading(),
            result: self.controller.result().cloned(),
            can_enter_result: self.controller.can_enter_result(),
            forward_control: ForwardControl::for_section(section),
            building: self.building,
            scene: self.building.scene(),
            mobile_blocked: self.mobile_blocked,
            run_id: self.pending.as_ref().map(|p| p.id),
            run_started_at: self.pending.as_ref().map(|p| p.started_at),
        });
    }
}

fn initial_snapshot() -> AppSnapshot {
    AppSnapshot {
        section: Section::Intro,
        loading: false,
        result: None,
        can_enter_result: false,
        forward_control: ForwardControl::Begin,
        building: BuildingType::default(),
        scene: BuildingType::default().scene(),
        mobile_blocked: false,
        run_id: None,
        run_started_at: None,
    }
}

#[derive(Clone)]
pub struct AppHandle {
    tx: mpsc::UnboundedSender<Inbound>,
    state: watch::Receiver<AppSnapshot>,
    schedule: LoadingSchedule,
}

impl AppHandle {
    pub fn send(&self, event: AppEvent) -> Result<(), RuntimeClosed> {
        self.tx.send(Inbound::App(event)).map_err(|_| RuntimeClosed)
    }

    pub fn advance(&self) -> Result<(), RuntimeClosed> {
        self.send(AppEvent::Advance)
    }

    pub fn retreat(&self) -> Result<(), RuntimeClosed> {
        self.send(AppEvent::Retreat)
    }

    pub fn go_to(&self, index: i64) -> Result<(), RuntimeClosed> {
        self.send(AppEvent::GoTo(index))
    }

    pub fn scroll(&self, offset: f64, viewport_height: f64) -> Result<(), RuntimeClosed> {
        self.send(AppEvent::Scroll {
            offset,
            viewport_height,
        })
    }

    pub fn resize(&self, width: f64, height: f64) -> Result<(), RuntimeClosed> {
        self.send(AppEvent::Resize { width, height })
    }

    pub fn select_building(&self, building: BuildingType) -> Result<(), RuntimeClosed> {
        self.send(AppEvent::SelectBuilding(building))
    }

    pub fn submit(&self, input: SimulationInput) -> Result<(), RuntimeClosed> {
        self.send(AppEvent::Submit(input))
    }

    pub fn snapshot(&self) -> AppSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppSnapshot> {
        self.state.clone()
    }

    /// Waits until a published snapshot satisfies `predicate`.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&AppSnapshot) -> bool,
    ) -> Result<AppSnapshot, RuntimeClosed> {
        let mut rx = self.state.clone();
        let snapshot = rx.wait_for(predicate).await.map_err(|_| RuntimeClosed)?;
        Ok(snapshot.clone())
    }

    /// Loading stage to display right now, if a run is in flight.
    pub fn loading_stage(&self) -> Option<LoadingStage> {
        let started = self.state.borrow().run_started_at?;
        Some(self.schedule.stage_at(started.elapsed()))
    }
}
