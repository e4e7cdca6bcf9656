use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Staged narration shown while a run is in flight. The stages are cosmetic;
/// they do not track the real request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoadingStage {
    CollectingParameters,
    InitializingModel,
    RunningSimulation,
    NeuralNetwork,
}

impl LoadingStage {
    pub const ALL: [LoadingStage; 4] = [
        Self::CollectingParameters,
        Self::InitializingModel,
        Self::RunningSimulation,
        Self::NeuralNetwork,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::CollectingParameters => "Collecting parameters",
            Self::InitializingModel => "Initializing model",
            Self::RunningSimulation => "Running simulation",
            Self::NeuralNetwork => "Processing with Deep Neural Network",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CollectingParameters => "Gathering input data for simulation",
            Self::InitializingModel => "Setting up the simulation environment",
            Self::RunningSimulation => "Processing the data through our model",
            Self::NeuralNetwork => "Running the trained network on your parameters",
        }
    }

    /// Position highlighted in the three-item checklist. The neural network
    /// stage keeps the last checklist item active.
    pub fn checklist_step(self) -> usize {
        self.index().min(Self::RunningSimulation.index())
    }

    pub fn shows_neural_network(self) -> bool {
        self == Self::NeuralNetwork
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSchedule {
    step_interval: Duration,
}

impl LoadingSchedule {
    pub fn new(step_interval: Duration) -> Self {
        Self { step_interval }
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Stage to display `elapsed` after the run started. Holds on the final
    /// stage until the run settles.
    pub fn stage_at(&self, elapsed: Duration) -> LoadingStage {
        let last = LoadingStage::ALL.len() - 1;
        let steps = if self.step_interval.is_zero() {
            last
        } else {
            (elapsed.as_millis() / self.step_interval.as_millis().max(1)).min(last as u128) as usize
        };
        LoadingStage::ALL[steps]
    }

    /// Time until the final stage is reached.
    pub fn time_to_final_stage(&self) -> Duration {
        self.step_interval * (LoadingStage::ALL.len() as u32 - 1)
    }
}
