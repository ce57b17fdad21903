//! Step-driven assessment flow: a single owned [`WizardState`] mutated only
//! through [`WizardController`], read by any number of views. All transitions
//! are synchronous; visual effects are a concern of the presentation layer.

use cost_model::CostReport;
use serde::{Deserialize, Serialize};
use shared::{
    domain::{LayerId, OrgField, OrgInputs, Severity, SeverityScores, WizardStep},
    layers::{CostLayer, LAYERS},
};

/// Complete state of one assessment session. Step and layer index are
/// transient navigation state; inputs and scores survive navigation until an
/// explicit start-over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub current_layer: usize,
    pub inputs: OrgInputs,
    pub scores: SeverityScores,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: WizardStep::Intro,
            current_layer: 0,
            inputs: OrgInputs::default(),
            scores: SeverityScores::new(),
        }
    }
}

/// The single writer of [`WizardState`]. Only the transitions of the flow
/// graph are reachable: intro to inputs to scoring to results, back edges,
/// adjust-scores, and the full reset.
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    pub fn current_layer_index(&self) -> usize {
        self.state.current_layer
    }

    pub fn current_layer(&self) -> &'static CostLayer {
        &LAYERS[self.state.current_layer.min(LAYERS.len() - 1)]
    }

    pub fn is_last_layer(&self) -> bool {
        self.state.current_layer + 1 >= LAYERS.len()
    }

    /// Navigation only: changes which screen is shown, touches no data.
    pub fn go_to_step(&mut self, step: WizardStep) {
        tracing::debug!(from = ?self.state.step, to = ?step, "wizard step change");
        self.state.step = step;
    }

    /// Stores the raw text of one input field verbatim. No parsing happens
    /// here; resolution to numbers is deferred to calculation time.
    pub fn set_org_input(&mut self, field: OrgField, raw: impl Into<String>) {
        self.state.inputs.set(field, raw);
    }

    /// The confirm gate: all three fields non-empty. Numeric validity is not
    /// checked; unparsable text falls back to defaults later.
    pub fn can_advance_from_inputs(&self) -> bool {
        self.state.inputs.all_present()
    }

    pub fn set_severity(&mut self, id: LayerId, severity: Severity) {
        self.state.scores.insert(id, severity);
    }

    /// Moves to the next layer, implicitly recording Moderate for the current
    /// one if the user never picked a value. On the last layer this reveals
    /// the results instead.
    pub fn advance_layer(&mut self) {
        if self.state.step != WizardStep::Scoring {
            return;
        }
        let current = self.current_layer().id;
        self.state.scores.entry(current).or_default();
        if self.is_last_layer() {
            self.go_to_step(WizardStep::Results);
        } else {
            self.state.current_layer += 1;
        }
    }

    /// Moves to the previous layer, or back to the inputs screen from the
    /// first one. Stored scores are untouched either way.
    pub fn retreat_layer(&mut self) {
        if self.state.step != WizardStep::Scoring {
            return;
        }
        if self.state.current_layer > 0 {
            self.state.current_layer -= 1;
        } else {
            self.go_to_step(WizardStep::Inputs);
        }
    }

    pub fn start(&mut self) {
        if self.state.step == WizardStep::Intro {
            self.go_to_step(WizardStep::Inputs);
        }
    }

    pub fn back_to_intro(&mut self) {
        if self.state.step == WizardStep::Inputs {
            self.go_to_step(WizardStep::Intro);
        }
    }

    /// Enters scoring at the first layer. Refused while the gate is closed.
    pub fn confirm_inputs(&mut self) -> bool {
        if self.state.step != WizardStep::Inputs || !self.can_advance_from_inputs() {
            return false;
        }
        self.state.current_layer = 0;
        self.go_to_step(WizardStep::Scoring);
        true
    }

    /// Returns from results to scoring, resuming at the layer the user was
    /// last on with every score retained.
    pub fn adjust_scores(&mut self) {
        if self.state.step == WizardStep::Results {
            self.go_to_step(WizardStep::Scoring);
        }
    }

    /// Restores the initial empty state and shows the intro again.
    pub fn reset(&mut self) {
        tracing::debug!("wizard reset");
        self.state = WizardState::default();
    }

    pub fn start_over(&mut self) {
        self.reset();
    }

    /// Derived figures for the current state, recomputed on every call.
    pub fn report(&self) -> CostReport {
        CostReport::compute(&self.state.inputs, &self.state.scores)
    }
}

#[cfg(test)]
mod tests;
