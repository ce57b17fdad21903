//! User actions from the wizard screens, applied in order at the end of each
//! frame so the views never mutate state mid-render.

use shared::domain::{LayerId, OrgField, Severity};
use wizard::WizardController;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Start,
    BackToIntro,
    EditOrgField { field: OrgField, value: String },
    ConfirmInputs,
    SelectSeverity { layer: LayerId, severity: Severity },
    NextLayer,
    PreviousLayer,
    AdjustScores,
    StartOver,
}

pub fn apply_wizard_action(wizard: &mut WizardController, action: WizardAction) {
    let action_name = match &action {
        WizardAction::Start => "start",
        WizardAction::BackToIntro => "back_to_intro",
        WizardAction::EditOrgField { .. } => "edit_org_field",
        WizardAction::ConfirmInputs => "confirm_inputs",
        WizardAction::SelectSeverity { .. } => "select_severity",
        WizardAction::NextLayer => "next_layer",
        WizardAction::PreviousLayer => "previous_layer",
        WizardAction::AdjustScores => "adjust_scores",
        WizardAction::StartOver => "start_over",
    };
    tracing::debug!(action = action_name, "applying wizard action");

    match action {
        WizardAction::Start => wizard.start(),
        WizardAction::BackToIntro => wizard.back_to_intro(),
        WizardAction::EditOrgField { field, value } => wizard.set_org_input(field, value),
        WizardAction::ConfirmInputs => {
            if !wizard.confirm_inputs() {
                tracing::debug!("confirm refused while the input gate is closed");
            }
        }
        WizardAction::SelectSeverity { layer, severity } => wizard.set_severity(layer, severity),
        WizardAction::NextLayer => wizard.advance_layer(),
        WizardAction::PreviousLayer => wizard.retreat_layer(),
        WizardAction::AdjustScores => wizard.adjust_scores(),
        WizardAction::StartOver => wizard.start_over(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::WizardStep;

    #[test]
    fn actions_drive_the_controller_through_the_flow() {
        let mut wizard = WizardController::new();
        apply_wizard_action(&mut wizard, WizardAction::Start);
        for (field, value) in [
            (OrgField::TeamSize, "50"),
            (OrgField::AvgSalary, "85000"),
            (OrgField::TurnoverRate, "15"),
        ] {
            apply_wizard_action(
                &mut wizard,
                WizardAction::EditOrgField {
                    field,
                    value: value.to_string(),
                },
            );
        }
        apply_wizard_action(&mut wizard, WizardAction::ConfirmInputs);
        assert_eq!(wizard.step(), WizardStep::Scoring);

        apply_wizard_action(
            &mut wizard,
            WizardAction::SelectSeverity {
                layer: LayerId::Replacement,
                severity: Severity::Severe,
            },
        );
        apply_wizard_action(&mut wizard, WizardAction::NextLayer);
        assert_eq!(wizard.current_layer_index(), 1);

        apply_wizard_action(&mut wizard, WizardAction::StartOver);
        assert_eq!(wizard.step(), WizardStep::Intro);
        assert!(wizard.state().scores.is_empty());
    }

    #[test]
    fn refused_confirm_leaves_the_inputs_screen_active() {
        let mut wizard = WizardController::new();
        apply_wizard_action(&mut wizard, WizardAction::Start);
        apply_wizard_action(&mut wizard, WizardAction::ConfirmInputs);
        assert_eq!(wizard.step(), WizardStep::Inputs);
    }
}
