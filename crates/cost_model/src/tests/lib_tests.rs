use super::*;
use shared::domain::{LayerId, OrgInputs, Severity};
use shared::layers::{layer, LAYERS};

fn inputs(team_size: &str, avg_salary: &str, turnover_rate: &str) -> OrgInputs {
    OrgInputs {
        team_size: team_size.to_string(),
        avg_salary: avg_salary.to_string(),
        turnover_rate: turnover_rate.to_string(),
    }
}

fn all_moderate() -> SeverityScores {
    LAYERS
        .iter()
        .map(|layer| (layer.id, Severity::Moderate))
        .collect()
}

#[test]
fn neutral_severity_reproduces_nominal_layer_cost() {
    for entry in &LAYERS {
        let cost = layer_cost(entry, Severity::Moderate, 85_000.0);
        assert_eq!(cost, 85_000.0 * entry.default_multiplier);
    }
}

#[test]
fn layer_cost_is_linear_in_severity() {
    let baseline = 60_000.0;
    for entry in &LAYERS {
        let nominal = layer_cost(entry, Severity::Moderate, baseline);
        for severity in Severity::ALL {
            let expected = f64::from(severity.value()) / 3.0 * nominal;
            let actual = layer_cost(entry, severity, baseline);
            assert!(
                (actual - expected).abs() < 1e-9,
                "{} at severity {}: {actual} vs {expected}",
                entry.id,
                severity.value()
            );
        }
    }
}

#[test]
fn total_cost_sums_every_layer_including_the_visible_one() {
    let mut scores = all_moderate();
    scores.insert(LayerId::Replacement, Severity::Severe);
    scores.insert(LayerId::Culture, Severity::Minimal);

    let baseline = 85_000.0;
    let by_hand: f64 = LAYERS
        .iter()
        .map(|l| layer_cost(l, severity_for(&scores, l.id), baseline))
        .sum();
    let total = total_cost(&scores, baseline);
    assert!((total - by_hand).abs() < 1e-9);

    let hidden_only: f64 = shared::layers::hidden_layers()
        .map(|l| layer_cost(l, severity_for(&scores, l.id), baseline))
        .sum();
    let visible = visible_cost(&scores, baseline);
    assert!((total - hidden_only - visible).abs() < 1e-9);
}

#[test]
fn missing_scores_read_as_moderate() {
    let scores = SeverityScores::new();
    assert_eq!(severity_for(&scores, LayerId::Morale), Severity::Moderate);
    assert_eq!(
        total_cost(&scores, 85_000.0),
        total_cost(&all_moderate(), 85_000.0)
    );
}

#[test]
fn raw_inputs_resolve_with_defaults_on_parse_failure() {
    let raw = inputs("abc", "", "  ");
    assert_eq!(resolve_team_size(&raw), DEFAULT_TEAM_SIZE);
    assert_eq!(resolve_baseline(&raw), DEFAULT_AVG_SALARY);
    assert_eq!(resolve_turnover_rate(&raw), DEFAULT_TURNOVER_RATE);
    // Resolution never writes back into the stored text.
    assert_eq!(raw.team_size, "abc");
    assert_eq!(raw.avg_salary, "");
    assert_eq!(raw.turnover_rate, "  ");
}

#[test]
fn parsable_inputs_resolve_verbatim() {
    let raw = inputs(" 120 ", "92500.5", "8.5");
    assert_eq!(resolve_team_size(&raw), 120);
    assert_eq!(resolve_baseline(&raw), 92_500.5);
    assert_eq!(resolve_turnover_rate(&raw), 8.5);
}

#[test]
fn multiplier_is_zero_when_visible_cost_is_zero() {
    assert_eq!(multiplier(255_000.0, 0.0), 0.0);
    assert_eq!(multiplier(0.0, 0.0), 0.0);
    assert_eq!(multiplier(255_000.0, 42_500.0), 6.0);
}

#[test]
fn departures_round_half_up() {
    assert_eq!(departures_per_year(50, 15.0), 8);
    assert_eq!(departures_per_year(50, 14.0), 7);
    assert_eq!(departures_per_year(33, 10.0), 3);
    assert_eq!(departures_per_year(0, 15.0), 0);
}

#[test]
fn percent_of_total_guards_zero_total() {
    assert_eq!(percent_of_total(42_500.0, 0.0), 0.0);
    assert!((percent_of_total(42_500.0, 255_000.0) - 16.666_666_666_666_664).abs() < 1e-9);
}

#[test]
fn reference_scenario_matches_expected_figures() {
    let report = CostReport::compute(&inputs("50", "85000", "15"), &all_moderate());

    assert_eq!(report.baseline, 85_000.0);
    assert_eq!(report.team_size, 50);
    assert_eq!(report.turnover_rate, 15.0);
    assert_eq!(report.visible_cost, 42_500.0);
    assert!((report.total_cost - 255_000.0).abs() < 1e-6);
    assert!((report.multiplier - 6.0).abs() < 1e-9);
    assert_eq!(report.departures_per_year, 8);
    assert!((report.annual_exposure - 1_912_500.0).abs() < 1e-6);
    assert_eq!(report.narrative_tier, NarrativeTier::Compounding);
}

#[test]
fn empty_inputs_and_scores_match_the_reference_scenario() {
    let defaulted = CostReport::compute(&OrgInputs::default(), &SeverityScores::new());
    let explicit = CostReport::compute(&inputs("50", "85000", "15"), &all_moderate());

    assert_eq!(defaulted.visible_cost, explicit.visible_cost);
    assert_eq!(defaulted.total_cost, explicit.total_cost);
    assert_eq!(defaulted.multiplier, explicit.multiplier);
    assert_eq!(defaulted.departures_per_year, explicit.departures_per_year);
    assert_eq!(defaulted.annual_exposure, explicit.annual_exposure);
}

#[test]
fn zero_salary_yields_zero_visible_cost_and_zero_multiplier() {
    let report = CostReport::compute(&inputs("50", "0", "15"), &SeverityScores::new());
    assert_eq!(report.visible_cost, 0.0);
    assert_eq!(report.total_cost, 0.0);
    assert_eq!(report.multiplier, 0.0);
    assert!(report.multiplier.is_finite());
    for row in &report.rows {
        assert_eq!(row.percent_of_total, 0.0);
    }
}

#[test]
fn report_rows_cover_all_layers_in_table_order() {
    let mut scores = SeverityScores::new();
    scores.insert(LayerId::Productivity, Severity::Severe);

    let report = CostReport::compute(&inputs("50", "85000", "15"), &scores);
    assert_eq!(report.rows.len(), LAYERS.len());
    assert!(report.rows[0].above_waterline);
    assert_eq!(report.rows[0].id, LayerId::Replacement);

    let productivity = report
        .rows
        .iter()
        .find(|row| row.id == LayerId::Productivity)
        .expect("row");
    assert_eq!(productivity.severity, Severity::Severe);
    assert_eq!(
        productivity.cost,
        layer_cost(layer(LayerId::Productivity), Severity::Severe, 85_000.0)
    );

    let percent_sum: f64 = report.rows.iter().map(|row| row.percent_of_total).sum();
    assert!((percent_sum - 100.0).abs() < 1e-9);
}

#[test]
fn narrative_tier_thresholds_sit_at_four_and_two_point_five() {
    assert_eq!(narrative_tier(6.0), NarrativeTier::Compounding);
    assert_eq!(narrative_tier(4.0), NarrativeTier::Compounding);
    assert_eq!(narrative_tier(3.99), NarrativeTier::Significant);
    assert_eq!(narrative_tier(2.5), NarrativeTier::Significant);
    assert_eq!(narrative_tier(2.49), NarrativeTier::Balanced);
    assert_eq!(narrative_tier(0.0), NarrativeTier::Balanced);
}

#[test]
fn compounding_narrative_interpolates_the_per_point_saving() {
    let report = CostReport::compute(&inputs("50", "85000", "15"), &all_moderate());
    // 1,912,500 × 0.01 ÷ 0.15 = 127,500 per turnover point.
    assert!(report.narrative.starts_with("At a 6.0× multiplier"));
    assert!(report.narrative.contains("approximately $128K"));
}

#[test]
fn significant_narrative_interpolates_the_severity_reduction_saving() {
    // A Severe visible layer with one Minimal hidden layer lands the
    // multiplier in the middle band (about 3.84).
    let mut scores = all_moderate();
    scores.insert(LayerId::Replacement, Severity::Severe);
    scores.insert(LayerId::Culture, Severity::Minimal);

    let report = CostReport::compute(&inputs("50", "85000", "15"), &scores);
    assert_eq!(report.narrative_tier, NarrativeTier::Significant);
    // 85,000 × 0.25 × 8 departures = 170,000.
    assert!(report.narrative.contains("would save $170K annually"));
}

#[test]
fn balanced_narrative_applies_below_the_lower_threshold() {
    // Severe visible layer with Minimal hidden layers keeps the ratio low.
    let mut scores = SeverityScores::new();
    scores.insert(LayerId::Replacement, Severity::Severe);
    for layer in shared::layers::hidden_layers() {
        scores.insert(layer.id, Severity::Minimal);
    }

    let report = CostReport::compute(&inputs("50", "85000", "15"), &scores);
    assert_eq!(report.narrative_tier, NarrativeTier::Balanced);
    assert!(report.narrative.contains("relatively balanced"));
}
