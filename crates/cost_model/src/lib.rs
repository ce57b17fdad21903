//! Pure cost arithmetic: resolves raw organization inputs, prices each cost
//! layer from its severity, and derives the headline figures. Recomputed from
//! current state on every read; nothing here is cached or mutated.

use serde::{Deserialize, Serialize};
use shared::{
    domain::{LayerId, OrgInputs, Severity, SeverityScores},
    format::format_currency,
    layers::{above_waterline_layer, CostLayer, LAYERS},
};

pub const DEFAULT_TEAM_SIZE: u32 = 50;
pub const DEFAULT_AVG_SALARY: f64 = 85_000.0;
pub const DEFAULT_TURNOVER_RATE: f64 = 15.0;

/// Parsed average salary, or the default when the field is empty or does not
/// parse. The raw input is left untouched.
pub fn resolve_baseline(inputs: &OrgInputs) -> f64 {
    inputs
        .avg_salary
        .trim()
        .parse()
        .unwrap_or(DEFAULT_AVG_SALARY)
}

pub fn resolve_team_size(inputs: &OrgInputs) -> u32 {
    inputs
        .team_size
        .trim()
        .parse()
        .unwrap_or(DEFAULT_TEAM_SIZE)
}

/// Turnover rate as a percentage (15.0 means 15%).
pub fn resolve_turnover_rate(inputs: &OrgInputs) -> f64 {
    inputs
        .turnover_rate
        .trim()
        .parse()
        .unwrap_or(DEFAULT_TURNOVER_RATE)
}

/// Severity recorded for a layer, reading missing entries as Moderate.
pub fn severity_for(scores: &SeverityScores, id: LayerId) -> Severity {
    scores.get(&id).copied().unwrap_or_default()
}

/// Cost attributed to one layer per departure. Severity scales linearly
/// around the neutral point: Moderate reproduces the nominal cost exactly.
pub fn layer_cost(layer: &CostLayer, severity: Severity, baseline: f64) -> f64 {
    baseline * layer.default_multiplier * (f64::from(severity.value()) / 3.0)
}

/// Cost of the single above-waterline layer: what the budget already sees.
pub fn visible_cost(scores: &SeverityScores, baseline: f64) -> f64 {
    let layer = above_waterline_layer();
    layer_cost(layer, severity_for(scores, layer.id), baseline)
}

/// Headline per-departure total. Sums every layer, the above-waterline one
/// included.
pub fn total_cost(scores: &SeverityScores, baseline: f64) -> f64 {
    LAYERS
        .iter()
        .map(|layer| layer_cost(layer, severity_for(scores, layer.id), baseline))
        .sum()
}

pub fn multiplier(total: f64, visible: f64) -> f64 {
    if visible > 0.0 {
        total / visible
    } else {
        0.0
    }
}

pub fn annual_exposure(total: f64, team_size: u32, turnover_fraction: f64) -> f64 {
    total * f64::from(team_size) * turnover_fraction
}

/// Expected departures per year, rounded half away from zero.
pub fn departures_per_year(team_size: u32, turnover_percent: f64) -> u32 {
    (f64::from(team_size) * turnover_percent / 100.0).round() as u32
}

pub fn percent_of_total(cost: f64, total: f64) -> f64 {
    if total > 0.0 {
        100.0 * cost / total
    } else {
        0.0
    }
}

/// Which summary narrative applies, thresholded on the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeTier {
    Compounding,
    Significant,
    Balanced,
}

pub fn narrative_tier(multiplier: f64) -> NarrativeTier {
    if multiplier >= 4.0 {
        NarrativeTier::Compounding
    } else if multiplier >= 2.5 {
        NarrativeTier::Significant
    } else {
        NarrativeTier::Balanced
    }
}

/// Per-layer line of the results breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerCostRow {
    pub id: LayerId,
    pub label: String,
    pub above_waterline: bool,
    pub severity: Severity,
    pub cost: f64,
    pub percent_of_total: f64,
}

/// Everything the results views show, computed in one pass from the current
/// inputs and scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    pub baseline: f64,
    pub team_size: u32,
    pub turnover_rate: f64,
    pub rows: Vec<LayerCostRow>,
    pub visible_cost: f64,
    pub total_cost: f64,
    pub multiplier: f64,
    pub departures_per_year: u32,
    pub annual_exposure: f64,
    pub narrative_tier: NarrativeTier,
    pub narrative: String,
}

impl CostReport {
    pub fn compute(inputs: &OrgInputs, scores: &SeverityScores) -> Self {
        let baseline = resolve_baseline(inputs);
        let team_size = resolve_team_size(inputs);
        let turnover_rate = resolve_turnover_rate(inputs);

        let visible = visible_cost(scores, baseline);
        let total = total_cost(scores, baseline);
        let multiplier = multiplier(total, visible);
        let departures = departures_per_year(team_size, turnover_rate);
        let exposure = annual_exposure(total, team_size, turnover_rate / 100.0);

        let rows = LAYERS
            .iter()
            .map(|layer| {
                let severity = severity_for(scores, layer.id);
                let cost = layer_cost(layer, severity, baseline);
                LayerCostRow {
                    id: layer.id,
                    label: layer.label.to_string(),
                    above_waterline: layer.above_waterline,
                    severity,
                    cost,
                    percent_of_total: percent_of_total(cost, total),
                }
            })
            .collect();

        let tier = narrative_tier(multiplier);
        let narrative = render_narrative(
            tier,
            multiplier,
            baseline,
            turnover_rate,
            departures,
            exposure,
        );

        Self {
            baseline,
            team_size,
            turnover_rate,
            rows,
            visible_cost: visible,
            total_cost: total,
            multiplier,
            departures_per_year: departures,
            annual_exposure: exposure,
            narrative_tier: tier,
            narrative,
        }
    }
}

fn render_narrative(
    tier: NarrativeTier,
    multiplier: f64,
    baseline: f64,
    turnover_rate: f64,
    departures: u32,
    annual_exposure: f64,
) -> String {
    match tier {
        NarrativeTier::Compounding => {
            let per_point_saving = if turnover_rate > 0.0 {
                annual_exposure * 0.01 / (turnover_rate / 100.0)
            } else {
                0.0
            };
            format!(
                "At a {multiplier:.1}× multiplier, every percentage point reduction in turnover \
                 saves your organization approximately {}. The business case for retention \
                 investment isn't just an HR argument — it's a P&L argument.",
                format_currency(per_point_saving)
            )
        }
        NarrativeTier::Significant => format!(
            "Your {multiplier:.1}× multiplier reveals significant hidden costs below the \
             waterline. Focus on your highest-severity layers first — even a 1-point severity \
             reduction in your top cost driver would save {} annually.",
            format_currency(baseline * 0.25 * f64::from(departures))
        ),
        NarrativeTier::Balanced => format!(
            "Your {multiplier:.1}× multiplier suggests your visible and hidden costs are \
             relatively balanced. Maintain focus on preventing hidden layers from deepening, \
             especially in morale contagion and knowledge drain."
        ),
    }
}

#[cfg(test)]
mod tests;
