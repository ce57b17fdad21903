use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Parser;
use cost_model::CostReport;
use shared::{
    domain::{LayerId, OrgField, OrgInputs, Severity, SeverityScores},
    format::format_currency,
};

/// Prints the retention cost breakdown for one organization. Omitted or
/// unparsable inputs fall back to the standard defaults; unscored layers
/// read as Moderate.
#[derive(Parser, Debug)]
#[command(name = "report", about = "Retention cost iceberg report")]
struct Args {
    /// Team or department size.
    #[arg(long)]
    team_size: Option<String>,
    /// Average annual salary across the team.
    #[arg(long)]
    avg_salary: Option<String>,
    /// Annual voluntary turnover rate in percent.
    #[arg(long)]
    turnover_rate: Option<String>,
    /// Layer severity as LAYER=SEVERITY, repeatable (e.g. --score morale=4).
    #[arg(long = "score", value_name = "LAYER=SEVERITY")]
    scores: Vec<String>,
    /// Emit the full report as JSON instead of the formatted table.
    #[arg(long)]
    json: bool,
}

fn parse_score(raw: &str) -> Result<(LayerId, Severity)> {
    let (layer_key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected LAYER=SEVERITY, got '{raw}'"))?;
    let id = LayerId::from_str(layer_key.trim())?;
    let value: u8 = value
        .trim()
        .parse()
        .map_err(|_| anyhow!("severity must be a number between 1 and 5, got '{value}'"))?;
    Ok((id, Severity::try_from(value)?))
}

fn print_report(report: &CostReport) {
    println!("Retention Cost Iceberg");
    println!();
    println!(
        "You're seeing {} per departure; you're losing {}.",
        format_currency(report.visible_cost),
        format_currency(report.total_cost)
    );
    println!("True cost multiplier: {:.1}x", report.multiplier);
    println!(
        "Annual exposure: {} ({} people at {}% turnover, about {} departures/year)",
        format_currency(report.annual_exposure),
        report.team_size,
        report.turnover_rate,
        report.departures_per_year
    );
    println!();
    println!("Layer breakdown:");
    for row in &report.rows {
        let position = if row.above_waterline {
            "above waterline"
        } else {
            "hidden"
        };
        println!(
            "  {:<32} {:<12} {:>8}  {:>3.0}% of total  ({position})",
            row.label,
            format!("{} ({}/5)", row.severity.label(), row.severity.value()),
            format_currency(row.cost),
            row.percent_of_total
        );
    }
    println!();
    println!("{}", report.narrative);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut inputs = OrgInputs::default();
    if let Some(raw) = args.team_size {
        inputs.set(OrgField::TeamSize, raw);
    }
    if let Some(raw) = args.avg_salary {
        inputs.set(OrgField::AvgSalary, raw);
    }
    if let Some(raw) = args.turnover_rate {
        inputs.set(OrgField::TurnoverRate, raw);
    }

    let mut scores = SeverityScores::new();
    for raw in &args.scores {
        let (id, severity) = parse_score(raw)?;
        scores.insert(id, severity);
    }

    let report = CostReport::compute(&inputs, &scores);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_score;
    use shared::domain::{LayerId, Severity};

    #[test]
    fn parses_layer_severity_pairs() {
        let (id, severity) = parse_score("morale=4").expect("pair");
        assert_eq!(id, LayerId::Morale);
        assert_eq!(severity, Severity::Significant);

        let (id, severity) = parse_score(" replacement = 1 ").expect("pair");
        assert_eq!(id, LayerId::Replacement);
        assert_eq!(severity, Severity::Minimal);
    }

    #[test]
    fn rejects_malformed_scores() {
        assert!(parse_score("morale").is_err());
        assert!(parse_score("attrition=3").is_err());
        assert!(parse_score("morale=0").is_err());
        assert!(parse_score("morale=6").is_err());
        assert!(parse_score("morale=high").is_err());
    }
}
