//! The fixed seven-layer cost table. Defined once, shared by reference.

use crate::domain::LayerId;

/// One entry of the cost layer table. `default_multiplier` is the fraction
/// of the baseline salary attributed to this layer at neutral severity.
/// `color` and `icon` exist only for presentation.
#[derive(Debug, Clone, Copy)]
pub struct CostLayer {
    pub id: LayerId,
    pub label: &'static str,
    pub description: &'static str,
    pub source: &'static str,
    pub above_waterline: bool,
    pub default_multiplier: f64,
    pub color: [u8; 3],
    pub icon: &'static str,
}

/// Exactly one layer sits above the waterline: the budgeted replacement cost.
pub static LAYERS: [CostLayer; 7] = [
    CostLayer {
        id: LayerId::Replacement,
        label: "Direct Replacement Cost",
        description: "Recruiting fees, job ads, signing bonuses, onboarding admin",
        source: "SHRM: 6-9 months of salary. Gallup: 50-200% depending on seniority.",
        above_waterline: true,
        default_multiplier: 0.5,
        color: [0x94, 0xB4, 0xC1],
        icon: "\u{25B2}",
    },
    CostLayer {
        id: LayerId::Productivity,
        label: "Productivity Void",
        description: "New hires take 16-20 weeks to reach full productivity, operating at ~25% \
                      for the first month and ~50% through week 12.",
        source: "HR Morning; Gallup. New hire ramp at 25%/50%/75% output over 16-20 weeks.",
        above_waterline: false,
        default_multiplier: 0.75,
        color: [0x5B, 0x8A, 0x9A],
        icon: "\u{25C6}",
    },
    CostLayer {
        id: LayerId::Knowledge,
        label: "Institutional Knowledge Drain",
        description: "Undocumented processes, client history, tribal knowledge. ~70% of \
                      organizations report losing data or IP when employees leave.",
        source: "Perceptyx. Josh Bersin: employees are 'appreciating assets' whose value \
                 compounds with tenure.",
        above_waterline: false,
        default_multiplier: 0.5,
        color: [0x3D, 0x7A, 0x8A],
        icon: "\u{25C8}",
    },
    CostLayer {
        id: LayerId::Morale,
        label: "Team Morale Contagion",
        description: "Turnover is literally contagious. Teammates are 9.1% more likely to \
                      resign after a peer departure, spiking to 25% on teams of two.",
        source: "Felps et al., 2009 (Academy of Management Journal). Visier, 2022 research. \
                 Gallup: disengaged employees cost 18% of salary.",
        above_waterline: false,
        default_multiplier: 0.4,
        color: [0x2A, 0x62, 0x70],
        icon: "\u{25C7}",
    },
    CostLayer {
        id: LayerId::Client,
        label: "Client & Revenue Erosion",
        description: "Relationship discontinuity, service quality dips during transition, \
                      competitor poaching risk on key accounts.",
        source: "Industry-dependent. Highest in financial services, consulting, and \
                 relationship-driven roles.",
        above_waterline: false,
        default_multiplier: 0.35,
        color: [0x1B, 0x4D, 0x5A],
        icon: "\u{25CB}",
    },
    CostLayer {
        id: LayerId::Manager,
        label: "Manager Time Tax",
        description: "~50 hours of management time per turnover event: interviewing, \
                      re-onboarding, performance restart, emotional labor.",
        source: "Employment Policy Foundation. At manager salary rates plus opportunity cost \
                 of diverted strategic time.",
        above_waterline: false,
        default_multiplier: 0.3,
        color: [0x0F, 0x38, 0x42],
        icon: "\u{25A1}",
    },
    CostLayer {
        id: LayerId::Culture,
        label: "Culture Debt",
        description: "Diluted values through rapid re-hiring, broken team dynamics, loss of \
                      high-performance norms, employer brand damage.",
        source: "Edie Goldberg via SHRM: 60-70% of turnover cost is hidden/indirect. Culture \
                 debt is the least quantified layer.",
        above_waterline: false,
        default_multiplier: 0.2,
        color: [0x09, 0x28, 0x30],
        icon: "\u{25B3}",
    },
];

pub fn layer(id: LayerId) -> &'static CostLayer {
    LAYERS
        .iter()
        .find(|l| l.id == id)
        .unwrap_or(&LAYERS[0])
}

pub fn above_waterline_layer() -> &'static CostLayer {
    LAYERS
        .iter()
        .find(|l| l.above_waterline)
        .unwrap_or(&LAYERS[0])
}

pub fn hidden_layers() -> impl Iterator<Item = &'static CostLayer> {
    LAYERS.iter().filter(|l| !l.above_waterline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_layer_sits_above_the_waterline() {
        let above: Vec<_> = LAYERS.iter().filter(|l| l.above_waterline).collect();
        assert_eq!(above.len(), 1);
        assert_eq!(above[0].id, LayerId::Replacement);
    }

    #[test]
    fn default_multipliers_sum_to_three_baselines() {
        let sum: f64 = LAYERS.iter().map(|l| l.default_multiplier).sum();
        assert!((sum - 3.0).abs() < 1e-12);
    }

    #[test]
    fn lookup_by_id_returns_the_matching_entry() {
        for entry in &LAYERS {
            assert_eq!(layer(entry.id).id, entry.id);
        }
        assert_eq!(above_waterline_layer().id, LayerId::Replacement);
        assert_eq!(hidden_layers().count(), 6);
    }
}
