//! The four wizard screens. Views read controller state and queue actions;
//! they never mutate wizard state directly.

use std::time::Instant;

use eframe::egui;
use egui::{Button, RichText, Sense, Stroke, vec2};
use shared::{
    domain::OrgField,
    format::format_currency,
    layers::{CostLayer, LAYERS},
};

use crate::controller::actions::WizardAction;
use crate::ui::app::IcebergApp;
use crate::ui::theme::{iceberg_palette, layer_color, lighten_color};
use crate::ui::widgets::{iceberg_bars, severity_picker};

struct OrgInputField {
    field: OrgField,
    label: &'static str,
    placeholder: &'static str,
    unit: &'static str,
    hint: &'static str,
}

const INPUT_FIELDS: [OrgInputField; 3] = [
    OrgInputField {
        field: OrgField::TeamSize,
        label: "Team / Department Size",
        placeholder: "e.g. 50",
        unit: "people",
        hint: "The team or org unit you're analyzing",
    },
    OrgInputField {
        field: OrgField::AvgSalary,
        label: "Average Annual Salary",
        placeholder: "e.g. 85000",
        unit: "CAD",
        hint: "Blended average across the team",
    },
    OrgInputField {
        field: OrgField::TurnoverRate,
        label: "Annual Turnover Rate",
        placeholder: "e.g. 15",
        unit: "%",
        hint: "Voluntary turnover in the last 12 months",
    },
];

impl IcebergApp {
    pub(crate) fn show_intro_screen(&mut self, ui: &mut egui::Ui) {
        let palette = iceberg_palette();
        ui.add_space((ui.available_height() * 0.12).clamp(24.0, 110.0));
        ui.label(
            RichText::new("▽")
                .size(64.0)
                .color(palette.glacier.gamma_multiply(0.18)),
        );
        ui.add_space(18.0);
        ui.small(RichText::new("A FRAMEWORK FOR PEOPLE LEADERS").color(palette.glacier));
        ui.add_space(6.0);
        ui.label(RichText::new("The Retention Cost Iceberg").size(38.0).strong());
        ui.add_space(10.0);
        ui.label(
            RichText::new(
                "You're budgeting for replacement cost.\nYour actual exposure is 3-5× higher.",
            )
            .color(palette.ink.gamma_multiply(0.55)),
        );
        ui.label(RichText::new("Here's the math.").color(palette.ember));
        ui.add_space(28.0);
        if ui
            .add(
                Button::new(RichText::new("SCORE YOUR ORGANIZATION →").strong())
                    .min_size(vec2(280.0, 46.0))
                    .stroke(Stroke::new(1.0, palette.glacier.gamma_multiply(0.4))),
            )
            .clicked()
        {
            self.queue(WizardAction::Start);
        }
        ui.add_space(40.0);
        ui.small(
            RichText::new("CLICK TO BEGIN").color(palette.ink.gamma_multiply(0.2)),
        );
    }

    pub(crate) fn show_inputs_screen(&mut self, ui: &mut egui::Ui) {
        let palette = iceberg_palette();
        ui.add_space(28.0);
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            ui.small(RichText::new("STEP 1 OF 2").color(palette.glacier));
            ui.label(RichText::new("Your Organization").size(26.0).strong());
            ui.label(
                RichText::new("Three data points to calculate your true retention exposure.")
                    .color(palette.ink.gamma_multiply(0.45)),
            );
            ui.add_space(18.0);

            for entry in &INPUT_FIELDS {
                ui.label(RichText::new(entry.label).strong());
                let mut buffer = self.wizard.state().inputs.get(entry.field).to_string();
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut buffer)
                            .hint_text(entry.placeholder)
                            .desired_width(ui.available_width() - 64.0),
                    );
                    ui.small(
                        RichText::new(entry.unit).color(palette.ink.gamma_multiply(0.35)),
                    );
                    if response.changed() {
                        self.queue(WizardAction::EditOrgField {
                            field: entry.field,
                            value: buffer.clone(),
                        });
                    }
                });
                ui.small(RichText::new(entry.hint).color(palette.ink.gamma_multiply(0.25)));
                ui.add_space(12.0);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("← Back").clicked() {
                    self.queue(WizardAction::BackToIntro);
                }
                let can_advance = self.wizard.can_advance_from_inputs();
                let confirm = Button::new(RichText::new("SCORE THE HIDDEN LAYERS →").strong())
                    .min_size(vec2(ui.available_width(), 40.0));
                if ui.add_enabled(can_advance, confirm).clicked() {
                    self.queue(WizardAction::ConfirmInputs);
                }
            });
        });
    }

    pub(crate) fn show_scoring_screen(&mut self, ui: &mut egui::Ui) {
        let palette = iceberg_palette();
        let layer = self.wizard.current_layer();
        let index = self.wizard.current_layer_index();
        let is_last = self.wizard.is_last_layer();
        let progress = (index + 1) as f32 / LAYERS.len() as f32;
        let accent = layer_color(layer.color);

        ui.add_space(24.0);
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            ui.horizontal(|ui| {
                ui.small(
                    RichText::new(format!(
                        "STEP 2 OF 2 — LAYER {} OF {}",
                        index + 1,
                        LAYERS.len()
                    ))
                    .color(palette.glacier),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(
                        RichText::new(format!("{:.0}%", progress * 100.0))
                            .color(palette.ink.gamma_multiply(0.3)),
                    );
                });
            });
            progress_bar(ui, progress, palette.glacier);
            ui.add_space(16.0);

            layer_card(ui, layer, accent);
            ui.add_space(16.0);

            ui.label(
                RichText::new("How severely does this affect your organization?")
                    .color(palette.ink.gamma_multiply(0.6)),
            );
            ui.add_space(6.0);
            let selected = self.wizard.state().scores.get(&layer.id).copied();
            if let Some(severity) = severity_picker(ui, selected, accent) {
                self.queue(WizardAction::SelectSeverity {
                    layer: layer.id,
                    severity,
                });
            }

            if let Some(severity) = selected {
                let baseline = cost_model::resolve_baseline(&self.wizard.state().inputs);
                let estimated = cost_model::layer_cost(layer, severity, baseline);
                ui.add_space(12.0);
                egui::Frame::none()
                    .fill(ui.visuals().faint_bg_color)
                    .rounding(10.0)
                    .inner_margin(egui::Margin::symmetric(14, 12))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.small(
                                RichText::new("ESTIMATED COST PER DEPARTURE")
                                    .color(palette.ink.gamma_multiply(0.3)),
                            );
                            let figure_color = if layer.above_waterline {
                                palette.glacier
                            } else {
                                palette.ember
                            };
                            ui.label(
                                RichText::new(format_currency(estimated))
                                    .size(26.0)
                                    .strong()
                                    .color(figure_color),
                            );
                        });
                    });
            }

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("←").clicked() {
                    self.queue(WizardAction::PreviousLayer);
                }
                let next_label = if is_last {
                    "REVEAL YOUR ICEBERG →"
                } else {
                    "NEXT LAYER →"
                };
                let next = Button::new(RichText::new(next_label).strong())
                    .min_size(vec2(ui.available_width(), 40.0));
                if ui.add(next).clicked() {
                    self.queue(WizardAction::NextLayer);
                }
            });
        });
    }

    pub(crate) fn show_results_screen(&mut self, ui: &mut egui::Ui, now: Instant) {
        let palette = iceberg_palette();
        let report = self.wizard.report();
        self.multiplier_counter.retarget(report.multiplier, now);
        self.exposure_counter.retarget(report.annual_exposure, now);

        ui.add_space(24.0);
        ui.small(RichText::new("YOUR RETENTION COST ICEBERG").color(palette.ember));
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("You're seeing").size(30.0).strong());
            ui.label(
                RichText::new(format_currency(report.visible_cost))
                    .size(30.0)
                    .strong()
                    .color(palette.glacier),
            );
        });
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("You're losing").size(30.0).strong());
            ui.label(
                RichText::new(format_currency(report.total_cost))
                    .size(30.0)
                    .strong()
                    .color(palette.ember),
            );
        });
        ui.small(
            RichText::new("Per departure · Based on your severity scores")
                .color(palette.ink.gamma_multiply(0.45)),
        );
        ui.add_space(18.0);

        // Multiplier callout.
        egui::Frame::none()
            .fill(palette.ember.gamma_multiply(0.06))
            .stroke(Stroke::new(1.0, palette.ember.gamma_multiply(0.18)))
            .rounding(14.0)
            .inner_margin(egui::Margin::symmetric(18, 16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.small(
                        RichText::new("YOUR TRUE COST MULTIPLIER")
                            .color(palette.ember.gamma_multiply(0.7)),
                    );
                    let shown = self.multiplier_counter.current(now);
                    ui.label(
                        RichText::new(format!("{shown:.1}×"))
                            .size(46.0)
                            .strong()
                            .color(palette.ember),
                    );
                    ui.small(
                        RichText::new(format!(
                            "For every $1 you budget for replacement, you're actually losing \
                             ${:.2} in total organizational cost.",
                            report.multiplier
                        ))
                        .color(palette.ink.gamma_multiply(0.45)),
                    );
                });
            });
        ui.add_space(16.0);

        // The iceberg itself.
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color.gamma_multiply(0.5))
            .stroke(Stroke::new(1.0, palette.faint_line))
            .rounding(14.0)
            .inner_margin(egui::Margin::symmetric(16, 18))
            .show(ui, |ui| {
                iceberg_bars(ui, &report);
            });
        ui.add_space(16.0);

        // Annual exposure.
        egui::Frame::none()
            .fill(lighten_color(palette.app_background, 0.05))
            .stroke(Stroke::new(1.0, palette.glacier.gamma_multiply(0.18)))
            .rounding(14.0)
            .inner_margin(egui::Margin::symmetric(18, 16))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.small(
                            RichText::new("ANNUAL EXPOSURE")
                                .color(palette.glacier.gamma_multiply(0.7)),
                        );
                        let shown = self.exposure_counter.current(now);
                        ui.label(
                            RichText::new(format!("${}", shown.round() as i64))
                                .size(32.0)
                                .strong(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        ui.vertical(|ui| {
                            let detail = palette.ink.gamma_multiply(0.45);
                            ui.small(
                                RichText::new(format!(
                                    "{} people × {}% turnover",
                                    report.team_size, report.turnover_rate
                                ))
                                .color(detail),
                            );
                            ui.small(
                                RichText::new(format!(
                                    "= ~{} departures/year",
                                    report.departures_per_year
                                ))
                                .color(detail),
                            );
                            ui.small(
                                RichText::new(format!(
                                    "× {} true cost each",
                                    format_currency(report.total_cost)
                                ))
                                .color(detail),
                            );
                        });
                    });
                });
            });
        ui.add_space(18.0);

        // Layer breakdown.
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            ui.small(
                RichText::new("LAYER BREAKDOWN").color(palette.ink.gamma_multiply(0.35)),
            );
            ui.add_space(4.0);
            for row in &report.rows {
                ui.horizontal(|ui| {
                    let (dot, _) = ui.allocate_exact_size(vec2(8.0, 8.0), Sense::hover());
                    ui.painter().rect_filled(
                        dot,
                        2.0,
                        layer_color(shared::layers::layer(row.id).color),
                    );
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&row.label).color(palette.ink.gamma_multiply(0.8)),
                        );
                        ui.small(
                            RichText::new(format!(
                                "Severity: {}/5 · {:.0}% of total",
                                row.severity.value(),
                                row.percent_of_total
                            ))
                            .color(palette.ink.gamma_multiply(0.3)),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let figure_color = if row.above_waterline {
                            palette.glacier
                        } else {
                            palette.ember
                        };
                        ui.label(
                            RichText::new(format_currency(row.cost))
                                .strong()
                                .color(figure_color),
                        );
                    });
                });
                ui.separator();
            }
        });
        ui.add_space(14.0);

        // Narrative callout.
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color.gamma_multiply(0.6))
            .stroke(Stroke::new(1.0, palette.ember.gamma_multiply(0.5)))
            .rounding(10.0)
            .inner_margin(egui::Margin::symmetric(18, 14))
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.label(RichText::new("The Strategic Takeaway").strong());
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&report.narrative)
                            .color(palette.ink.gamma_multiply(0.55)),
                    );
                });
            });
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui.button("← Adjust Scores").clicked() {
                self.queue(WizardAction::AdjustScores);
            }
            let restart = Button::new(RichText::new("START OVER").strong())
                .min_size(vec2(ui.available_width(), 40.0));
            if ui.add(restart).clicked() {
                self.queue(WizardAction::StartOver);
            }
        });
        ui.add_space(18.0);

        methodology_panel(ui);
        ui.add_space(20.0);

        ui.separator();
        ui.small(
            RichText::new("THE RETENTION COST ICEBERG FRAMEWORK")
                .color(palette.ink.gamma_multiply(0.15)),
        );
        ui.small(
            RichText::new("Built for People Leaders who think in business outcomes.")
                .color(palette.ink.gamma_multiply(0.25)),
        );
        ui.add_space(24.0);
    }
}

fn progress_bar(ui: &mut egui::Ui, progress: f32, fill: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 4.0), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, fill.gamma_multiply(0.12));
    let mut filled = rect;
    filled.set_width(rect.width() * progress.clamp(0.0, 1.0));
    painter.rect_filled(filled, 2.0, fill);
}

fn layer_card(ui: &mut egui::Ui, layer: &CostLayer, accent: egui::Color32) {
    let palette = iceberg_palette();
    egui::Frame::none()
        .fill(accent.gamma_multiply(0.08))
        .stroke(Stroke::new(1.0, accent.gamma_multiply(0.3)))
        .rounding(14.0)
        .inner_margin(egui::Margin::symmetric(20, 18))
        .show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                let (badge, badge_color) = if layer.above_waterline {
                    ("ABOVE THE WATERLINE", palette.glacier)
                } else {
                    ("HIDDEN COST LAYER", palette.ember)
                };
                ui.small(RichText::new(badge).color(badge_color));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("{} {}", layer.icon, layer.label))
                        .size(22.0)
                        .strong(),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(layer.description).color(palette.ink.gamma_multiply(0.55)),
                );
                ui.add_space(8.0);
                ui.small(
                    RichText::new(layer.source)
                        .italics()
                        .color(palette.glacier.gamma_multiply(0.55)),
                );
            });
        });
}

fn methodology_panel(ui: &mut egui::Ui) {
    let palette = iceberg_palette();
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color.gamma_multiply(0.4))
        .stroke(Stroke::new(1.0, palette.faint_line))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(16, 14))
        .show(ui, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.small(
                    RichText::new("METHODOLOGY & SOURCES")
                        .color(palette.ink.gamma_multiply(0.35)),
                );
                ui.add_space(6.0);
                let body = palette.ink.gamma_multiply(0.45);
                ui.small(
                    RichText::new(
                        "Layer multipliers are derived from published research by SHRM (6-9 \
                         months salary replacement cost), Gallup (50-200% of salary by \
                         seniority), and Josh Bersin / Deloitte (1.5-2× total cost). Hidden \
                         cost proportion from Edie Goldberg via SHRM (60-70% indirect).",
                    )
                    .color(body),
                );
                ui.small(
                    RichText::new(
                        "Productivity ramp data from HR Morning and Gallup (16-20 week ramp, \
                         25%/50%/75% capacity). Manager time tax from Employment Policy \
                         Foundation (~50 hrs/event).",
                    )
                    .color(body),
                );
                ui.small(
                    RichText::new(
                        "Turnover contagion from Felps et al., 2009 (Academy of Management \
                         Journal) and Visier, 2022 (9.1% increased resignation probability; \
                         25% on teams of two).",
                    )
                    .color(body),
                );
                ui.small(
                    RichText::new(
                        "Severity scores are self-assessed. This model is a diagnostic \
                         framework, not an audit. Outputs represent estimated exposure ranges \
                         to support strategic conversation, not precise financial projections.",
                    )
                    .color(body),
                );
            });
        });
}
