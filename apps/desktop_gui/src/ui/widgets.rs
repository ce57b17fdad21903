//! Reusable pieces of the wizard UI: eased counters, the step fade, the
//! severity picker row, and the iceberg bar visualization. The animations
//! here are strictly cosmetic; every displayed number converges to the exact
//! figure handed in.

use std::time::{Duration, Instant};

use cost_model::CostReport;
use egui::{Align2, Color32, FontId, Sense, Shape, Stroke, vec2};
use shared::{domain::Severity, format::format_currency, layers};

use crate::ui::theme::{iceberg_palette, layer_color, lighten_color};

const COUNTER_DURATION: Duration = Duration::from_millis(800);
const FADE_DURATION: Duration = Duration::from_millis(300);

pub fn ease_out_cubic(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

/// Eases a displayed number toward its target over a fixed duration. The
/// target is always the exact value; only the shown interpolation lags.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    start_value: f64,
    target: f64,
    started_at: Option<Instant>,
}

impl AnimatedCounter {
    pub fn new() -> Self {
        Self {
            start_value: 0.0,
            target: 0.0,
            started_at: None,
        }
    }

    /// Begins easing from the currently shown value whenever the target
    /// changes.
    pub fn retarget(&mut self, target: f64, now: Instant) {
        if (target - self.target).abs() < f64::EPSILON {
            return;
        }
        self.start_value = self.current(now);
        self.target = target;
        self.started_at = Some(now);
    }

    /// Restarts the ease from zero, as when a screen is freshly entered.
    pub fn reset(&mut self) {
        self.start_value = 0.0;
        self.target = 0.0;
        self.started_at = None;
    }

    pub fn current(&self, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return self.target;
        };
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= COUNTER_DURATION {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / COUNTER_DURATION.as_secs_f64();
        self.start_value + (self.target - self.start_value) * ease_out_cubic(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) < COUNTER_DURATION)
    }
}

/// Fade-in opacity for the step transition overlay.
#[derive(Debug, Clone, Default)]
pub struct ScreenFade {
    since: Option<Instant>,
}

impl ScreenFade {
    pub fn begin(&mut self, now: Instant) {
        self.since = Some(now);
    }

    /// 0.0 right after a step change, 1.0 once the fade has finished.
    pub fn alpha(&self, now: Instant) -> f32 {
        let Some(since) = self.since else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(since);
        if elapsed >= FADE_DURATION {
            return 1.0;
        }
        (elapsed.as_secs_f64() / FADE_DURATION.as_secs_f64()) as f32
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.alpha(now) < 1.0
    }
}

/// Five selectable severity buttons with value and label. Returns the value
/// clicked this frame, if any.
pub fn severity_picker(
    ui: &mut egui::Ui,
    selected: Option<Severity>,
    accent: Color32,
) -> Option<Severity> {
    let mut picked = None;
    ui.horizontal(|ui| {
        let spacing = ui.spacing().item_spacing.x;
        let width = ((ui.available_width() - spacing * 4.0) / 5.0).max(48.0);
        for severity in Severity::ALL {
            let is_selected = selected == Some(severity);
            let text = egui::RichText::new(format!("{}\n{}", severity.value(), severity.label()))
                .size(12.0);
            let mut button = egui::Button::new(text).min_size(vec2(width, 52.0));
            if is_selected {
                button = button
                    .fill(accent.gamma_multiply(0.25))
                    .stroke(Stroke::new(1.0, accent));
            }
            if ui.add(button).clicked() {
                picked = Some(severity);
            }
        }
    });
    picked
}

fn centered_bar(ui: &mut egui::Ui, width: f32, height: f32, fill: Color32, label: &str) {
    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, 4.0, fill);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0),
            contrast_text_color(fill),
        );
    });
}

fn contrast_text_color(fill: Color32) -> Color32 {
    // Perceived luminance split: dark bars get light text.
    let luminance =
        0.299 * f32::from(fill.r()) + 0.587 * f32::from(fill.g()) + 0.114 * f32::from(fill.b());
    if luminance > 140.0 {
        Color32::from_rgb(0x0A, 0x1A, 0x20)
    } else {
        Color32::from_rgba_unmultiplied(255, 255, 255, 217)
    }
}

/// The iceberg: one bar above a dashed waterline, six stacked below, widths
/// proportional to each layer's share of the total.
pub fn iceberg_bars(ui: &mut egui::Ui, report: &CostReport) {
    const MAX_BAR_WIDTH: f32 = 280.0;
    let palette = iceberg_palette();
    let total = report.total_cost;

    let share_width = |cost: f64, floor: f32| -> f32 {
        if total > 0.0 {
            ((cost / total) as f32 * MAX_BAR_WIDTH).max(floor)
        } else {
            floor
        }
    };

    let above = report.rows.iter().find(|row| row.above_waterline);
    if let Some(row) = above {
        centered_bar(
            ui,
            share_width(row.cost, 40.0),
            48.0,
            lighten_color(palette.glacier, 0.15),
            &format_currency(row.cost),
        );
        ui.vertical_centered(|ui| {
            ui.small(
                egui::RichText::new("WHAT YOU BUDGET FOR")
                    .color(palette.glacier.gamma_multiply(0.7)),
            );
        });
    }

    // Waterline divider.
    ui.add_space(6.0);
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), 20.0), Sense::hover());
    let stroke = Stroke::new(1.0, palette.glacier.gamma_multiply(0.4));
    let y = rect.center().y;
    ui.painter().extend(Shape::dashed_line(
        &[egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
        stroke,
        8.0,
        8.0,
    ));
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        "  waterline  ",
        FontId::proportional(10.0),
        palette.glacier.gamma_multiply(0.6),
    );
    ui.add_space(6.0);

    for row in report.rows.iter().filter(|row| !row.above_waterline) {
        centered_bar(
            ui,
            share_width(row.cost, 30.0),
            32.0,
            layer_color(layers::layer(row.id).color),
            &format_currency(row.cost),
        );
        ui.add_space(4.0);
    }
    ui.vertical_centered(|ui| {
        ui.small(
            egui::RichText::new("WHAT'S ACTUALLY COSTING YOU")
                .color(palette.ember.gamma_multiply(0.85)),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_is_monotonic_and_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        let mut last = 0.0;
        for step in 0..=100 {
            let eased = ease_out_cubic(f64::from(step) / 100.0);
            assert!(eased >= last);
            assert!((0.0..=1.0).contains(&eased));
            last = eased;
        }
    }

    #[test]
    fn counter_reaches_its_target_exactly_and_never_overshoots() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new();
        counter.retarget(6.0, start);

        assert!(counter.is_animating(start));
        let midway = counter.current(start + COUNTER_DURATION / 2);
        assert!(midway > 0.0 && midway < 6.0);

        let done = start + COUNTER_DURATION;
        assert_eq!(counter.current(done), 6.0);
        assert!(!counter.is_animating(done));
        assert_eq!(counter.current(done + COUNTER_DURATION), 6.0);
    }

    #[test]
    fn retargeting_mid_flight_eases_from_the_shown_value() {
        let start = Instant::now();
        let mut counter = AnimatedCounter::new();
        counter.retarget(100.0, start);

        let midpoint = start + COUNTER_DURATION / 2;
        let shown = counter.current(midpoint);
        counter.retarget(0.0, midpoint);
        let just_after = counter.current(midpoint + Duration::from_millis(1));
        assert!(just_after <= shown);
        assert_eq!(counter.current(midpoint + COUNTER_DURATION), 0.0);
    }

    #[test]
    fn fade_runs_from_transparent_to_opaque() {
        let start = Instant::now();
        let mut fade = ScreenFade::default();
        assert_eq!(fade.alpha(start), 1.0);

        fade.begin(start);
        assert_eq!(fade.alpha(start), 0.0);
        assert!(fade.is_active(start + FADE_DURATION / 2));
        let mid = fade.alpha(start + FADE_DURATION / 2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(fade.alpha(start + FADE_DURATION), 1.0);
        assert!(!fade.is_active(start + FADE_DURATION));
    }
}
