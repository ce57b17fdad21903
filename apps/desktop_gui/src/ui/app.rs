//! App shell: owns the wizard controller, the per-frame action queue, the
//! cosmetic animation state, and persisted presentation settings.

use std::time::Instant;

use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::WizardStep;
use wizard::WizardController;

use crate::controller::actions::{apply_wizard_action, WizardAction};
use crate::ui::theme::{scaled_text_styles, visuals_for_theme, ThemePreset, ThemeSettings};
use crate::ui::widgets::{AnimatedCounter, ScreenFade};

pub const SETTINGS_STORAGE_KEY: &str = "iceberg_ui_settings";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PersistedThemePreset {
    IcebergDark,
    EguiLight,
}

impl From<ThemePreset> for PersistedThemePreset {
    fn from(value: ThemePreset) -> Self {
        match value {
            ThemePreset::IcebergDark => Self::IcebergDark,
            ThemePreset::EguiLight => Self::EguiLight,
        }
    }
}

impl From<PersistedThemePreset> for ThemePreset {
    fn from(value: PersistedThemePreset) -> Self {
        match value {
            PersistedThemePreset::IcebergDark => Self::IcebergDark,
            PersistedThemePreset::EguiLight => Self::EguiLight,
        }
    }
}

/// Presentation settings persisted across launches. Wizard data is never
/// stored; every launch starts at the intro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedUiSettings {
    theme_preset: PersistedThemePreset,
    accent_color: [u8; 4],
    text_scale: f32,
}

impl Default for PersistedUiSettings {
    fn default() -> Self {
        Self::from_runtime(ThemeSettings::iceberg_default())
    }
}

impl PersistedUiSettings {
    pub fn into_runtime(self) -> ThemeSettings {
        ThemeSettings {
            preset: self.theme_preset.into(),
            accent_color: egui::Color32::from_rgba_unmultiplied(
                self.accent_color[0],
                self.accent_color[1],
                self.accent_color[2],
                self.accent_color[3],
            ),
            text_scale: self.text_scale.clamp(0.8, 1.4),
        }
    }

    pub fn from_runtime(theme: ThemeSettings) -> Self {
        Self {
            theme_preset: theme.preset.into(),
            accent_color: [
                theme.accent_color.r(),
                theme.accent_color.g(),
                theme.accent_color.b(),
                theme.accent_color.a(),
            ],
            text_scale: theme.text_scale.clamp(0.8, 1.4),
        }
    }
}

pub struct IcebergApp {
    pub(crate) wizard: WizardController,
    pub(crate) pending_actions: Vec<WizardAction>,
    pub(crate) fade: ScreenFade,
    pub(crate) multiplier_counter: AnimatedCounter,
    pub(crate) exposure_counter: AnimatedCounter,
    pub(crate) theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
    pub(crate) settings_open: bool,
}

impl IcebergApp {
    pub fn new(persisted: Option<PersistedUiSettings>) -> Self {
        Self {
            wizard: WizardController::new(),
            pending_actions: Vec::new(),
            fade: ScreenFade::default(),
            multiplier_counter: AnimatedCounter::new(),
            exposure_counter: AnimatedCounter::new(),
            theme: persisted.unwrap_or_default().into_runtime(),
            applied_theme: None,
            settings_open: false,
        }
    }

    pub(crate) fn queue(&mut self, action: WizardAction) {
        self.pending_actions.push(action);
    }

    /// Applies this frame's actions in order. A step change kicks off the
    /// fade, and entering the results restarts the counters from zero.
    fn drain_pending_actions(&mut self, now: Instant) {
        if self.pending_actions.is_empty() {
            return;
        }
        let before = self.wizard.step();
        for action in self.pending_actions.drain(..) {
            apply_wizard_action(&mut self.wizard, action);
        }
        let after = self.wizard.step();
        if before != after {
            self.fade.begin(now);
            if after == WizardStep::Results {
                self.multiplier_counter.reset();
                self.exposure_counter.reset();
            }
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(self.theme);
        style.text_styles = scaled_text_styles(self.theme.text_scale);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(
                    egui::RichText::new("RETENTION COST ICEBERG")
                        .color(ui.visuals().weak_text_color()),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙").on_hover_text("Display settings").clicked() {
                        self.settings_open = true;
                    }
                });
            });
        });
    }

    fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }
        egui::Window::new("Display settings")
            .open(&mut self.settings_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Theme preset");
                egui::ComboBox::from_id_source("theme_preset")
                    .selected_text(self.theme.preset.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::IcebergDark,
                            ThemePreset::IcebergDark.label(),
                        );
                        ui.selectable_value(
                            &mut self.theme.preset,
                            ThemePreset::EguiLight,
                            ThemePreset::EguiLight.label(),
                        );
                    });

                ui.separator();
                ui.label("Accent color");
                ui.color_edit_button_srgba(&mut self.theme.accent_color);
                ui.add(
                    egui::Slider::new(&mut self.theme.text_scale, 0.8..=1.4)
                        .text("Text scale")
                        .step_by(0.05),
                );

                if ui.button("Reset to defaults").clicked() {
                    self.theme = ThemeSettings::iceberg_default();
                }
            });
    }

    fn paint_fade_overlay(&self, ctx: &egui::Context, now: Instant) {
        if !self.fade.is_active(now) {
            return;
        }
        let alpha = self.fade.alpha(now);
        let background = ctx.style().visuals.panel_fill;
        let cover = ((1.0 - alpha) * 255.0).round().clamp(0.0, 255.0) as u8;
        let overlay = egui::Color32::from_rgba_unmultiplied(
            background.r(),
            background.g(),
            background.b(),
            cover,
        );
        ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("step_fade"),
        ))
        .rect_filled(ctx.screen_rect(), 0.0, overlay);
    }
}

impl eframe::App for IcebergApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.apply_theme_if_needed(ctx);
        self.show_top_bar(ctx);
        self.show_settings_window(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_width(ui.available_width().clamp(360.0, 620.0));
                    match self.wizard.step() {
                        WizardStep::Intro => self.show_intro_screen(ui),
                        WizardStep::Inputs => self.show_inputs_screen(ui),
                        WizardStep::Scoring => self.show_scoring_screen(ui),
                        WizardStep::Results => self.show_results_screen(ui, now),
                    }
                });
            });
        });

        self.drain_pending_actions(now);
        self.paint_fade_overlay(ctx, now);

        if self.fade.is_active(now)
            || self.multiplier_counter.is_animating(now)
            || self.exposure_counter.is_animating(now)
        {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(text) = serde_json::to_string(&PersistedUiSettings::from_runtime(self.theme)) {
            storage.set_string(SETTINGS_STORAGE_KEY, text);
        }
    }
}
