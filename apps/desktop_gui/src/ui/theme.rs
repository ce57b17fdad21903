//! Theme presets, the iceberg palette, and style plumbing.

use std::collections::BTreeMap;

use egui::{Color32, FontFamily, FontId, TextStyle, Visuals};

/// Fixed colors of the dark iceberg look.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub app_background: Color32,
    pub ink: Color32,
    pub glacier: Color32,
    pub ember: Color32,
    pub faint_line: Color32,
}

pub fn iceberg_palette() -> Palette {
    Palette {
        app_background: Color32::from_rgb(0x0A, 0x1A, 0x20),
        ink: Color32::from_rgb(0xE8, 0xE4, 0xD9),
        glacier: Color32::from_rgb(0x94, 0xB4, 0xC1),
        ember: Color32::from_rgb(0xE0, 0x7A, 0x5F),
        faint_line: Color32::from_rgba_unmultiplied(0xE8, 0xE4, 0xD9, 16),
    }
}

pub fn layer_color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreset {
    IcebergDark,
    EguiLight,
}

impl ThemePreset {
    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::IcebergDark => "Iceberg (Dark)",
            ThemePreset::EguiLight => "Egui Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: Color32,
    pub text_scale: f32,
}

impl ThemeSettings {
    pub fn iceberg_default() -> Self {
        Self {
            preset: ThemePreset::IcebergDark,
            accent_color: iceberg_palette().glacier,
            text_scale: 1.0,
        }
    }
}

pub fn visuals_for_theme(theme: ThemeSettings) -> Visuals {
    match theme.preset {
        ThemePreset::IcebergDark => {
            let palette = iceberg_palette();
            let mut visuals = Visuals::dark();
            visuals.panel_fill = palette.app_background;
            visuals.window_fill = lighten_color(palette.app_background, 0.04);
            visuals.extreme_bg_color = lighten_color(palette.app_background, 0.02);
            visuals.faint_bg_color = lighten_color(palette.app_background, 0.05);
            visuals.override_text_color = Some(palette.ink);
            visuals.selection.bg_fill = theme.accent_color.gamma_multiply(0.45);
            visuals.widgets.noninteractive.bg_stroke.color = palette.faint_line;
            visuals.hyperlink_color = palette.glacier;
            visuals
        }
        ThemePreset::EguiLight => Visuals::light(),
    }
}

pub fn scaled_text_styles(scale: f32) -> BTreeMap<TextStyle, FontId> {
    let scale = scale.clamp(0.8, 1.4);
    [
        (TextStyle::Heading, 26.0, FontFamily::Proportional),
        (TextStyle::Body, 14.5, FontFamily::Proportional),
        (TextStyle::Monospace, 13.0, FontFamily::Monospace),
        (TextStyle::Button, 14.0, FontFamily::Proportional),
        (TextStyle::Small, 11.0, FontFamily::Proportional),
    ]
    .into_iter()
    .map(|(style, size, family)| (style, FontId::new(size * scale, family)))
    .collect()
}

pub fn lighten_color(c: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = f32::from(channel);
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}
