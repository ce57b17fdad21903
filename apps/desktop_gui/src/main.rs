mod controller;
mod ui;

use eframe::egui;

use crate::ui::{IcebergApp, PersistedUiSettings, SETTINGS_STORAGE_KEY};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Retention Cost Iceberg")
            .with_inner_size([760.0, 920.0])
            .with_min_inner_size([560.0, 680.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Retention Cost Iceberg",
        options,
        Box::new(|cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedUiSettings>(&text).ok())
            });
            Ok(Box::new(IcebergApp::new(persisted)))
        }),
    )
}
