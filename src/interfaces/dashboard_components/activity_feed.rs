use crate::application::agent::{ActivityEvent, EventSeverity};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use std::collections::VecDeque;

/// Helper function to render the activity feed
pub fn render_activity_feed(ui: &mut egui::Ui, events: &VecDeque<ActivityEvent>) {
    egui::ScrollArea::vertical()
        .id_salt("activity_feed_scroll")
        .max_height(180.0)
        .show(ui, |ui| {
            if events.is_empty() {
                ui.label(
                    egui::RichText::new("No activity yet")
                        .color(DesignSystem::TEXT_MUTED)
                        .italics(),
                );
                return;
            }

            for event in events {
                let color = match event.severity {
                    EventSeverity::Info => egui::Color32::from_gray(200),
                    EventSeverity::Warning => DesignSystem::WARNING,
                    EventSeverity::Error => DesignSystem::DANGER,
                };

                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(event.timestamp.format("%H:%M:%S").to_string())
                            .size(10.0)
                            .color(DesignSystem::TEXT_MUTED),
                    );
                    ui.label(
                        egui::RichText::new(&event.message)
                            .size(12.0)
                            .color(color),
                    );
                });
            }
        });
}
