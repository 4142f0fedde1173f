use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Helper function to render a headline metric card.
pub fn render_metric_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    subtitle: Option<&str>,
    value_color: egui::Color32,
    accent_color: egui::Color32,
) {
    egui::Frame::NONE
        .fill(DesignSystem::BG_CARD)
        .inner_margin(egui::Margin::same(12))
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .stroke(egui::Stroke::new(1.0, accent_color.linear_multiply(0.4)))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 16,
            spread: 0,
            color: egui::Color32::from_black_alpha(100),
        })
        .show(ui, |ui| {
            ui.set_min_height(76.0);

            ui.label(
                egui::RichText::new(title.to_uppercase())
                    .size(10.0)
                    .color(DesignSystem::TEXT_SECONDARY)
                    .strong(),
            );

            ui.add_space(6.0);

            ui.label(
                egui::RichText::new(value)
                    .size(24.0)
                    .strong()
                    .color(value_color),
            );

            if let Some(sub) = subtitle {
                ui.add_space(DesignSystem::SPACING_SMALL);
                ui.label(
                    egui::RichText::new(sub)
                        .size(10.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
        });
}

/// Small rounded status pill, used for the segment badge.
pub fn render_badge_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(DesignSystem::ROUNDING_PILL)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}
