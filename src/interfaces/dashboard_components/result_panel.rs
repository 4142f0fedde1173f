use crate::application::agent::DashboardAgent;
use crate::interfaces::dashboard_components::metrics_card::{
    render_badge_pill, render_metric_card,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::result_view_model::ResultViewModel;
use eframe::egui;

/// Renders the outcome side of the dashboard: idle placeholder, loading
/// spinner, error banner, or the prediction cards.
pub fn render_result_panel(ui: &mut egui::Ui, agent: &DashboardAgent) {
    ui.heading("Prediction");
    ui.add_space(DesignSystem::SPACING_SMALL);

    if agent.session.is_loading {
        DesignSystem::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    egui::RichText::new("Contacting prediction service...")
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        });
        return;
    }

    if let Some(error) = &agent.session.error {
        egui::Frame::NONE
            .fill(DesignSystem::DANGER.linear_multiply(0.12))
            .corner_radius(DesignSystem::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, DesignSystem::DANGER))
            .inner_margin(DesignSystem::SPACING_MEDIUM as i8)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Prediction failed")
                        .strong()
                        .color(DesignSystem::DANGER),
                );
                ui.add_space(4.0);
                ui.label(egui::RichText::new(error).color(DesignSystem::TEXT_PRIMARY));
            });
        return;
    }

    let Some(result) = &agent.session.result else {
        // Idle: nothing submitted yet.
        DesignSystem::card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("Enter a customer profile and press Predict Value.")
                    .color(DesignSystem::TEXT_MUTED)
                    .italics(),
            );
        });
        return;
    };

    let view = ResultViewModel::from_result(result);
    let tier_color = DesignSystem::tier_color(view.tier);

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("Customer {}", view.customer_id))
                .size(16.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        render_badge_pill(
            ui,
            &view.segment_label,
            DesignSystem::badge_color(view.badge),
        );
    });

    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.columns(2, |columns| {
        render_metric_card(
            &mut columns[0],
            "Predicted 30d Spend",
            &format!("${}", view.spend_display),
            Some("Expected revenue over the next 30 days"),
            DesignSystem::TEXT_PRIMARY,
            DesignSystem::ACCENT_PRIMARY,
        );
        render_metric_card(
            &mut columns[1],
            "Purchase Probability",
            &format!("{}%", view.probability_pct),
            Some(view.tier.label()),
            tier_color,
            tier_color,
        );
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    DesignSystem::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("INSIGHT")
                .size(10.0)
                .strong()
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&view.insight).color(DesignSystem::TEXT_PRIMARY));

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.label(
            egui::RichText::new("RECOMMENDED ACTION")
                .size(10.0)
                .strong()
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(&view.recommended_action).color(DesignSystem::TEXT_PRIMARY),
        );
    });
}
