use crate::application::agent::DashboardAgent;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders the customer profile form: the id field, the six behavior
/// metrics, and the submit control. The submit button is disabled while a
/// request is in flight; that is the user-facing half of the single-flight
/// guarantee.
pub fn render_feature_form(ui: &mut egui::Ui, agent: &mut DashboardAgent) {
    ui.heading("Customer Profile");
    ui.add_space(DesignSystem::SPACING_SMALL);

    DesignSystem::card_frame().show(ui, |ui| {
        egui::Grid::new("feature_form_grid")
            .num_columns(2)
            .spacing([DesignSystem::SPACING_MEDIUM, DesignSystem::SPACING_SMALL])
            .show(ui, |ui| {
                labeled_field(ui, "Customer ID", &mut agent.form.customer_id);
                labeled_field(ui, "Total spend", &mut agent.form.total_spend);
                labeled_field(ui, "Avg spend", &mut agent.form.avg_spend);
                labeled_field(ui, "Transactions", &mut agent.form.num_transactions);
                labeled_field(ui, "Total units", &mut agent.form.total_units);
                labeled_field(ui, "Unique products", &mut agent.form.unique_products);
                labeled_field(ui, "Recency (days)", &mut agent.form.recency_days);
            });

        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let button_label = if agent.session.is_loading {
            "Predicting..."
        } else {
            "Predict Value"
        };
        let button = egui::Button::new(
            egui::RichText::new(button_label)
                .size(14.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        )
        .fill(DesignSystem::ACCENT_PRIMARY)
        .min_size(egui::vec2(ui.available_width(), 32.0));

        if ui.add_enabled(agent.can_submit(), button).clicked() {
            agent.submit();
        }
    });
}

fn labeled_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add(egui::TextEdit::singleline(value).desired_width(120.0));
    ui.end_row();
}
