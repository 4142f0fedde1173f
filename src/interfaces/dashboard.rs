use crate::application::agent::DashboardAgent;
use crate::interfaces::dashboard_components::activity_feed::render_activity_feed;
use crate::interfaces::dashboard_components::result_panel::render_result_panel;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders the main dashboard content: prediction results on top, the
/// activity feed and system logs below.
pub fn render_dashboard(ui: &mut egui::Ui, agent: &DashboardAgent) {
    ui.add_space(DesignSystem::SPACING_SMALL);

    render_result_panel(ui, agent);

    ui.add_space(DesignSystem::SPACING_LARGE);
    ui.separator();
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.label(
        egui::RichText::new("RECENT ACTIVITY")
            .size(11.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL);
    render_activity_feed(ui, &agent.activity);

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    egui::CollapsingHeader::new(
        egui::RichText::new("System Logs")
            .size(11.0)
            .color(DesignSystem::TEXT_SECONDARY),
    )
    .default_open(false)
    .show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt("system_logs_scroll")
            .max_height(160.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in &agent.log_lines {
                    ui.label(
                        egui::RichText::new(line.trim_end())
                            .size(11.0)
                            .monospace()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                }
            });
    });
}
