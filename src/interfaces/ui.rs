use crate::application::agent::DashboardAgent;
use crate::interfaces::dashboard::render_dashboard;
use crate::interfaces::dashboard_components::feature_form::render_feature_form;
use crate::interfaces::design_system::DesignSystem;
use chrono::Utc;
use eframe::egui;

/// Bumps the default text sizes a little; the dashboard is read at a
/// distance more than it is edited.
pub fn configure_text_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    for (text_style, font_id) in style.text_styles.iter_mut() {
        if matches!(text_style, egui::TextStyle::Body | egui::TextStyle::Button) {
            font_id.size = 14.0;
        }
    }
    ctx.set_style(style);
}

impl eframe::App for DashboardAgent {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // Outcomes arrive over channels, not input events, so keep
        // repainting while we might be waiting on one.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));

        // 1. Pull pending logs and prediction outcomes into UI state.
        self.drain_events();

        // 2. Top status bar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Valuescope");
                ui.separator();
                ui.label(
                    egui::RichText::new("Customer Value Dashboard")
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("UTC {}", Utc::now().format("%H:%M:%S")))
                            .small()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                    ui.label(
                        egui::RichText::new(if self.session.is_loading {
                            "● PREDICTING"
                        } else {
                            "● READY"
                        })
                        .small()
                        .color(if self.session.is_loading {
                            DesignSystem::WARNING
                        } else {
                            DesignSystem::SUCCESS
                        }),
                    );
                });
            });
        });

        // 3. Left sidebar: the feature form
        egui::SidePanel::left("profile_panel")
            .default_width(320.0)
            .min_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                render_feature_form(ui, self);
            });

        // 4. Central panel: results and activity
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                render_dashboard(ui, self);
            });
    }
}
