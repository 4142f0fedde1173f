use valuescope::application::agent::DashboardAgent;
use valuescope::application::client::SystemClient;
use valuescope::application::system::Application;
use valuescope::config::Config;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load env before starting anything
    dotenvy::dotenv().ok();

    // 1. Create log channel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup logging (stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing Valuescope...");

    let config = Config::from_env()?;
    let default_customer_id = config.default_customer_id.clone();

    // 3. Start the prediction worker on a background tokio runtime. The
    // UI thread stays sync; everything crosses over via channels.
    let (system_tx, system_rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        rt.block_on(async move {
            info!("Background runtime started");

            let app = match Application::build(&config) {
                Ok(app) => app,
                Err(e) => {
                    tracing::error!("Failed to build application: {}", e);
                    return;
                }
            };

            let (handle, outcome_rx) = app.start();
            let _ = system_tx.send((handle, outcome_rx));

            // The worker is a detached task; keep the runtime alive.
            std::future::pending::<()>().await;
        });
    });

    let (handle, outcome_rx) = system_rx
        .recv()
        .expect("Failed to receive system handle (did background thread panic?)");
    info!("Prediction worker ready. Launching UI.");

    // 4. Run UI (blocks main thread)
    let client = SystemClient::new(handle, log_rx, outcome_rx);
    let agent = DashboardAgent::new(client, &default_customer_id);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Valuescope"),
        ..Default::default()
    };

    eframe::run_native(
        "Valuescope",
        native_options,
        Box::new(|cc| {
            valuescope::interfaces::ui::configure_text_styles(&cc.egui_ctx);
            Ok(Box::new(agent))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
