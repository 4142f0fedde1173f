use clap::Parser;
use std::sync::Arc;
use valuescope::config::{Config, Mode};
use valuescope::domain::features::FeatureSet;
use valuescope::domain::ports::PredictionService;
use valuescope::infrastructure::mock::MockPredictionService;
use valuescope::infrastructure::prediction_api::ApiPredictionService;
use valuescope::interfaces::view_models::result_view_model::ResultViewModel;

/// One-shot customer value prediction from the command line.
#[derive(Parser, Debug)]
#[command(name = "predict", about = "Predict 30-day customer value for a single profile")]
struct Args {
    /// Customer identifier
    #[arg(long, default_value = "13085")]
    customer_id: String,

    /// Lifetime spend
    #[arg(long, default_value_t = 345.7)]
    total_spend: f64,

    /// Average spend per transaction
    #[arg(long, default_value_t = 49.3)]
    avg_spend: f64,

    /// Number of transactions
    #[arg(long, default_value_t = 7.0)]
    num_transactions: f64,

    /// Total units purchased
    #[arg(long, default_value_t = 12.0)]
    total_units: f64,

    /// Distinct products purchased
    #[arg(long, default_value_t = 5.0)]
    unique_products: f64,

    /// Days since last purchase
    #[arg(long, default_value_t = 4.0)]
    recency_days: f64,

    /// Use the built-in mock service instead of the network
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let service: Arc<dyn PredictionService> = if args.mock || config.mode == Mode::Mock {
        Arc::new(MockPredictionService::new())
    } else {
        Arc::new(ApiPredictionService::new(config.base_url.clone()))
    };

    let features = FeatureSet {
        total_spend: args.total_spend,
        avg_spend: args.avg_spend,
        num_transactions: args.num_transactions,
        total_units: args.total_units,
        unique_products: args.unique_products,
        recency_days: args.recency_days,
    };

    let result = service.predict(&args.customer_id, &features).await?;
    let view = ResultViewModel::from_result(&result);

    println!("Customer {}", view.customer_id);
    println!("Predicted 30d spend : ${}", view.spend_display);
    println!(
        "Purchase probability: {}% ({})",
        view.probability_pct,
        view.tier.label()
    );
    println!("Segment             : {}", view.segment_label);
    println!("Insight             : {}", view.insight);
    println!("Recommended action  : {}", view.recommended_action);

    Ok(())
}
