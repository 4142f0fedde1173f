pub mod activity_feed;
pub mod feature_form;
pub mod metrics_card;
pub mod result_panel;
