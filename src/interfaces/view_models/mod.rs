pub mod result_view_model;
