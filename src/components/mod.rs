pub mod app;
pub mod stage_view;
