// verifyflow/src/ui/mod.rs
pub mod output_format;
pub mod report_view;
pub mod theme;
