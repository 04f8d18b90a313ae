pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, estimate_form, EstimateFormVm};
pub use layouts::desktop::desktop_layout;
