mod layout;
mod log_screen;
mod modals;
mod status_bar;
pub mod theme;

// Re-export the main render function
pub use layout::render_ui;
