pub mod app;
pub mod theme;

mod add_card_modal;
mod browse_view;
mod card_widget;
mod confirm_delete_modal;
mod error_modal;
mod quiz_view;
mod random_view;
mod settings_modal;
mod toasts;
mod top_bar;

pub use app::CardboxApp;
