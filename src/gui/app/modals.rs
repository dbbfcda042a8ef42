use crate::gui::{
    add_card_modal::AddCardModal,
    confirm_delete_modal::ConfirmDeleteModal,
    error_modal::ErrorModal,
    settings_modal::SettingsModal,
};

#[derive(Default)]
pub struct Modals {
    pub add_card: AddCardModal,
    pub confirm_delete: ConfirmDeleteModal,
    pub settings: SettingsModal,
    pub error: ErrorModal,
}
