use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::util::error::{OverlayError, UserError};

/// Log a fatal error and show it in a blocking dialog.
pub fn show_fatal_error(err: &OverlayError) {
    let message = err.user_message();
    tracing::error!("{err}");

    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(UserError::DIALOG_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
