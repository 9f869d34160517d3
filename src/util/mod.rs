pub mod dialog;
pub mod error;
pub mod logging;

pub use error::{OverlayError, UserError};
