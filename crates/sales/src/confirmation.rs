//! Acknowledgment step invoked after a committed purchase batch or return.

use tracing::info;

/// Pluggable confirmation strategy.
///
/// The result is advisory: operations report it to the caller but never roll
/// back committed transactions because of it.
pub trait ConfirmationService {
    fn confirm(&self) -> bool;
}

/// Always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultConfirmationService;

impl ConfirmationService for DefaultConfirmationService {
    fn confirm(&self) -> bool {
        info!("transaction confirmed");
        true
    }
}

impl<T: ConfirmationService + ?Sized> ConfirmationService for &T {
    fn confirm(&self) -> bool {
        (**self).confirm()
    }
}

impl<T: ConfirmationService + ?Sized> ConfirmationService for Box<T> {
    fn confirm(&self) -> bool {
        (**self).confirm()
    }
}
