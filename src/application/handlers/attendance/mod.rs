//! Attendance handlers - check-in cloning and check-out echo.

mod clone_checkin;
mod record_checkout;

pub use clone_checkin::CheckinCloneHandler;
pub use record_checkout::CheckoutHandler;
