//! Reusable UI components

pub mod navbar;
pub mod spinner;
pub mod toast;
pub mod todo_card;

pub use navbar::Navbar;
pub use spinner::Spinner;
pub use toast::{use_toasts, ToastAction, ToastContext, ToastLevel, ToastProvider};
pub use todo_card::TodoCard;
