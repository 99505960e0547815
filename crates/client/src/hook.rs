//! Session-expiry notification hook
//!
//! Lets the UI react to a dead session (forced redirect to the login route)
//! without the pipeline knowing anything about routing. The frontend
//! provider registers a callback here on mount and removes it on unmount.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static SESSION_EXPIRED_HOOK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the callback invoked when the session becomes unrecoverable
pub fn set_session_expired_hook(hook: Rc<dyn Fn()>) {
    SESSION_EXPIRED_HOOK.with(|slot| {
        *slot.borrow_mut() = Some(hook);
    });
}

/// Remove the registered callback
pub fn clear_session_expired_hook() {
    SESSION_EXPIRED_HOOK.with(|slot| {
        *slot.borrow_mut() = None;
    });
}

/// Invoke the registered callback, if any
pub fn notify_session_expired() {
    SESSION_EXPIRED_HOOK.with(|slot| {
        if let Some(hook) = slot.borrow().as_ref() {
            hook();
        }
    });
}
