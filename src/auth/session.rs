//! Session boundary. The session itself is established by the external
//! auth provider; this app only reads the cookie and can end it.

use actix_session::Session;

pub fn does_session_exist(session: &Session) -> bool {
    session.get::<String>("user_id").unwrap_or(None).is_some()
}

pub fn get_user_id(session: &Session) -> Option<String> {
    session.get::<String>("user_id").unwrap_or(None)
}

/// End the current session.
pub fn sign_out(session: &Session) {
    session.purge();
}

/// One-shot notification message, consumed on read.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}
