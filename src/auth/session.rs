use actix_session::Session;

/// Whether the session belongs to a logged-in admin. The admin area is
/// gated on session presence only; there is no role model.
pub fn is_admin(session: &Session) -> bool {
    session.get::<bool>("admin").unwrap_or(None).unwrap_or(false)
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
