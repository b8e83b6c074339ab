//! Static team-process catalog: principles and the practices that serve them.

pub mod practices;
pub mod principles;

pub use practices::{Practice, PRACTICES};
pub use principles::{Principle, PRINCIPLES};

/// Look up a principle by id (case-insensitive).
pub fn principle(id: &str) -> Option<&'static Principle> {
    let id = id.trim();
    PRINCIPLES.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Look up a practice by id (case-insensitive).
pub fn practice(id: &str) -> Option<&'static Practice> {
    let id = id.trim();
    PRACTICES.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// Practices that list the given principle id.
pub fn practices_for(principle_id: &str) -> Vec<&'static Practice> {
    let id = principle_id.trim();
    PRACTICES
        .iter()
        .filter(|p| p.principles.iter().any(|pid| pid.eq_ignore_ascii_case(id)))
        .collect()
}
