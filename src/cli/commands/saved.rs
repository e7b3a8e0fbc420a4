//! Save and saved command handlers

use super::{dispatch, CliSession};
use course_finder::core::discovery::Action;
use course_finder::core::render::{self, ViewContext, ViewFormat, ViewRenderer};

/// Toggle a course in the saved list
pub fn toggle(session: &mut CliSession, id: &str) {
    toggle_with(session, render::renderer(ViewFormat::Text).as_ref(), id);
}

/// Toggle a saved course and confirm removals, which raise no notice
///
/// Returns whether the course was removed.
pub fn toggle_with(session: &mut CliSession, renderer: &dyn ViewRenderer, id: &str) -> bool {
    let was_saved = session.state().saved().contains(id);
    dispatch(session, renderer, Action::ToggleSaved(id.to_string()));

    let removed = was_saved && !session.state().saved().contains(id);
    if removed {
        println!("✓ Removed '{id}' from your list");
    }
    removed
}

/// Show saved courses
pub fn show(session: &CliSession, format: ViewFormat) {
    let renderer = render::renderer(format);
    let ctx = ViewContext::new(session.catalog(), session.state());
    print!("{}", renderer.saved(&ctx));

    let missing = session
        .state()
        .saved()
        .ids()
        .iter()
        .filter(|id| !session.catalog().contains(id))
        .count();
    if missing > 0 {
        course_finder::verbose!("{missing} saved course(s) are no longer in the catalog");
    }
}
