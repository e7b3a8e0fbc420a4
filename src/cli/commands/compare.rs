//! Compare command handler

use super::{dispatch, CliSession};
use course_finder::core::discovery::Action;
use course_finder::core::render::{self, ViewContext, ViewFormat};

/// Add each id to the comparison tray in order and print the comparison
pub fn run(session: &mut CliSession, ids: &[String], format: ViewFormat) {
    let renderer = render::renderer(format);
    for id in ids {
        dispatch(session, renderer.as_ref(), Action::ToggleCompare(id.clone()));
    }
    dispatch(session, renderer.as_ref(), Action::OpenComparison);

    if !session.state().is_comparison_open() {
        eprintln!("✗ No courses to compare");
        return;
    }
    let ctx = ViewContext::new(session.catalog(), session.state());
    print!("{}", renderer.comparison(&ctx));
}
