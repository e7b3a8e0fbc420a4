//! History command handler

use super::{dispatch, CliSession};
use course_finder::core::discovery::Action;
use course_finder::core::render::{self, ViewContext, ViewFormat};

/// Print or clear the search history
pub fn run(session: &mut CliSession, clear: bool) {
    let renderer = render::renderer(ViewFormat::Text);
    if clear {
        dispatch(session, renderer.as_ref(), Action::ClearHistory);
        println!("✓ Search history cleared");
        return;
    }
    let ctx = ViewContext::new(session.catalog(), session.state());
    print!("{}", renderer.history(&ctx));
}
