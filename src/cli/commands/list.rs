//! List command handler

use super::{dispatch, CliSession};
use crate::args::ListArgs;
use course_finder::core::discovery::Action;
use course_finder::core::render::{self, ViewContext, ViewFormat};

/// Translate the list flags into actions, in the order a user would click them
pub fn actions(args: &ListArgs, session: &CliSession) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(term) = &args.search {
        actions.push(Action::SubmitSearch(term.clone()));
    }
    if !args.category.is_all() {
        actions.push(Action::SelectCategory(args.category.clone()));
    }
    if !args.duration.is_all() {
        actions.push(Action::SelectDuration(args.duration.clone()));
    }
    if !args.delivery.is_all() {
        actions.push(Action::SelectFormat(args.delivery.clone()));
    }
    if !args.difficulty.is_all() {
        actions.push(Action::SelectDifficulty(args.difficulty.clone()));
    }
    if let Some(range) = args.price_range() {
        actions.push(Action::SetPriceRange(range));
    }
    if args.saved_only {
        actions.push(Action::ToggleSavedOnly);
    }
    if args.sort != session.state().sort {
        actions.push(Action::SetSort(args.sort));
    }
    if args.page != 1 {
        actions.push(Action::GoToPage(args.page));
    }
    actions
}

/// Run the list command
pub fn run(session: &mut CliSession, args: &ListArgs, format: ViewFormat) {
    let renderer = render::renderer(format);
    for action in actions(args, session) {
        dispatch(session, renderer.as_ref(), action);
    }

    if args.page != session.state().page() {
        course_finder::warn!(
            "page {} is out of range, showing page {}",
            args.page,
            session.state().page()
        );
    }

    let ctx = ViewContext::new(session.catalog(), session.state());
    print!("{}", renderer.results(&ctx));
}
