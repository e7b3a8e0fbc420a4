//! Interactive shell
//!
//! Reads one command per line and applies it to the session, so filters,
//! the comparison tray and the current page carry over between commands.

use super::{dispatch, saved, CliSession};
use course_finder::core::discovery::{Action, PriceRange, Selection, SortKey};
use course_finder::core::render::{self, ViewContext, ViewFormat, ViewRenderer};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  search <text>        search titles and descriptions
  category <name|all>  SIYB, Technology, Management, Marketing
  duration <label|all> e.g. 3 Months
  format <name|all>    Online, In-Person, Hybrid
  difficulty <level|all>
  price <min> <max>    inclusive price window
  saved-only           toggle showing only saved courses
  sort <key>           popularity, price-low, price-high, duration
  page <n> | next | prev
  save <id>            save or unsave a course
  compare <id>         add or remove a course from the comparison tray
  compare              show the comparison
  clear-compare        empty the comparison tray
  clear-history        forget recent searches
  reset                clear all filters
  results | saved | history
  help | quit";

/// A view the shell can print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Current results page
    Results,
    /// Saved courses
    Saved,
    /// Recent searches
    History,
    /// Command reference
    Help,
}

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Apply an action, then show the results
    Act(Action),
    /// Show a view without changing anything
    Show(View),
    /// Leave the shell
    Quit,
}

fn parse_arg<T: std::str::FromStr<Err = String>>(rest: &str, what: &str) -> Result<T, String> {
    if rest.is_empty() {
        return Err(format!("Missing {what}"));
    }
    rest.parse()
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid {what}: '{value}'"))
}

/// Parse one input line; blank lines yield `None`
///
/// # Errors
/// Returns a message naming the unknown command or bad argument.
pub fn parse_line(line: &str) -> Result<Option<Input>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, r)| (c, r.trim()));

    let action = match command.to_lowercase().as_str() {
        "quit" | "exit" | "q" => return Ok(Some(Input::Quit)),
        "help" | "?" => return Ok(Some(Input::Show(View::Help))),
        "results" | "show" | "ls" => return Ok(Some(Input::Show(View::Results))),
        "saved" => return Ok(Some(Input::Show(View::Saved))),
        "history" => return Ok(Some(Input::Show(View::History))),
        "search" => Action::SubmitSearch(rest.to_string()),
        "category" => Action::SelectCategory(parse_arg(rest, "category")?),
        "duration" => {
            if rest.is_empty() {
                return Err("Missing duration".to_string());
            }
            Action::SelectDuration(if rest.eq_ignore_ascii_case("all") {
                Selection::All
            } else {
                Selection::Only(rest.to_string())
            })
        }
        "format" => Action::SelectFormat(parse_arg(rest, "format")?),
        "difficulty" => Action::SelectDifficulty(parse_arg(rest, "difficulty")?),
        "price" => {
            let mut bounds = rest.split_whitespace();
            let (Some(min), Some(max), None) = (bounds.next(), bounds.next(), bounds.next()) else {
                return Err("Usage: price <min> <max>".to_string());
            };
            Action::SetPriceRange(PriceRange::new(
                parse_number(min, "price")?,
                parse_number(max, "price")?,
            ))
        }
        "saved-only" => Action::ToggleSavedOnly,
        "sort" => Action::SetSort(parse_arg::<SortKey>(rest, "sort key")?),
        "page" => Action::GoToPage(parse_number(rest, "page")?),
        "next" => Action::NextPage,
        "prev" | "previous" => Action::PreviousPage,
        "save" if rest.is_empty() => return Err("Missing course id".to_string()),
        "save" => Action::ToggleSaved(rest.to_string()),
        "compare" if rest.is_empty() => Action::OpenComparison,
        "compare" => Action::ToggleCompare(rest.to_string()),
        "clear-compare" => Action::ClearComparison,
        "clear-history" => Action::ClearHistory,
        "reset" => Action::ResetFilters,
        "dismiss" => Action::DismissNotifications,
        other => return Err(format!("Unknown command: '{other}' (try 'help')")),
    };
    Ok(Some(Input::Act(action)))
}

fn show(session: &CliSession, renderer: &dyn ViewRenderer, view: View) {
    let ctx = ViewContext::new(session.catalog(), session.state());
    match view {
        View::Results if session.state().is_comparison_open() => {
            print!("{}", renderer.comparison(&ctx));
        }
        View::Results => print!("{}", renderer.results(&ctx)),
        View::Saved => print!("{}", renderer.saved(&ctx)),
        View::History => print!("{}", renderer.history(&ctx)),
        View::Help => println!("{HELP}"),
    }
}

/// Run the shell until `quit` or end of input
pub fn run(session: &mut CliSession, format: ViewFormat) {
    let renderer = render::renderer(format);
    show(session, renderer.as_ref(), View::Results);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        dispatch(session, renderer.as_ref(), Action::Tick);

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Input::Quit)) => break,
            Ok(Some(Input::Show(view))) => show(session, renderer.as_ref(), view),
            Ok(Some(Input::Act(Action::ToggleSaved(id)))) => {
                saved::toggle_with(session, renderer.as_ref(), &id);
            }
            Ok(Some(Input::Act(action))) => {
                let refresh = !matches!(
                    action,
                    Action::ClearHistory | Action::DismissNotifications
                );
                dispatch(session, renderer.as_ref(), action);
                if refresh {
                    show(session, renderer.as_ref(), View::Results);
                }
            }
            Err(e) => eprintln!("✗ {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_finder::core::models::{Category, Format};

    fn action(line: &str) -> Action {
        match parse_line(line) {
            Ok(Some(Input::Act(action))) => action,
            other => panic!("expected an action for '{line}', got {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_views() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("quit"), Ok(Some(Input::Quit)));
        assert_eq!(parse_line("saved"), Ok(Some(Input::Show(View::Saved))));
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(
            action("category siyb"),
            Action::SelectCategory(Selection::Only(Category::Siyb))
        );
        assert_eq!(action("format all"), Action::SelectFormat(Selection::All));
        assert_eq!(
            action("format In-Person"),
            Action::SelectFormat(Selection::Only(Format::InPerson))
        );
        assert_eq!(
            action("duration 3 Months"),
            Action::SelectDuration(Selection::Only("3 Months".to_string()))
        );
        assert_eq!(
            action("price 5000 2500"),
            Action::SetPriceRange(PriceRange::new(2500, 5000))
        );
        assert_eq!(
            action("search  machine learning "),
            Action::SubmitSearch("machine learning".to_string())
        );
    }

    #[test]
    fn test_compare_with_and_without_id() {
        assert_eq!(action("compare"), Action::OpenComparison);
        assert_eq!(
            action("compare ai-fundamentals"),
            Action::ToggleCompare("ai-fundamentals".to_string())
        );
    }

    #[test]
    fn test_errors() {
        assert!(parse_line("fly away").unwrap_err().contains("Unknown command"));
        assert!(parse_line("category").unwrap_err().contains("Missing category"));
        assert!(parse_line("page two").unwrap_err().contains("Invalid page"));
        assert!(parse_line("price 10").is_err());
        assert!(parse_line("save").unwrap_err().contains("Missing course id"));
        assert!(parse_line("sort cheapest").is_err());
    }
}
