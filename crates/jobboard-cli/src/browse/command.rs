/// One line typed into the browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    /// Empty text clears the search.
    Search(String),
    ToggleTag(String),
    ClearTags,
    Page(u32),
    Next,
    Prev,
    Open(String),
    Back,
    Reload,
    Help,
    Quit,
}

pub(crate) const HELP: &str = "\
commands:
  search <text>   search posts (no text clears the search)
  tag <name>      select or deselect a tag
  clear           deselect all tags
  page <n>        go to page n
  next, prev      move one page
  open <id>       show a job post
  back            return to the listing
  reload          fetch the current view again
  quit            leave
";

/// Parses a command line. Returns the complaint to print on bad input.
pub(crate) fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => BrowseCommand::Search(rest.to_owned()),
        "tag" | "t" if !rest.is_empty() => BrowseCommand::ToggleTag(rest.to_owned()),
        "tag" | "t" => return Err("usage: tag <name>".to_string()),
        "clear" => BrowseCommand::ClearTags,
        "page" | "p" => match rest.parse::<u32>() {
            Ok(page) if page > 0 => BrowseCommand::Page(page),
            _ => return Err("usage: page <n> (n >= 1)".to_string()),
        },
        "next" | "n" => BrowseCommand::Next,
        "prev" => BrowseCommand::Prev,
        "open" | "o" if !rest.is_empty() => BrowseCommand::Open(rest.to_owned()),
        "open" | "o" => return Err("usage: open <id>".to_string()),
        "back" | "b" => BrowseCommand::Back,
        "reload" | "r" => BrowseCommand::Reload,
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        "" => return Err(String::new()),
        other => return Err(format!("unknown command `{other}` (try `help`)")),
    };
    Ok(command)
}
