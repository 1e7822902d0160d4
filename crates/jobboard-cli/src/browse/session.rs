use jobboard_core::query::{
    clear_tags_update, listing_href, page_update, search_update, tags_update,
};
use jobboard_core::{apply_updates, toggle_tag, JobPostFilters, QueryParams, ViewState};

use super::command::BrowseCommand;
use super::parse_job_id;
use crate::render;

/// What the session currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Listing,
    Detail(i64),
}

/// The request that brings a screen up to date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Request {
    Listing(JobPostFilters),
    Detail(i64),
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    Fetch(Request),
    Print(String),
    Quit,
}

/// Browse session state: the listing's query string plus the open screen.
///
/// Like the web listing, everything the listing shows is derived from
/// `params`; commands rewrite it through the filter update protocol.
#[derive(Debug)]
pub(crate) struct Session {
    params: QueryParams,
    screen: Screen,
    page_size: u32,
    /// Page count of the last listing shown, for `next`.
    total_pages: Option<u32>,
}

impl Session {
    pub(crate) fn new(page_size: u32) -> Self {
        Self {
            params: QueryParams::default(),
            screen: Screen::Listing,
            page_size,
            total_pages: None,
        }
    }

    pub(crate) fn view(&self) -> ViewState {
        ViewState::parse(&self.params.to_query_string())
    }

    pub(crate) fn screen(&self) -> Screen {
        self.screen
    }

    /// The listing URL the session is on, as the web front end would show it.
    pub(crate) fn location(&self) -> String {
        listing_href(&self.params)
    }

    pub(crate) fn current_request(&self) -> Request {
        match self.screen {
            Screen::Listing => {
                Request::Listing(JobPostFilters::for_view(&self.view(), self.page_size))
            }
            Screen::Detail(id) => Request::Detail(id),
        }
    }

    pub(crate) fn listing_loaded(&mut self, total_pages: u32) {
        self.total_pages = Some(total_pages);
    }

    pub(crate) fn apply(&mut self, command: BrowseCommand) -> Step {
        let view = self.view();
        let update = match command {
            BrowseCommand::Search(text) => search_update(text.trim()),
            BrowseCommand::ToggleTag(tag) => tags_update(&toggle_tag(&view.tags, &tag)),
            BrowseCommand::ClearTags => clear_tags_update(),
            BrowseCommand::Page(page) => page_update(page),
            BrowseCommand::Next => match self.total_pages {
                Some(total) if view.page >= total => {
                    return Step::Print("already on the last page".to_string())
                }
                _ => page_update(view.page.saturating_add(1)),
            },
            BrowseCommand::Prev if view.page <= 1 => {
                return Step::Print("already on the first page".to_string())
            }
            BrowseCommand::Prev => page_update(view.page - 1),
            BrowseCommand::Open(raw) => {
                let Some(id) = parse_job_id(&raw) else {
                    return Step::Print(render::NOT_FOUND.to_string());
                };
                self.screen = Screen::Detail(id);
                return Step::Fetch(self.current_request());
            }
            BrowseCommand::Back => {
                self.screen = Screen::Listing;
                return Step::Fetch(self.current_request());
            }
            BrowseCommand::Reload => return Step::Fetch(self.current_request()),
            BrowseCommand::Help => return Step::Print(super::command::HELP.to_string()),
            BrowseCommand::Quit => return Step::Quit,
        };

        self.params = apply_updates(&self.params, &[update]);
        self.screen = Screen::Listing;
        Step::Fetch(self.current_request())
    }
}
