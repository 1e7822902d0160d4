//! Interactive browse session.
//!
//! Reads commands from stdin while fetches run in spawned tasks. Each fetch
//! carries a [`FetchTicket`]; a result whose ticket has been superseded by a
//! later command is dropped, so a slow response can never overwrite a newer
//! view.

mod command;
mod session;

use std::sync::Arc;

use jobboard_client::JobBoardClient;
use jobboard_core::present::DetailSummary;
use jobboard_core::{FetchEffect, FetchPhase, FetchTicket, JobPost, JobPostListResponse};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::render;
use command::{parse_command, HELP};
use session::{Request, Session, Step};

/// Parses a job id as typed by the user. Only positive integers are ids.
pub(crate) fn parse_job_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// A completed fetch for whichever screen requested it.
#[derive(Debug)]
enum Loaded {
    Listing(JobPostListResponse),
    Detail(Box<JobPost>),
}

type Completion = (FetchTicket, Result<Loaded, String>);

pub(crate) async fn run_browse(client: Arc<JobBoardClient>, page_size: u32) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Completion>(16);
    let mut effect: FetchEffect<Loaded> = FetchEffect::new();
    let mut session = Session::new(page_size);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP.trim_end());
    start_fetch(&client, &tx, &mut effect, session.current_request());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(complaint) => {
                        if !complaint.is_empty() {
                            println!("{complaint}");
                        }
                        continue;
                    }
                };
                match session.apply(command) {
                    Step::Fetch(request) => {
                        start_fetch(&client, &tx, &mut effect, request);
                    }
                    Step::Print(text) => println!("{}", text.trim_end()),
                    Step::Quit => break,
                }
            }
            Some((ticket, outcome)) = rx.recv() => {
                if !effect.settle(ticket, outcome) {
                    tracing::debug!(seq = ticket.seq(), "dropping superseded fetch result");
                    continue;
                }
                print!("{}", render_phase(&mut session, effect.phase()));
            }
        }
    }

    effect.cancel();
    Ok(())
}

/// Starts `request`, superseding whatever is still in flight.
fn start_fetch(
    client: &Arc<JobBoardClient>,
    tx: &mpsc::Sender<Completion>,
    effect: &mut FetchEffect<Loaded>,
    request: Request,
) {
    let ticket = effect.begin();
    println!("{}", render::LOADING);
    tracing::debug!(seq = ticket.seq(), ?request, "fetch started");

    let client = Arc::clone(client);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = match request {
            Request::Listing(filters) => client
                .list_job_posts(&filters)
                .await
                .map(Loaded::Listing),
            Request::Detail(id) => client
                .get_job_post(id)
                .await
                .map(|post| Loaded::Detail(Box::new(post))),
        }
        .map_err(|e| e.display_message());
        // The receiver only goes away when the session has ended.
        let _ = tx.send((ticket, outcome)).await;
    });
}

/// Text for a settled fetch. A loaded listing also updates the session's page count.
fn render_phase(session: &mut Session, phase: &FetchPhase<Loaded>) -> String {
    if let Some(message) = phase.error() {
        return format!("Error: {message}\n");
    }
    match phase.ready() {
        None => format!("{}\n", render::LOADING),
        Some(Loaded::Listing(page)) => {
            session.listing_loaded(page.total_pages);
            let mut out = format!("\n{}\n", session.location());
            if let Some(filters) = render::render_filters(&session.view()) {
                out.push_str(&filters);
                out.push('\n');
            }
            out.push_str(&render::render_listing(page));
            out
        }
        Some(Loaded::Detail(post)) => {
            format!("\n{}", render::render_detail(&DetailSummary::from_post(post)))
        }
    }
}
