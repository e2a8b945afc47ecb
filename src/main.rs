use clap::Parser;
use image_searcher::config::SearchConfig;
use image_searcher::render::render_view;
use image_searcher::services::ImageService;
use image_searcher::{FetchDisposition, PageStep, Searcher, Session};
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

mod args;
use args::{Args, Command};

const HELP: &str = "Commands: search <text> | next | prev | safe on|off | show | help | quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up UNSPLASH_ACCESS_KEY from a local .env when present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    }
    .with_env_access_key();

    let mut searcher = Searcher::new(config);
    if let Some(endpoint) = &args.endpoint {
        searcher = searcher.with_endpoint(endpoint.clone());
    }
    if args.safe_search {
        searcher = searcher.with_safe_search(true);
    }
    if args.keep_results {
        searcher = searcher.with_keep_results_while_loading(true);
    }

    let mut session = searcher.build()?;

    match args.query.clone() {
        Some(query) => run_once(&mut session, &query, args.json).await,
        None => run_interactive(&mut session, args.json).await,
    }
}

/// Run a single search, print it and exit
async fn run_once<S>(session: &mut Session<S>, query: &str, json: bool) -> Result<(), Box<dyn Error>>
where
    S: ImageService + 'static,
{
    session.submit_query(query)?;
    session.settle().await;

    if let Some(err) = session.view().last_error() {
        return Err(format!("search failed: {err}").into());
    }

    print_view(session, json)?;
    Ok(())
}

/// Read commands from stdin while requests complete in the background
async fn run_interactive<S>(session: &mut Session<S>, json: bool) -> Result<(), Box<dyn Error>>
where
    S: ImageService + 'static,
{
    println!("{HELP}");
    print_view(session, json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    ::log::debug!("stdin closed");
                    break;
                };
                let Some(command) = Command::parse(&line) else {
                    continue;
                };

                match command {
                    Command::Search(text) => {
                        if let Err(e) = session.submit_query(&text) {
                            println!("{e}");
                            continue;
                        }
                    }
                    Command::Next => session.go_to_page(PageStep::Next),
                    Command::Previous => session.go_to_page(PageStep::Previous),
                    Command::SafeSearch(enabled) => session.set_safe_search(enabled),
                    Command::Show => {}
                    Command::Help => {
                        println!("{HELP}");
                        continue;
                    }
                    Command::Quit => break,
                    Command::Unknown(input) => {
                        println!("Unknown command: {input}\n{HELP}");
                        continue;
                    }
                }
                print_view(session, json)?;
            }
            Some(disposition) = session.next_outcome(), if session.in_flight() > 0 => {
                if disposition != FetchDisposition::Stale {
                    print_view(session, json)?;
                }
            }
        }
    }

    // Let outstanding requests finish before the runtime shuts down
    session.settle().await;
    Ok(())
}

fn print_view<S>(session: &Session<S>, json: bool) -> Result<(), Box<dyn Error>>
where
    S: ImageService + 'static,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&session.view().current_page())?);
    } else {
        print!("{}", render_view(session.view()));
    }
    Ok(())
}
