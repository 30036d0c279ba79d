use anyhow::{Result, anyhow, bail};
use chrono::Utc;
use clap::Parser;
use std::time::Duration;
use tabled::{Table, Tabled, settings::Style};
use tokio::time::{MissedTickBehavior, interval};

use pokernow_tracker::config::{API, POLLING};
use pokernow_tracker::data::{HttpResultsClient, ResultsClient, ResultsRequest};
use pokernow_tracker::domain::{AliasSet, HistoryUpdate, SessionRegistry};
use pokernow_tracker::engine::{PollDecision, Tracker, Visibility, build_rows, build_total};
use pokernow_tracker::ui::UI_TEXT;
use pokernow_tracker::utils::{format_amount, format_clock_secs, format_duration};

/// Headless tracker: polls the results backend and prints the table whenever it changes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Your player name as shown at the table
    #[arg(long)]
    player: String,

    /// Game URL reported in whole units (repeatable)
    #[arg(long = "game")]
    games: Vec<String>,

    /// Game URL reported in cents (repeatable)
    #[arg(long = "cents-game")]
    cents_games: Vec<String>,

    /// Alternative player name (repeatable)
    #[arg(long = "alias")]
    aliases: Vec<String>,

    /// Base URL of the results backend
    #[arg(long, env = "TRACKER_API_URL", default_value = API.default_base_url)]
    api_url: String,

    /// Stop after this many completed polls
    #[arg(long)]
    polls: Option<u32>,
}

#[derive(Tabled)]
struct TableLine {
    #[tabled(rename = "Game")]
    game: String,
    #[tabled(rename = "Profit/Loss")]
    profit: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn build_registries(args: &Args) -> Result<(SessionRegistry, AliasSet)> {
    let mut sessions = SessionRegistry::new();
    for url in &args.games {
        sessions.add(url).map_err(|e| anyhow!("{}: {}", url, e))?;
    }
    for url in &args.cents_games {
        let url = sessions
            .add(url)
            .map_err(|e| anyhow!("{}: {}", url, e))?
            .url
            .clone();
        sessions.set_uses_subunits(&url, true);
    }

    let mut aliases = AliasSet::new();
    for alias in &args.aliases {
        aliases.add(alias).map_err(|e| anyhow!("{}: {}", alias, e))?;
    }
    Ok((sessions, aliases))
}

fn print_snapshot(tracker: &Tracker, sessions: &SessionRegistry) {
    let now = format_clock_secs(Utc::now());
    let Some(results) = tracker.results() else {
        println!("[{}] {}", now, tracker.error().unwrap_or(&UI_TEXT.err_no_results));
        return;
    };

    let mut lines: Vec<TableLine> = build_rows(results, sessions)
        .into_iter()
        .map(|row| TableLine {
            game: row.url,
            profit: row.display,
            status: format!("{:?}", row.tone),
        })
        .collect();
    let total = build_total(results, sessions);
    lines.push(TableLine {
        game: UI_TEXT.table_total.clone(),
        profit: total.display,
        status: format!("{:?}", total.tone),
    });

    println!(
        "[{}] {}: {}",
        now,
        UI_TEXT.label_profit_loss,
        format_amount(tracker.total_profit(sessions))
    );
    println!("{}", Table::new(lines).with(Style::rounded()));
    if let Some(error) = tracker.error() {
        println!("{} {}", UI_TEXT.icon_warning, error);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.player.trim().is_empty() {
        bail!("{}", UI_TEXT.err_player_name);
    }
    let (sessions, aliases) = build_registries(&args)?;
    if sessions.is_empty() {
        bail!("{}", UI_TEXT.err_no_games);
    }

    let client = HttpResultsClient::new(&args.api_url);
    log::info!(
        "Tracking {} game(s) for {} via {}",
        sessions.len(),
        args.player.trim(),
        client.endpoint()
    );

    let mut tracker = Tracker::new();
    tracker.start(Utc::now(), Visibility::Visible);

    let mut ticker = interval(Duration::from_millis(POLLING.tick_interval_ms as u64));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut completed = 0u32;
    let mut last_error: Option<String> = None;
    loop {
        ticker.tick().await;
        if tracker.attempt_poll(Utc::now()) != PollDecision::Dispatch {
            continue;
        }

        let request = ResultsRequest::new(&args.player, &sessions, &aliases);
        let outcome = client.fetch_results(&request).await;
        let update = tracker.complete_poll(outcome, &sessions, Utc::now());
        completed += 1;

        let error = tracker.error().map(str::to_owned);
        let changed = !matches!(update, None | Some(HistoryUpdate::Unchanged)) || error != last_error;
        if changed || completed == 1 {
            print_snapshot(&tracker, &sessions);
        }
        last_error = error;

        if args.polls.is_some_and(|limit| completed >= limit) {
            break;
        }
    }

    let elapsed_ms = tracker
        .started_at()
        .map(|t| (Utc::now() - t).num_milliseconds())
        .unwrap_or(0);
    log::info!(
        "Done after {} poll(s) in {}, {} history point(s)",
        completed,
        format_duration(elapsed_ms),
        tracker.history().len()
    );
    Ok(())
}
