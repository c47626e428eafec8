use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use runic_resonance::analysis::{
    AggregateStats, ChampionCatalog, ChampionPlayCounts, MatchRecord, ResonanceEngine,
    SpiritChampionResult, Trait, TraitScore,
};
use runic_resonance::api::RiotApiClient;
use runic_resonance::config::{clamp_match_count, Config};
use runic_resonance::display::output::{
    display_account_header, display_catalog, display_champion_pool, display_error,
    display_info, display_narrative, display_retry_prompt, display_runner_ups,
    display_spirit_champion, display_success, display_traits, AccountSummary,
};
use runic_resonance::error::{AppError, EngineError};
use runic_resonance::narrative::{narrate_or_fallback, NarrativeRequest, TemplateNarrator};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(name = "Runic Resonance")]
#[command(about = "Discover your spirit champion from your League of Legends match history", long_about = None)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Champion catalog JSON to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a player's recent matches
    Analyze {
        /// Riot Game Name
        game_name: String,

        /// Riot Tag (tag line)
        tag_line: String,

        /// Region or platform (na, euw, kr, na1, ...)
        #[arg(short, long)]
        region: Option<String>,

        /// Number of matches to analyze (max: 100)
        #[arg(short, long)]
        matches: Option<usize>,

        /// Number of runner-up champions to show
        #[arg(long)]
        runner_ups: Option<usize>,

        /// Include every queue, not only ranked games
        #[arg(long)]
        all_queues: bool,

        /// Print the analysis as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// List which champions carry each trait
    Catalog {
        /// Only show one trait (e.g. "protector")
        #[arg(short = 't', long = "trait")]
        only: Option<Trait>,
    },
}

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    summoner_name: &'a str,
    region: &'a str,
    summoner_level: i64,
    games_analyzed: u32,
    win_rate: f64,
    kda: f64,
    stats: &'a AggregateStats,
    traits: &'a [TraitScore],
    spirit_champion: &'a SpiritChampionResult,
    champions_played: &'a ChampionPlayCounts,
    narrative: &'a str,
    timestamp: DateTime<Utc>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        let insufficient = e
            .chain()
            .any(|cause| {
                matches!(
                    cause.downcast_ref::<EngineError>(),
                    Some(EngineError::InsufficientData)
                )
            });
        if insufficient {
            display_retry_prompt("No matches to analyze for this account.");
        } else {
            display_error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<ChampionCatalog> {
    match path {
        Some(path) => ChampionCatalog::load(path)
            .with_context(|| format!("loading champion catalog {}", path.display())),
        None => ChampionCatalog::builtin().context("loading built-in champion catalog"),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
    }

    // Catalog integrity is checked before any network traffic.
    let catalog = load_catalog(config.catalog_path.as_ref())?;

    match cli.command {
        Command::Catalog { only } => {
            display_catalog(&catalog, only);
            Ok(())
        }
        Command::Analyze {
            game_name,
            tag_line,
            region,
            matches,
            runner_ups,
            all_queues,
            json,
        } => {
            if let Some(region) = region {
                config.region = region;
            }
            if let Some(matches) = matches {
                config.match_count = clamp_match_count(matches);
            }
            if let Some(runner_ups) = runner_ups {
                config.runner_ups = runner_ups;
            }
            analyze(&config, &catalog, &game_name, &tag_line, !all_queues, json)
        }
    }
}

fn analyze(
    config: &Config,
    catalog: &ChampionCatalog,
    game_name: &str,
    tag_line: &str,
    ranked_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    if game_name.trim().is_empty() || tag_line.trim().is_empty() {
        bail!(AppError::InvalidRiotId);
    }
    let player_key = format!("{}#{}", game_name, tag_line);
    let client = RiotApiClient::new(config.require_api_key()?, &config.region);

    // Progress chatter goes to stdout only in table mode.
    let say = |message: &str, ok: bool| {
        if json {
            return;
        }
        if ok {
            display_success(message);
        } else {
            display_info(message);
        }
    };

    say(
        &format!("Fetching data for {} on {}", player_key, client.platform()),
        false,
    );

    let account = client
        .get_account(game_name, tag_line)
        .context("looking up Riot account")?;
    let summoner = client
        .get_summoner(&account.puuid)
        .context("looking up summoner")?;
    say(&format!("Summoner Level: {}", summoner.summoner_level), true);

    let match_ids = client
        .get_match_ids(&account.puuid, config.match_count, ranked_only)
        .context("listing match history")?;
    say(&format!("Found {} matches to analyze", match_ids.len()), true);

    let records = fetch_records(&client, &account.puuid, &match_ids, json)?;
    info!("Collected {} match records for {}", records.len(), player_key);

    let engine = ResonanceEngine::new(catalog).with_runner_ups(config.runner_ups);
    let report = engine
        .analyze(&records)
        .with_context(|| format!("analyzing {}", player_key))?;

    let request = NarrativeRequest {
        summoner_name: &player_key,
        report: &report,
        catalog,
    };
    let narrative = narrate_or_fallback(&TemplateNarrator, &request);

    let account_summary = AccountSummary {
        summoner_name: &player_key,
        region: client.platform(),
        summoner_level: summoner.summoner_level,
    };

    if json {
        let output = AnalysisOutput {
            summoner_name: &player_key,
            region: client.platform(),
            summoner_level: summoner.summoner_level,
            games_analyzed: report.games_analyzed,
            win_rate: report.stats.win_rate,
            kda: report.stats.kda,
            stats: &report.stats,
            traits: &report.traits,
            spirit_champion: &report.spirit_champion,
            champions_played: &report.champions_played,
            narrative: &narrative,
            timestamp: Utc::now(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("serializing analysis")?
        );
        return Ok(());
    }

    display_account_header(&account_summary, &report);
    display_traits(&report.traits);
    display_spirit_champion(&report.spirit_champion.primary, catalog);
    display_runner_ups(&report.spirit_champion.runner_ups);
    display_champion_pool(&report);
    display_narrative(&narrative);

    Ok(())
}

fn fetch_records(
    client: &RiotApiClient,
    puuid: &str,
    match_ids: &[String],
    quiet: bool,
) -> anyhow::Result<Vec<MatchRecord>> {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(match_ids.len() as u64)
    };
    pb.set_message("Fetching match details");

    let mut records = Vec::with_capacity(match_ids.len());
    for match_id in match_ids {
        let match_data = client
            .get_match(match_id)
            .with_context(|| format!("fetching match {}", match_id))?;
        match match_data.record_for(puuid) {
            Some(record) => records.push(record),
            None => warn!("Player missing from match {}, skipping", match_id),
        }
        pb.inc(1);
    }

    pb.finish_with_message("✓ Match data fetched");
    Ok(records)
}
