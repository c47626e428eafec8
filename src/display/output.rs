use crate::analysis::catalog::ChampionCatalog;
use crate::analysis::engine::ResonanceReport;
use crate::analysis::resonance::ChampionResonance;
use crate::analysis::traits::{Trait, TraitScore, MAX_SCORE};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

/// Account context shown above the analysis.
pub struct AccountSummary<'a> {
    pub summoner_name: &'a str,
    pub region: &'a str,
    pub summoner_level: i64,
}

#[derive(Tabled)]
struct TraitRow {
    #[tabled(rename = "Trait")]
    name: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "")]
    bar: String,
    #[tabled(rename = "Source")]
    source: String,
}

#[derive(Tabled)]
struct SlotRow {
    #[tabled(rename = "Slot")]
    slot: String,
    #[tabled(rename = "Trait")]
    name: String,
    #[tabled(rename = "Lore")]
    lore: String,
}

#[derive(Tabled)]
struct RunnerUpRow {
    rank: String,
    champion: String,
    slots: String,
    resonance: String,
    games: String,
    play_bonus: String,
}

#[derive(Tabled)]
struct PoolRow {
    champion: String,
    games: String,
    play_rate: String,
    win_rate: String,
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Trait")]
    name: String,
    #[tabled(rename = "Champions")]
    champions: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_retry_prompt(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message.yellow());
    eprintln!("   Try another Riot ID or region, or include non-ranked queues with --all-queues.");
}

fn score_bar(score: u8) -> String {
    let filled = "■".repeat(score as usize);
    let empty = "□".repeat((MAX_SCORE - score) as usize);
    format!("{}{}", filled, empty)
}

pub fn display_account_header(account: &AccountSummary, report: &ResonanceReport) {
    let stats = &report.stats;
    println!(
        "\n{}",
        format!("🔮 Runic Resonance for {}", account.summoner_name)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(70).cyan());
    println!(
        "{} {} | {} {} | {} {}",
        "Region:".bold(),
        account.region,
        "Level:".bold(),
        account.summoner_level,
        "Main role:".bold(),
        stats.primary_role
    );
    println!(
        "{} {} games | {} {:.1}% | {} {:.2}\n",
        "📈 Analyzed:".bold(),
        report.games_analyzed,
        "Win rate:".bold(),
        stats.win_rate,
        "KDA:".bold(),
        stats.kda
    );
}

pub fn display_traits(traits: &[TraitScore]) {
    println!("{}", "✨ RESONANCE PATTERN".bold().cyan());

    let rows: Vec<TraitRow> = traits
        .iter()
        .map(|t| {
            let score = if t.is_unlocked() {
                format!("{}/10 🔓", t.score).green().to_string()
            } else {
                format!("{}/10", t.score)
            };
            TraitRow {
                name: t.trait_id.to_string(),
                score,
                bar: score_bar(t.score),
                source: t.data_source.trim_start_matches("Based on: ").to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_spirit_champion(champion: &ChampionResonance, catalog: &ChampionCatalog) {
    println!(
        "{}",
        format!("🏆 SPIRIT CHAMPION: {}", champion.champion).bold().magenta()
    );
    println!("{}", "=".repeat(70).magenta());
    println!(
        "{} {:.0}% | {} {}/3 | {} {} ({} games, {:.1}%)",
        "Resonance:".bold(),
        champion.resonance_strength,
        "Slots:".bold(),
        champion.slots_filled,
        "Play bonus:".bold(),
        champion.play_bonus,
        champion.games_played,
        champion.play_rate
    );

    if champion.is_perfect() {
        println!(
            "\n{}",
            "🌟 PERFECT RESONANCE: all 3 runic slots unlocked".bold().yellow()
        );
    }

    let mut rows = Vec::new();
    if let Some(definition) = catalog.get(&champion.champion) {
        for (idx, slot) in definition.slots.iter().enumerate() {
            let filled = champion
                .trait_details
                .iter()
                .find(|d| d.trait_score.trait_id == slot.trait_id);
            let row = match filled {
                Some(detail) => SlotRow {
                    slot: format!("{} 🔓", idx + 1).green().to_string(),
                    name: format!("{} ({}/10)", slot.trait_id, detail.trait_score.score),
                    lore: detail.slot_lore.clone(),
                },
                None => SlotRow {
                    slot: format!("{} 🔒", idx + 1),
                    name: slot.trait_id.to_string().dimmed().to_string(),
                    lore: "Locked: needs a score of 7+".dimmed().to_string(),
                },
            };
            rows.push(row);
        }
    }

    if !rows.is_empty() {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    if champion.is_playstyle_match() {
        println!(
            "{}",
            format!(
                "💫 Playstyle match: you haven't played {} in these games, but your traits align.",
                champion.champion
            )
            .italic()
        );
    }
    println!();
}

pub fn display_runner_ups(runner_ups: &[ChampionResonance]) {
    if runner_ups.is_empty() {
        return;
    }

    println!("{}", "🥈 RUNNER-UPS".bold().cyan());
    let rows: Vec<RunnerUpRow> = runner_ups
        .iter()
        .map(|r| RunnerUpRow {
            rank: format!("#{}", r.rank.unwrap_or_default()),
            champion: r.champion.clone(),
            slots: format!("{}/3", r.slots_filled),
            resonance: format!("{:.0}%", r.resonance_strength),
            games: r.games_played.to_string(),
            play_bonus: r.play_bonus.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champion_pool(report: &ResonanceReport) {
    println!("{}", "🎮 CHAMPION POOL".bold().cyan());

    let mut pool: Vec<_> = report.champions_played.values().collect();
    pool.sort_by(|a, b| b.games.cmp(&a.games).then_with(|| a.name.cmp(&b.name)));

    let rows: Vec<PoolRow> = pool
        .iter()
        .map(|c| PoolRow {
            champion: c.name.clone(),
            games: c.games.to_string(),
            play_rate: format!("{:.1}%", c.play_rate(report.games_analyzed)),
            win_rate: format!("{:.1}%", c.win_rate() * 100.0),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_narrative(narrative: &str) {
    println!("{}", "📜 THE RUNES SPEAK".bold().yellow());
    println!("{}\n", "=".repeat(70).yellow());
    println!("{}\n", narrative.italic());
}

pub fn display_catalog(catalog: &ChampionCatalog, only: Option<Trait>) {
    println!(
        "\n{}",
        format!("📖 Champion Catalog ({} champions)", catalog.len())
            .bold()
            .cyan()
    );

    let rows: Vec<CatalogRow> = Trait::ALL
        .iter()
        .filter(|t| only.map_or(true, |wanted| wanted == **t))
        .map(|&t| CatalogRow {
            name: t.to_string(),
            champions: catalog.champions_with(t).join(", "),
            source: t.data_source().trim_start_matches("Based on: ").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("\n• A champion's slot unlocks when the matching trait scores 7 or more");
    println!("• Three unlocked slots is a Perfect Resonance\n");
}
