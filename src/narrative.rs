//! Narrative generation. Runs only after the engine has produced its report.

use crate::analysis::catalog::ChampionCatalog;
use crate::analysis::engine::ResonanceReport;
use crate::error::AppError;
use std::fmt::Write;
use tracing::warn;

pub struct NarrativeRequest<'a> {
    pub summoner_name: &'a str,
    pub report: &'a ResonanceReport,
    pub catalog: &'a ChampionCatalog,
}

impl<'a> NarrativeRequest<'a> {
    /// Other champions sharing the player's strong traits, excluding the primary.
    pub fn echo_champions(&self, limit: usize) -> Vec<&'a str> {
        let primary = self.report.spirit_champion.primary.champion.as_str();
        let mut echoes: Vec<&'a str> = Vec::new();
        for score in self.report.top_traits(3) {
            if !score.is_unlocked() {
                continue;
            }
            for name in self.catalog.champions_with(score.trait_id) {
                if name != primary && !echoes.contains(&name) {
                    echoes.push(name);
                }
            }
        }
        echoes.truncate(limit);
        echoes
    }

    /// Prompt for a generative-text backend.
    pub fn prompt(&self) -> String {
        let report = self.report;
        let primary = &report.spirit_champion.primary;
        let stats = &report.stats;

        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "Perform a Runic Resonance reading for the summoner known as \"{}\".\n",
            self.summoner_name
        );
        prompt.push_str("Resonance pattern:\n");
        for score in &report.traits {
            let _ = writeln!(
                prompt,
                "- {}: {}/10 ({})",
                score.trait_id, score.score, score.description
            );
        }

        let matching: Vec<String> = primary
            .matching_traits()
            .iter()
            .map(|t| t.to_string())
            .collect();
        let _ = writeln!(prompt, "\nSpirit champion: {}", primary.champion);
        let _ = writeln!(
            prompt,
            "- Resonance strength: {:.0}%",
            primary.resonance_strength
        );
        let _ = writeln!(prompt, "- Matching traits: {}", matching.join(", "));
        let _ = writeln!(prompt, "- Slots filled: {}/3", primary.slots_filled);

        let top: Vec<String> = report
            .top_traits(3)
            .iter()
            .map(|t| t.trait_id.to_string())
            .collect();
        let _ = writeln!(prompt, "\nPlaystyle:");
        let _ = writeln!(prompt, "- Win rate: {:.1}%", stats.win_rate);
        let _ = writeln!(prompt, "- KDA: {:.2}", stats.kda);
        let _ = writeln!(prompt, "- Champion pool: {}", stats.champion_pool_size);
        let _ = writeln!(prompt, "- Games analyzed: {}", report.games_analyzed);

        let _ = writeln!(
            prompt,
            "\nWrite 300-350 words describing how {} shows up in their play the way it does in {}'s story. \
             Mention {} as echoes in their essence. End with a declaration about the legend they are becoming.",
            top.join(", "),
            primary.champion,
            self.echo_champions(3).join(", ")
        );
        prompt
    }
}

pub trait NarrativeGenerator {
    fn generate(&self, request: &NarrativeRequest) -> Result<String, AppError>;
}

/// Deterministic narrative built from the report alone.
pub struct TemplateNarrator;

impl NarrativeGenerator for TemplateNarrator {
    fn generate(&self, request: &NarrativeRequest) -> Result<String, AppError> {
        let report = request.report;
        let primary = &report.spirit_champion.primary;

        let mut text = format!(
            "The Runes stir, {}. Across {} battles your spirit has settled beside {}",
            request.summoner_name, report.games_analyzed, primary.champion
        );
        if primary.is_perfect() {
            text.push_str(", and all three runic slots blaze as one: a Perfect Resonance.");
        } else {
            let _ = write!(
                text,
                ", with {} of 3 runic slots awakened.",
                primary.slots_filled
            );
        }

        for slot in &primary.trait_details {
            let _ = write!(
                text,
                " {} ({}/10): {}.",
                slot.trait_score.trait_id,
                slot.trait_score.score,
                slot.slot_lore.trim_end_matches('.')
            );
        }

        if primary.is_playstyle_match() {
            let _ = write!(
                text,
                " You have never taken {} onto the Rift, yet your playstyle already walks their path.",
                primary.champion
            );
        } else {
            let _ = write!(
                text,
                " You have carried {} into {} of those battles ({:.0}%).",
                primary.champion, primary.games_played, primary.play_rate
            );
        }

        let echoes = request.echo_champions(3);
        if !echoes.is_empty() {
            let _ = write!(
                text,
                " Echoes of {} ripple through your essence.",
                echoes.join(", ")
            );
        }
        text.push_str(" Your legend is still being written.");
        Ok(text)
    }
}

pub fn fallback_narrative(request: &NarrativeRequest) -> String {
    format!(
        "The Runes shimmer with recognition, {}. Your spirit resonates with {}, a champion of legend. \
         Through {} battles, you have forged your path with determination and skill.",
        request.summoner_name,
        request.report.spirit_champion.primary.champion,
        request.report.games_analyzed
    )
}

/// Runs `generator`, falling back to a fixed text if it fails.
pub fn narrate_or_fallback(generator: &dyn NarrativeGenerator, request: &NarrativeRequest) -> String {
    match generator.generate(request) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!("Narrative generator returned empty text, using fallback");
            fallback_narrative(request)
        }
        Err(e) => {
            warn!("Narrative generation failed: {}", e);
            fallback_narrative(request)
        }
    }
}
