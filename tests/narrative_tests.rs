use runic_resonance::analysis::{ChampionCatalog, ResonanceEngine, ResonanceReport};
use runic_resonance::error::AppError;
use runic_resonance::narrative::{
    fallback_narrative, narrate_or_fallback, NarrativeGenerator, NarrativeRequest,
    TemplateNarrator,
};

mod common;
use common::{feeding_game, support_game};

struct FailingNarrator;

impl NarrativeGenerator for FailingNarrator {
    fn generate(&self, _request: &NarrativeRequest) -> Result<String, AppError> {
        Err(AppError::ApiError("model unavailable".to_string()))
    }
}

struct SilentNarrator;

impl NarrativeGenerator for SilentNarrator {
    fn generate(&self, _request: &NarrativeRequest) -> Result<String, AppError> {
        Ok("   ".to_string())
    }
}

fn braum_report(catalog: &ChampionCatalog) -> ResonanceReport {
    let matches: Vec<_> = (0..20).map(|_| support_game("Braum")).collect();
    ResonanceEngine::new(catalog).analyze(&matches).unwrap()
}

#[test]
fn template_mentions_primary_and_slot_lore() {
    let catalog = ChampionCatalog::builtin().unwrap();
    let report = braum_report(&catalog);
    let request = NarrativeRequest {
        summoner_name: "Heimer#EUW",
        report: &report,
        catalog: &catalog,
    };

    let text = narrate_or_fallback(&TemplateNarrator, &request);

    assert!(text.contains("Heimer#EUW"));
    assert!(text.contains("Braum"));
    assert!(text.contains("Perfect Resonance"));
    let braum = catalog.get("Braum").unwrap();
    for slot in &braum.slots {
        assert!(text.contains(slot.lore.trim_end_matches('.')));
    }
}

#[test]
fn echoes_exclude_the_primary() {
    let catalog = ChampionCatalog::builtin().unwrap();
    let report = braum_report(&catalog);
    let request = NarrativeRequest {
        summoner_name: "Heimer#EUW",
        report: &report,
        catalog: &catalog,
    };

    let echoes = request.echo_champions(3);
    assert!(!echoes.is_empty());
    assert!(echoes.len() <= 3);
    assert!(!echoes.contains(&"Braum"));
}

#[test]
fn failing_generator_falls_back() {
    let catalog = ChampionCatalog::builtin().unwrap();
    let report = braum_report(&catalog);
    let request = NarrativeRequest {
        summoner_name: "Heimer#EUW",
        report: &report,
        catalog: &catalog,
    };

    let expected = fallback_narrative(&request);
    assert_eq!(narrate_or_fallback(&FailingNarrator, &request), expected);
    assert_eq!(narrate_or_fallback(&SilentNarrator, &request), expected);
    assert!(expected.contains("Braum"));
    assert!(expected.contains("20 battles"));
}

#[test]
fn prompt_carries_every_trait_and_the_result() {
    let catalog = ChampionCatalog::builtin().unwrap();
    let report = braum_report(&catalog);
    let request = NarrativeRequest {
        summoner_name: "Heimer#EUW",
        report: &report,
        catalog: &catalog,
    };

    let prompt = request.prompt();
    for score in &report.traits {
        assert!(prompt.contains(&format!("{}: {}/10", score.trait_id, score.score)));
    }
    assert!(prompt.contains("Spirit champion: Braum"));
    assert!(prompt.contains("Slots filled: 3/3"));
    assert!(prompt.contains("Games analyzed: 20"));
}

#[test]
fn narration_does_not_change_the_report() {
    let catalog = ChampionCatalog::builtin().unwrap();
    let report = ResonanceEngine::new(&catalog)
        .analyze(&[feeding_game("Yasuo")])
        .unwrap();
    let snapshot = report.clone();
    let request = NarrativeRequest {
        summoner_name: "Heimer#EUW",
        report: &report,
        catalog: &catalog,
    };

    let text = narrate_or_fallback(&TemplateNarrator, &request);
    assert!(text.contains("0 of 3 runic slots"));
    assert!(request.echo_champions(3).is_empty());
    assert_eq!(report, snapshot);
}
