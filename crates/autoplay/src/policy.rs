use crate::{score_candidate, AutoAction, AutoplayConfig, ObjectiveWeights};
use arcana_core::{
    apply_player_effects, resolve_special, score_hand, Battle, Card, EffectTotals, HandKind,
};
use serde::{Deserialize, Serialize};

/// One scored subset of the current hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub indices: Vec<usize>,
    pub hand: HandKind,
    /// Hand positions of the scoring cards.
    pub scoring_positions: Vec<usize>,
    /// Suit totals with any special card damage and pentacle changes folded in.
    pub totals: EffectTotals,
    pub score: f64,
}

impl Candidate {
    pub fn non_scoring_positions(&self, hand_len: usize) -> Vec<usize> {
        (0..hand_len)
            .filter(|idx| !self.scoring_positions.contains(idx))
            .collect()
    }
}

/// Every subset of `0..len` with 1..=max cards, smaller subsets first and
/// lexicographic within a size.
pub fn enumerate_subsets(len: usize, max: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for size in 1..=max.min(len) {
        collect_combinations(0, len, size, &mut current, &mut out);
    }
    out
}

fn collect_combinations(
    start: usize,
    len: usize,
    size: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    for idx in start..len {
        if len - idx < size - current.len() {
            break;
        }
        current.push(idx);
        collect_combinations(idx + 1, len, size, current, out);
        current.pop();
    }
}

pub fn evaluate_candidate(
    battle: &Battle,
    indices: &[usize],
    weights: ObjectiveWeights,
) -> Option<Candidate> {
    let cards: Vec<Card> = indices
        .iter()
        .map(|&idx| battle.hand.get(idx).copied())
        .collect::<Option<_>>()?;
    let breakdown = score_hand(&cards, &battle.table);
    let totals = with_specials(battle, &cards, breakdown.totals);
    let score = score_candidate(
        &battle.combat.player,
        battle.combat.enemy(),
        &totals,
        weights,
    );
    Some(Candidate {
        indices: indices.to_vec(),
        hand: breakdown.evaluation.hand,
        scoring_positions: breakdown
            .evaluation
            .scoring_indices
            .iter()
            .map(|&pos| indices[pos])
            .collect(),
        totals,
        score,
    })
}

/// Runs specials against a scratch copy of the combat state.
fn with_specials(battle: &Battle, cards: &[Card], mut totals: EffectTotals) -> EffectTotals {
    if !cards.iter().any(Card::is_special) {
        return totals;
    }
    let mut scratch = battle.combat.clone();
    apply_player_effects(&mut scratch, &totals);
    for card in cards {
        if let Some(kind) = card.special_kind() {
            let outcome = resolve_special(card.id, kind, &mut scratch);
            totals.damage += outcome.effect.damage;
            totals.pentacles += outcome.effect.pentacles_gained - outcome.effect.pentacles_spent;
        }
    }
    totals
}

/// Highest scoring play. Ties keep the earlier subset, so fewer cards win,
/// then lower positions.
pub fn best_play(battle: &Battle, weights: ObjectiveWeights) -> Option<Candidate> {
    let max = battle.config.hand.max_play;
    let mut best: Option<Candidate> = None;
    for indices in enumerate_subsets(battle.hand.len(), max) {
        let Some(candidate) = evaluate_candidate(battle, &indices, weights) else {
            continue;
        };
        let better = best
            .as_ref()
            .map(|current| candidate.score > current.score)
            .unwrap_or(true);
        if better {
            best = Some(candidate);
        }
    }
    best
}

pub fn choose_action(battle: &Battle, config: &AutoplayConfig) -> AutoAction {
    let Some(best) = best_play(battle, config.weights) else {
        return AutoAction::NewRun;
    };
    if best.score < config.discard_threshold && battle.discards_left() > 0 {
        let indices = best.non_scoring_positions(battle.hand.len());
        if !indices.is_empty() {
            return AutoAction::Discard { indices };
        }
    }
    AutoAction::Play {
        indices: best.indices,
    }
}
