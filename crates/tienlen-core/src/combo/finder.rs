use crate::combo::combination::{Combination, CombinationKind};
use crate::model::card::Card;
use crate::model::rank::Rank;

/// Shortest straight or double straight, in ranks.
pub const MIN_RUN: usize = 3;

/// Every legal combination obtainable from `hand`.
///
/// Results come grouped by kind (singles, pairs, triples, quads, straights,
/// double straights), ascending by rank inside each group. Straights and
/// double straights take the highest suits available at each rank.
pub fn find_all_combinations(hand: &[Card]) -> Vec<Combination> {
    let groups = group_by_rank(hand);
    let mut combos = Vec::new();

    combos.extend(hand_sorted(hand).into_iter().filter_map(|card| {
        Combination::new(CombinationKind::Single, vec![card])
    }));
    for kind in [
        CombinationKind::Pair,
        CombinationKind::Triple,
        CombinationKind::Quad,
    ] {
        combos.extend(sets_of(&groups, kind));
    }
    combos.extend(straights(&groups));
    combos.extend(double_straights(&groups));
    combos
}

/// Classifies an exact selection of cards, or `None` when it is not one
/// legal combination.
pub fn classify(cards: &[Card]) -> Option<Combination> {
    if cards.is_empty() || has_duplicates(cards) {
        return None;
    }
    find_all_combinations(cards)
        .into_iter()
        .find(|combo| combo.same_cards(cards))
}

/// Cards bucketed by rank index, each bucket ascending by suit.
fn group_by_rank(hand: &[Card]) -> [Vec<Card>; 13] {
    let mut groups: [Vec<Card>; 13] = Default::default();
    for card in hand_sorted(hand) {
        groups[card.rank.index()].push(card);
    }
    groups
}

fn hand_sorted(hand: &[Card]) -> Vec<Card> {
    let mut cards = hand.to_vec();
    cards.sort();
    cards.dedup();
    cards
}

fn has_duplicates(cards: &[Card]) -> bool {
    hand_sorted(cards).len() != cards.len()
}

fn sets_of(groups: &[Vec<Card>; 13], kind: CombinationKind) -> Vec<Combination> {
    let Some(size) = kind.set_size() else {
        return Vec::new();
    };
    groups
        .iter()
        .flat_map(|group| subsets(group, size))
        .filter_map(|cards| Combination::new(kind, cards))
        .collect()
}

/// All `size`-element subsets of `group`, in lexicographic index order.
fn subsets(group: &[Card], size: usize) -> Vec<Vec<Card>> {
    if size == 0 || group.len() < size {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut picked = Vec::with_capacity(size);
    collect_subsets(group, size, 0, &mut picked, &mut out);
    out
}

fn collect_subsets(
    group: &[Card],
    size: usize,
    start: usize,
    picked: &mut Vec<Card>,
    out: &mut Vec<Vec<Card>>,
) {
    if picked.len() == size {
        out.push(picked.clone());
        return;
    }
    for i in start..group.len() {
        picked.push(group[i]);
        collect_subsets(group, size, i + 1, picked, out);
        picked.pop();
    }
}

/// Ranks eligible for runs, ascending.
fn runnable_ranks(groups: &[Vec<Card>; 13], min_count: usize) -> Vec<Rank> {
    Rank::ORDERED
        .iter()
        .copied()
        .filter(|rank| rank.can_run() && groups[rank.index()].len() >= min_count)
        .collect()
}

/// Every window `[start, end]` of at least [`MIN_RUN`] consecutive ranks.
fn consecutive_windows(ranks: &[Rank]) -> Vec<&[Rank]> {
    let mut windows = Vec::new();
    for start in 0..ranks.len() {
        let mut end = start;
        while end + 1 < ranks.len() && ranks[end].successor() == Some(ranks[end + 1]) {
            end += 1;
            if end + 1 - start >= MIN_RUN {
                windows.push(&ranks[start..=end]);
            }
        }
    }
    windows
}

fn straights(groups: &[Vec<Card>; 13]) -> Vec<Combination> {
    let ranks = runnable_ranks(groups, 1);
    consecutive_windows(&ranks)
        .into_iter()
        .filter_map(|window| {
            let cards = window
                .iter()
                .filter_map(|rank| groups[rank.index()].last().copied())
                .collect();
            Combination::new(CombinationKind::Straight, cards)
        })
        .collect()
}

fn double_straights(groups: &[Vec<Card>; 13]) -> Vec<Combination> {
    let ranks = runnable_ranks(groups, 2);
    consecutive_windows(&ranks)
        .into_iter()
        .filter_map(|window| {
            let cards = window
                .iter()
                .flat_map(|rank| {
                    let group = &groups[rank.index()];
                    group[group.len() - 2..].iter().copied()
                })
                .collect();
            Combination::new(CombinationKind::DoubleStraight, cards)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{classify, find_all_combinations};
    use crate::combo::combination::CombinationKind;
    use crate::model::card::{Card, format_cards, parse_cards};

    fn cards(codes: &str) -> Vec<Card> {
        parse_cards(codes).unwrap()
    }

    fn of_kind(hand: &str, kind: CombinationKind) -> Vec<String> {
        find_all_combinations(&cards(hand))
            .into_iter()
            .filter(|combo| combo.kind() == kind)
            .map(|combo| format_cards(combo.cards()))
            .collect()
    }

    #[test]
    fn empty_hand_has_no_combinations() {
        assert!(find_all_combinations(&[]).is_empty());
        assert!(classify(&[]).is_none());
    }

    #[test]
    fn four_of_a_rank_yields_every_subset() {
        let hand = "8S 8C 8D 8H";
        assert_eq!(of_kind(hand, CombinationKind::Single).len(), 4);
        assert_eq!(of_kind(hand, CombinationKind::Pair).len(), 6);
        assert_eq!(of_kind(hand, CombinationKind::Triple).len(), 4);
        assert_eq!(of_kind(hand, CombinationKind::Quad), vec!["8S 8C 8D 8H"]);
    }

    #[test]
    fn straights_report_every_window() {
        let found = of_kind("3S 4S 5S 6S 9S", CombinationKind::Straight);
        assert_eq!(found, vec!["3S 4S 5S", "3S 4S 5S 6S", "4S 5S 6S"]);
    }

    #[test]
    fn straights_use_highest_suit_per_rank() {
        let found = of_kind("5S 5H 6C 7D 7S", CombinationKind::Straight);
        assert_eq!(found, vec!["5H 6C 7D"]);
    }

    #[test]
    fn twos_never_join_a_run() {
        assert_eq!(of_kind("QS KS AS 2S", CombinationKind::Straight), vec!["QS KS AS"]);
        assert!(of_kind("KS KH AS AH 2S 2H", CombinationKind::DoubleStraight).is_empty());
    }

    #[test]
    fn double_straights_need_three_paired_ranks() {
        assert!(of_kind("5S 5H 6S 6H", CombinationKind::DoubleStraight).is_empty());
        let found = of_kind("5S 5C 5H 6S 6H 7C 7D", CombinationKind::DoubleStraight);
        assert_eq!(found, vec!["5C 5H 6S 6H 7C 7D"]);
    }

    #[test]
    fn classify_recognises_exact_selection() {
        let combo = classify(&cards("7D 5C 6S 6H 5H 7C")).expect("double straight");
        assert_eq!(combo.kind(), CombinationKind::DoubleStraight);
        assert_eq!(classify(&cards("9H 9S")).unwrap().kind(), CombinationKind::Pair);
        assert_eq!(classify(&cards("JS QS KS AS")).unwrap().kind(), CombinationKind::Straight);
    }

    #[test]
    fn classify_rejects_non_combinations() {
        assert!(classify(&cards("3S 4S")).is_none());
        assert!(classify(&cards("3S 3C 4S")).is_none());
        assert!(classify(&cards("AS 2S 3S")).is_none());
        assert!(classify(&cards("3S 3S")).is_none());
    }
}
