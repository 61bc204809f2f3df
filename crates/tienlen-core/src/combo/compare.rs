use crate::combo::combination::{Combination, CombinationKind};
use crate::model::rank::Rank;

/// Whether `candidate` may legally be played on top of `target`.
///
/// Plays of the same kind and size compare by strength, strictly. Across
/// kinds only the bombs apply: a quad or a three-pair double straight on a
/// single two, a four-pair double straight on a pair of twos and a
/// five-pair double straight on three twos.
pub fn can_beat(candidate: &Combination, target: &Combination) -> bool {
    if candidate.kind() == target.kind() && candidate.len() == target.len() {
        return candidate.strength() > target.strength();
    }
    is_bomb_over(candidate, target)
}

fn is_bomb_over(candidate: &Combination, target: &Combination) -> bool {
    if !target.all_rank(Rank::Two) {
        return false;
    }
    match (candidate.kind(), target.kind()) {
        (CombinationKind::Quad, CombinationKind::Single) => true,
        (CombinationKind::DoubleStraight, CombinationKind::Single) => candidate.len() == 6,
        (CombinationKind::DoubleStraight, CombinationKind::Pair) => candidate.len() == 8,
        (CombinationKind::DoubleStraight, CombinationKind::Triple) => candidate.len() == 10,
        _ => false,
    }
}
