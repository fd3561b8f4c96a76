//! Dodge rule.

use crate::moves::{AttackPosition, DefensePosition};

/// Check if an attack thrown from `attack` is evaded by `defense`.
///
/// | defense            | dodges when        |
/// |--------------------|--------------------|
/// | none               | never              |
/// | forward / backward | never              |
/// | left               | attack is left     |
/// | right              | attack is not left |
pub fn did_dodge(attack: AttackPosition, defense: Option<DefensePosition>) -> bool {
    match defense {
        None | Some(DefensePosition::Forward | DefensePosition::Backward) => false,
        Some(DefensePosition::Left) => attack.is_left(),
        Some(DefensePosition::Right) => !attack.is_left(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn dodges_only_on_matching_lateral_side() {
        for attack in AttackPosition::iter() {
            for defense in DefensePosition::iter() {
                let expected = matches!(
                    (defense, attack),
                    (DefensePosition::Left, AttackPosition::Left)
                        | (DefensePosition::Right, AttackPosition::Right)
                );
                assert_eq!(did_dodge(attack, Some(defense)), expected, "{attack} vs {defense}");
            }
            assert!(!did_dodge(attack, None));
        }
    }
}
