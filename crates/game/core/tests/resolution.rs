use game_core::{
    Attack, AttackPosition, Defense, DefensePosition, FireState, Health, Loadout, MoveId,
    MoveState, Outcome, Round, Side, apply_damage, resolve, total_damage,
};

fn id(name: &str) -> MoveId {
    MoveId::new(name).unwrap()
}

fn attack(position: AttackPosition, damage: f64) -> Attack {
    Attack::new(id("punch"), position, damage, 2)
}

fn defense(position: DefensePosition) -> Defense {
    Defense::new(id("dash"), position, 1)
}

/// Builds a loadout with the given moves, selecting the first of each.
fn selecting(attack: Option<Attack>, defense: Option<Defense>) -> Loadout {
    let mut loadout = Loadout::new(attack, defense).unwrap();
    if attack.is_some() {
        loadout.select_attack(0).unwrap();
    }
    if defense.is_some() {
        loadout.select_defense(0).unwrap();
    }
    loadout
}

#[test]
fn no_attack_regardless_of_defender() {
    let attacker = selecting(None, Some(defense(DefensePosition::Forward)));

    for defender in [
        selecting(None, None),
        selecting(Some(attack(AttackPosition::Left, 50.0)), None),
        selecting(None, Some(defense(DefensePosition::Left))),
        selecting(None, Some(defense(DefensePosition::Backward))),
    ] {
        assert_eq!(resolve(&attacker, &defender, 0.0, 1.0), Outcome::NoAttack);
        assert_eq!(resolve(&attacker, &defender, 100.0, 1.0), Outcome::NoAttack);
    }
}

#[test]
fn unselected_attacks_do_not_count() {
    // The attack exists but was never selected.
    let attacker = Loadout::new([attack(AttackPosition::Right, 30.0)], []).unwrap();
    let defender = selecting(None, None);

    assert_eq!(resolve(&attacker, &defender, 10.0, 1.0), Outcome::NoAttack);
}

#[test]
fn left_attack_against_right_defense_lands() {
    let attacker = selecting(Some(attack(AttackPosition::Left, 20.0)), None);
    let defender = selecting(None, Some(defense(DefensePosition::Right)));

    assert_eq!(resolve(&attacker, &defender, 15.0, 1.0), Outcome::Kill(20.0));
    assert_eq!(resolve(&attacker, &defender, 50.0, 1.0), Outcome::Damage(20.0));
}

#[test]
fn matching_lateral_defense_misses_regardless_of_damage() {
    for damage in [0.0, 5.0, 1_000.0] {
        let left = selecting(Some(attack(AttackPosition::Left, damage)), None);
        let right = selecting(Some(attack(AttackPosition::Right, damage)), None);

        let dodge_left = selecting(None, Some(defense(DefensePosition::Left)));
        let dodge_right = selecting(None, Some(defense(DefensePosition::Right)));

        assert_eq!(resolve(&left, &dodge_left, 1.0, 1.0), Outcome::Miss);
        assert_eq!(resolve(&right, &dodge_right, 1.0, 1.0), Outcome::Miss);
    }
}

#[test]
fn frontal_and_absent_defenses_never_dodge() {
    for position in [AttackPosition::Left, AttackPosition::Right] {
        let attacker = selecting(Some(attack(position, 10.0)), None);
        for defender in [
            selecting(None, None),
            selecting(None, Some(defense(DefensePosition::Forward))),
            selecting(None, Some(defense(DefensePosition::Backward))),
        ] {
            assert!(resolve(&attacker, &defender, 100.0, 1.0).landed());
        }
    }
}

#[test]
fn damage_equal_to_health_is_a_kill() {
    let attacker = selecting(Some(attack(AttackPosition::Right, 25.0)), None);
    let defender = selecting(None, None);

    assert_eq!(resolve(&attacker, &defender, 25.0, 1.0), Outcome::Kill(25.0));
    assert_eq!(resolve(&attacker, &defender, 25.5, 1.0), Outcome::Damage(25.0));
    assert_eq!(resolve(&attacker, &defender, 0.0, 1.0), Outcome::Kill(25.0));
}

#[test]
fn landed_attack_for_zero_is_damage_not_miss() {
    let attacker = selecting(Some(attack(AttackPosition::Left, 20.0)), None);
    let absorb = defense(DefensePosition::Forward).with_incoming_damage_multiplier(0.0);
    let defender = selecting(None, Some(absorb));
    assert_eq!(resolve(&attacker, &defender, 50.0, 1.0), Outcome::Damage(0.0));

    let open = selecting(None, None);
    assert_eq!(resolve(&attacker, &open, 50.0, 0.0), Outcome::Damage(0.0));

    let feint = selecting(Some(attack(AttackPosition::Right, 0.0)), None);
    let outcome = resolve(&feint, &open, 50.0, 1.0);
    assert_eq!(outcome, Outcome::Damage(0.0));
    assert!(outcome.landed());
    assert_eq!(Health::full(50.0).after(&outcome), Health::full(50.0));
}

#[test]
fn multipliers_stack_additively_then_scale() {
    let boosted = attack(AttackPosition::Left, 10.0).with_fire(FireState::Boosted(1.5));
    let counter = defense(DefensePosition::Forward).with_damage_multiplier(2.0);
    let attacker = selecting(Some(boosted), Some(counter));

    let guard = defense(DefensePosition::Backward).with_incoming_damage_multiplier(0.5);
    let defender = selecting(None, Some(guard));

    // base 10 + defend delta 10 + fire delta 5 = 25, halved = 12.5, × 0.8
    assert_eq!(total_damage(&attacker, &defender, 1.0), 12.5);
    assert_eq!(total_damage(&attacker, &defender, 0.8), 10.0);
    assert_eq!(resolve(&attacker, &defender, 100.0, 0.8), Outcome::Damage(10.0));
}

#[test]
fn damage_is_monotonic_in_each_input() {
    let defender_with = |incoming: f64| {
        selecting(
            None,
            Some(defense(DefensePosition::Backward).with_incoming_damage_multiplier(incoming)),
        )
    };
    let attacker_with = |base: f64, fire: f64, own: f64| {
        selecting(
            Some(attack(AttackPosition::Left, base).with_fire(FireState::Boosted(fire))),
            Some(defense(DefensePosition::Forward).with_damage_multiplier(own)),
        )
    };

    let steps = [0.0, 0.5, 1.0, 1.25, 2.0, 3.0];
    let neutral = defender_with(1.0);
    for pair in steps.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);

        assert!(
            total_damage(&attacker_with(lo * 10.0, 1.0, 1.0), &neutral, 1.0)
                <= total_damage(&attacker_with(hi * 10.0, 1.0, 1.0), &neutral, 1.0)
        );
        assert!(
            total_damage(&attacker_with(10.0, lo, 1.0), &neutral, 1.0)
                <= total_damage(&attacker_with(10.0, hi, 1.0), &neutral, 1.0)
        );
        assert!(
            total_damage(&attacker_with(10.0, 1.0, lo), &neutral, 1.0)
                <= total_damage(&attacker_with(10.0, 1.0, hi), &neutral, 1.0)
        );

        // Stronger mitigation (lower incoming multiplier) never yields more damage.
        let attacker = attacker_with(10.0, 1.0, 1.0);
        assert!(
            total_damage(&attacker, &defender_with(lo), 1.0)
                <= total_damage(&attacker, &defender_with(hi), 1.0)
        );
    }
}

#[test]
fn resolution_is_deterministic() {
    let attacker = selecting(
        Some(attack(AttackPosition::Right, 17.0).with_fire(FireState::Boosted(1.2))),
        Some(defense(DefensePosition::Forward).with_damage_multiplier(1.3)),
    );
    let defender = selecting(
        None,
        Some(defense(DefensePosition::Left).with_incoming_damage_multiplier(0.7)),
    );

    let first = resolve(&attacker, &defender, 30.0, 0.9);
    for _ in 0..100 {
        assert_eq!(resolve(&attacker, &defender, 30.0, 0.9), first);
    }
}

#[test]
fn exchange_reduces_only_the_second_attacker() {
    let player = selecting(Some(attack(AttackPosition::Left, 20.0)), None);
    let opponent = selecting(Some(attack(AttackPosition::Right, 20.0)), None);

    let round = Round::first(player.clone(), opponent.clone(), true);
    let exchange = round.resolve_exchange(100.0, 100.0, 0.5);
    assert_eq!(exchange.first_striker, Some(Side::Player));
    assert_eq!(exchange.player, Outcome::Damage(20.0));
    assert_eq!(exchange.opponent, Outcome::Damage(10.0));
    assert_eq!(exchange.order(), [Side::Player, Side::Opponent]);

    let round = Round::first(player, opponent, false);
    let exchange = round.resolve_exchange(100.0, 100.0, 0.5);
    assert_eq!(exchange.first_striker, Some(Side::Opponent));
    assert_eq!(exchange.by(Side::Player), Outcome::Damage(10.0));
    assert_eq!(exchange.by(Side::Opponent), Outcome::Damage(20.0));
}

#[test]
fn lone_attacker_is_never_reduced() {
    let player = selecting(None, Some(defense(DefensePosition::Forward)));
    let opponent = selecting(Some(attack(AttackPosition::Left, 40.0)), None);

    let exchange = Round::first(player, opponent, true).resolve_exchange(30.0, 100.0, 0.5);
    assert_eq!(exchange.first_striker, None);
    assert_eq!(exchange.player, Outcome::NoAttack);
    assert_eq!(exchange.opponent, Outcome::Kill(40.0));
}

#[test]
fn health_applies_outcomes_and_clamps() {
    let health = Health::full(50.0);

    assert_eq!(health.after(&Outcome::Miss), health);
    assert_eq!(health.after(&Outcome::Damage(20.0)).current, 30.0);

    let dead = health.after(&Outcome::Kill(80.0));
    assert_eq!(dead.current, 0.0);
    assert!(dead.is_defeated());
    assert_eq!(dead.fraction(), 0.0);

    assert_eq!(apply_damage(10.0, 4.0), 6.0);
    assert_eq!(Health { current: 5.0, max: 0.0 }.fraction(), 0.0);
}

#[test]
fn full_round_lifecycle() {
    let catalog = Loadout::new(
        [
            Attack::new(id("jab-left"), AttackPosition::Left, 10.0, 1),
            Attack::new(id("cross-right"), AttackPosition::Right, 18.0, 3),
        ],
        [
            Defense::new(id("dash-left"), DefensePosition::Left, 1),
            Defense::new(id("dash-back"), DefensePosition::Backward, 2)
                .with_incoming_damage_multiplier(0.5),
        ],
    )
    .unwrap();

    let mut round = Round::first(catalog.clone(), catalog, true);
    round.loadout_mut(Side::Player).select_attack(1).unwrap();
    round.loadout_mut(Side::Opponent).select_defense(1).unwrap();

    let exchange = round.resolve_exchange(100.0, 100.0, 1.0);
    assert_eq!(exchange.player, Outcome::Damage(9.0));
    assert_eq!(exchange.opponent, Outcome::NoAttack);

    let next = round.derive_next(false);
    assert_eq!(next.number(), 2);
    assert_eq!(
        next.loadout(Side::Player).attacks()[1].state,
        MoveState::Cooldown(3)
    );
    assert_eq!(next.loadout(Side::Player).attacks()[0].state, MoveState::Initial);
    assert_eq!(
        next.loadout(Side::Opponent).defenses()[1].state,
        MoveState::Cooldown(2)
    );

    // Cross is unavailable for three more rounds, then returns.
    let mut round = next;
    for expected in [2, 1] {
        round = round.derive_next(false);
        assert_eq!(
            round.loadout(Side::Player).attacks()[1].state,
            MoveState::Cooldown(expected)
        );
    }
    round = round.derive_next(false);
    assert!(round.loadout(Side::Player).attacks()[1].state.is_selectable());
    assert_eq!(round.number(), 5);
}
