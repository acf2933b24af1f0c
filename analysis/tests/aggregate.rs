mod util;

use analysis::{aggregate, DeathlessRatio, EventLog};
use pretty_assertions::assert_eq;
use util::*;

#[test]
fn single_headshot_kill() {
    let log = EventLog::new(vec![headshot(1, A, B)]);

    assert_eq!(1, aggregate::kills(&log, A, None));
    assert_eq!(1, aggregate::deaths(&log, B, None));
    assert_eq!(1, aggregate::headshot_kills(&log, A, None));
    assert_eq!(1.0, aggregate::headshot_ratio(&log, A, None));
    assert_eq!(0, aggregate::deaths(&log, A, None));
}

#[test]
fn team_kill_is_penalized() {
    let log = EventLog::new(vec![team_kill(1, A, C)]);

    assert_eq!(-1, aggregate::kills(&log, A, None));
    assert_eq!(0, aggregate::headshot_kills(&log, A, None));
    assert_eq!(1, aggregate::deaths(&log, C, None));
}

#[test]
fn team_kill_penalty_is_additive() {
    let game = sample();
    let log = game.events();

    let without_team_kills: EventLog = log
        .iter()
        .filter(|e| !matches!(&e.kind, analysis::EventKind::Kill(k) if k.team_kill))
        .cloned()
        .collect();

    for player in [A, B, C, D] {
        let team_kills = log
            .kills()
            .filter(|k| k.killer == Some(player) && k.team_kill)
            .count() as i32;

        assert_eq!(
            aggregate::kills(&without_team_kills, player, None) - team_kills,
            aggregate::kills(log, player, None),
        );
    }
}

#[test]
fn kill_death_ratio_without_deaths() {
    let log = EventLog::new(vec![team_kill(1, A, C)]);

    assert_eq!(-1.0, aggregate::kill_death_ratio(&log, A, DeathlessRatio::Kills));
    assert_eq!(
        f32::NEG_INFINITY,
        aggregate::kill_death_ratio(&log, A, DeathlessRatio::Divide)
    );

    let empty = EventLog::default();
    assert_eq!(0.0, aggregate::kill_death_ratio(&empty, A, DeathlessRatio::Kills));
    assert!(aggregate::kill_death_ratio(&empty, A, DeathlessRatio::Divide).is_nan());
}

#[test]
fn kill_death_ratio_truncates() {
    let log = EventLog::new(vec![
        kill(1, Some(A), Some(B)),
        kill(2, Some(A), Some(D)),
        kill(2, Some(A), Some(B)),
        kill(3, Some(B), Some(A)),
        kill(4, Some(D), Some(A)),
    ]);

    assert_eq!(1.0, aggregate::kill_death_ratio(&log, A, DeathlessRatio::Kills));
    assert_eq!(1.0, aggregate::kill_death_ratio(&log, A, DeathlessRatio::Divide));

    // -3 / 2 rounds towards zero
    let log = EventLog::new(vec![
        team_kill(1, C, A),
        team_kill(2, C, A),
        team_kill(3, C, A),
        kill(3, Some(B), Some(C)),
        kill(4, Some(D), Some(C)),
    ]);
    assert_eq!(-1.0, aggregate::kill_death_ratio(&log, C, DeathlessRatio::Kills));
}

#[test]
fn assists_include_team_kills() {
    let mut tk = team_kill(2, B, D);
    if let analysis::EventKind::Kill(k) = &mut tk.kind {
        k.assister = Some(D);
    }
    let log = EventLog::new(vec![assisted(1, B, D, A), tk]);

    assert_eq!(2, aggregate::assists(&log, D, None));
    assert_eq!(1, aggregate::assists(&log, D, Some(2)));
    assert_eq!(0, aggregate::assists(&log, D, Some(3)));
}

#[test]
fn warmup_headshots_do_not_count() {
    let log = EventLog::new(vec![headshot(0, A, B), headshot(1, A, B)]);

    assert_eq!(2, aggregate::kills(&log, A, None));
    assert_eq!(1, aggregate::headshot_kills(&log, A, None));
    assert_eq!(0, aggregate::headshot_kills(&log, A, Some(0)));
    assert_eq!(0.5, aggregate::headshot_ratio(&log, A, None));
}

#[test]
fn headshot_ratio_stays_in_range() {
    let log = EventLog::new(vec![
        headshot(1, A, B),
        headshot(1, A, D),
        team_kill(1, A, C),
        team_kill(2, A, C),
        team_kill(2, A, C),
        headshot(2, B, A),
        kill(3, Some(B), Some(C)),
        team_kill(3, B, D),
    ]);

    // A: 2 headshots, net kills -1
    assert_eq!(0.0, aggregate::headshot_ratio(&log, A, None));
    // B: 1 headshot, net kills 1
    assert_eq!(1.0, aggregate::headshot_ratio(&log, B, None));
    assert_eq!(0.0, aggregate::headshot_ratio(&log, B, Some(3)));

    for player in [A, B, C, D] {
        let ratio = aggregate::headshot_ratio(&log, player, None);
        assert!((0.0..=1.0).contains(&ratio), "{} -> {}", player, ratio);
    }
}

#[test]
fn damage_sums_health_and_armor_separately() {
    let game = sample();
    let log = game.events();

    let total = aggregate::damage_dealt(log, A, None);
    assert_eq!(140, total.health);
    assert_eq!(12, total.armor);
    assert_eq!(152, total.total());

    assert_eq!(aggregate::DamageDealt::default(), aggregate::damage_dealt(log, A, Some(2)));
    assert_eq!(27, aggregate::damage_dealt(log, B, Some(2)).health);
}

#[test]
fn environment_damage_matches_nobody() {
    let log = EventLog::new(vec![damage(1, None, A, 50, 0), kill(1, None, Some(A))]);

    for player in [A, B, C, D] {
        assert_eq!(0, aggregate::damage_dealt(&log, player, None).total());
        assert_eq!(0, aggregate::kills(&log, player, None));
    }
    assert_eq!(1, aggregate::deaths(&log, A, None));
}

#[test]
fn average_damage_uses_fixed_divisor() {
    let log = EventLog::new(vec![damage(1, Some(A), B, 100, 50), damage(2, Some(A), B, 80, 70)]);

    assert_eq!(10.0, aggregate::average_damage_per_round(&log, A, 30.0));
    assert_eq!(0.0, aggregate::average_damage_per_round(&log, B, 30.0));
}

#[test]
fn bomb_events() {
    let game = sample();
    let log = game.events();

    assert!(aggregate::planted_bomb(log, B, 2));
    assert!(!aggregate::planted_bomb(log, B, 1));
    assert!(!aggregate::planted_bomb(log, C, 2));
    assert!(aggregate::defused_bomb(log, C, 2));
    assert!(!aggregate::defused_bomb(log, B, 2));

    assert_eq!(1, aggregate::bomb_plants(log, B, None));
    assert_eq!(0, aggregate::bomb_plants(log, B, Some(3)));
    assert_eq!(1, aggregate::bomb_defuses(log, C, None));
}

#[test]
fn died_in_round() {
    let game = sample();
    let log = game.events();

    assert!(!aggregate::died(log, A, 1));
    assert!(aggregate::died(log, A, 2));
    assert!(aggregate::died(log, D, 3));
}

#[test]
fn multi_kill_buckets() {
    let mut events = Vec::new();
    // one kill in round 1, two in round 2, three in round 3, five in round 4, six in round 5
    for (round, count) in [(1, 1), (2, 2), (3, 3), (4, 5), (5, 6), (6, 4)] {
        for _ in 0..count {
            events.push(kill(round, Some(A), Some(B)));
        }
    }
    events.push(team_kill(7, A, C));
    events.push(kill(7, Some(B), Some(A)));
    let log = EventLog::new(events);

    let buckets = aggregate::multi_kills(&log, A);
    assert_eq!(
        aggregate::MultiKills {
            single: 2,
            double: 1,
            triple: 1,
            quad: 1,
            ace: 2,
        },
        buckets
    );
    assert_eq!([2, 1, 1, 1, 2], buckets.as_array());

    let rounds_with_kills = log
        .kills()
        .filter(|k| k.killer == Some(A))
        .map(|k| k.round)
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    assert_eq!(rounds_with_kills, buckets.rounds());

    assert_eq!(aggregate::MultiKills::default(), aggregate::multi_kills(&log, D));
}
