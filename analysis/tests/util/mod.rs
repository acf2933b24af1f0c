#![allow(dead_code)]

use analysis::{
    event::{BombDefuse, BombPlant, BombSite, HitGroup, PlayerDamage, PlayerKill},
    Event, EventKind, EventLog, Match, MatchInfo, Participant, PlayerId, Roster, Round, RoundLog,
    Side, Team, WinReason,
};

pub const A: PlayerId = PlayerId(76561198000000001);
pub const B: PlayerId = PlayerId(76561198000000002);
pub const C: PlayerId = PlayerId(76561198000000003);
pub const D: PlayerId = PlayerId(76561198000000004);

pub fn participant(id: PlayerId, name: &str, team: Team) -> Participant {
    Participant {
        id,
        name: name.to_owned(),
        rank: 10,
        team,
    }
}

pub fn roster() -> Roster {
    Roster::new(vec![
        participant(A, "alpha", Team::One),
        participant(C, "charlie", Team::One),
        participant(B, "bravo", Team::Two),
        participant(D, "delta", Team::Two),
    ])
    .unwrap()
}

pub fn round(number: u32, half: u32, winning_side: Side) -> Round {
    Round {
        start_tick: number * 1000,
        end_tick: number * 1000 + 800,
        final_tick: number * 1000 + 900,
        number,
        win_reason: match winning_side {
            Side::Terrorist => WinReason::CTKilled,
            Side::CounterTerrorist => WinReason::TKilled,
        },
        winning_side,
        half,
    }
}

pub fn info() -> MatchInfo {
    MatchInfo {
        id: uuid::Uuid::nil(),
        map: "de_nuke".to_owned(),
        host: "Valve CS2 Server".to_owned(),
        tickrate: 64,
        server_tickrate: 64,
        team1_tag: "Alpha".to_owned(),
        team2_tag: "Bravo".to_owned(),
        team1_players: vec![A, C],
        team2_players: vec![B, D],
        play_time: 2400.0,
    }
}

pub fn kill(round: u32, killer: Option<PlayerId>, victim: Option<PlayerId>) -> Event {
    Event {
        round,
        tick: round * 1000 + 10,
        kind: EventKind::Kill(PlayerKill {
            killer,
            assister: None,
            victim,
            team_kill: false,
            headshot: false,
        }),
    }
}

pub fn headshot(round: u32, killer: PlayerId, victim: PlayerId) -> Event {
    let mut event = kill(round, Some(killer), Some(victim));
    if let EventKind::Kill(k) = &mut event.kind {
        k.headshot = true;
    }
    event
}

pub fn team_kill(round: u32, killer: PlayerId, victim: PlayerId) -> Event {
    let mut event = kill(round, Some(killer), Some(victim));
    if let EventKind::Kill(k) = &mut event.kind {
        k.team_kill = true;
    }
    event
}

pub fn assisted(round: u32, killer: PlayerId, assister: PlayerId, victim: PlayerId) -> Event {
    let mut event = kill(round, Some(killer), Some(victim));
    if let EventKind::Kill(k) = &mut event.kind {
        k.assister = Some(assister);
    }
    event
}

pub fn damage(round: u32, attacker: Option<PlayerId>, victim: PlayerId, health: u32, armor: u32) -> Event {
    Event {
        round,
        tick: round * 1000 + 5,
        kind: EventKind::Damage(PlayerDamage {
            attacker,
            victim: Some(victim),
            health_damage: health,
            armor_damage: armor,
            hitgroup: HitGroup::Chest,
        }),
    }
}

pub fn plant(round: u32, planter: PlayerId) -> Event {
    Event {
        round,
        tick: round * 1000 + 400,
        kind: EventKind::BombPlant(BombPlant {
            planter: Some(planter),
            site: BombSite::A,
        }),
    }
}

pub fn defuse(round: u32, defuser: PlayerId) -> Event {
    Event {
        round,
        tick: round * 1000 + 700,
        kind: EventKind::BombDefuse(BombDefuse {
            defuser: Some(defuser),
            site: BombSite::A,
        }),
    }
}

pub fn game(rounds: Vec<Round>, events: Vec<Event>) -> Match {
    Match::new(
        info(),
        roster(),
        RoundLog::new(rounds).unwrap(),
        EventLog::new(events),
    )
    .unwrap()
}

/// Three rounds in the first half, every event kind at least once
pub fn sample() -> Match {
    game(
        vec![
            round(1, 1, Side::CounterTerrorist),
            round(2, 1, Side::CounterTerrorist),
            round(3, 1, Side::Terrorist),
        ],
        vec![
            damage(1, Some(A), B, 100, 12),
            headshot(1, A, B),
            damage(1, Some(A), D, 40, 0),
            assisted(1, C, A, D),
            plant(2, B),
            damage(2, Some(B), A, 27, 5),
            kill(2, Some(B), Some(A)),
            defuse(2, C),
            team_kill(3, A, C),
            kill(3, None, Some(D)),
            kill(3, Some(D), Some(A)),
        ],
    )
}
