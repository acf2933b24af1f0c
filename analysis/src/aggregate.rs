//! Pure queries over the event log.
//!
//! Every query takes the participant it is about and, where it makes sense,
//! an optional round filter (`None` meaning the whole match). Events whose
//! actor is absent never match a participant.

use std::collections::BTreeMap;

use crate::{config::DeathlessRatio, event::EventLog, roster::PlayerId, round::WARMUP_ROUND};

fn in_round(filter: Option<u32>, round: u32) -> bool {
    filter.map_or(true, |r| r == round)
}

/// Net kills, where a team kill counts as -1.
pub fn kills(log: &EventLog, player: PlayerId, round: Option<u32>) -> i32 {
    log.kills()
        .filter(|k| in_round(round, k.round) && k.killer == Some(player))
        .map(|k| if k.team_kill { -1 } else { 1 })
        .sum()
}

/// Assists on any kill, team kills included.
pub fn assists(log: &EventLog, player: PlayerId, round: Option<u32>) -> usize {
    log.kills()
        .filter(|k| in_round(round, k.round) && k.assister == Some(player))
        .count()
}

/// Headshot kills on enemies. Kills during warm-up never count.
pub fn headshot_kills(log: &EventLog, player: PlayerId, round: Option<u32>) -> usize {
    log.kills()
        .filter(|k| in_round(round, k.round) && k.killer == Some(player))
        .filter(|k| k.round != WARMUP_ROUND && k.headshot && !k.team_kill)
        .count()
}

pub fn deaths(log: &EventLog, player: PlayerId, round: Option<u32>) -> usize {
    log.kills()
        .filter(|k| in_round(round, k.round) && k.victim == Some(player))
        .count()
}

pub fn died(log: &EventLog, player: PlayerId, round: u32) -> bool {
    deaths(log, player, Some(round)) > 0
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DamageDealt {
    pub health: u64,
    pub armor: u64,
}

impl DamageDealt {
    pub fn total(&self) -> u64 {
        self.health + self.armor
    }
}

pub fn damage_dealt(log: &EventLog, player: PlayerId, round: Option<u32>) -> DamageDealt {
    log.damages()
        .filter(|d| in_round(round, d.round) && d.attacker == Some(player))
        .fold(DamageDealt::default(), |acc, d| DamageDealt {
            health: acc.health + u64::from(d.health_damage),
            armor: acc.armor + u64::from(d.armor_damage),
        })
}

pub fn bomb_plants(log: &EventLog, player: PlayerId, round: Option<u32>) -> usize {
    log.bomb_plants()
        .filter(|p| in_round(round, p.round) && p.planter == Some(player))
        .count()
}

pub fn bomb_defuses(log: &EventLog, player: PlayerId, round: Option<u32>) -> usize {
    log.bomb_defuses()
        .filter(|d| in_round(round, d.round) && d.defuser == Some(player))
        .count()
}

pub fn planted_bomb(log: &EventLog, player: PlayerId, round: u32) -> bool {
    log.bomb_plants()
        .any(|p| p.round == round && p.planter == Some(player))
}

pub fn defused_bomb(log: &EventLog, player: PlayerId, round: u32) -> bool {
    log.bomb_defuses()
        .any(|d| d.round == round && d.defuser == Some(player))
}

fn ratio(headshot_kills: usize, kills: i32) -> f64 {
    if headshot_kills == 0 || kills <= 0 {
        return 0.0;
    }

    (headshot_kills as f64 / kills as f64).min(1.0)
}

/// Share of kills that were headshots, always within `[0, 1]`.
pub fn headshot_ratio(log: &EventLog, player: PlayerId, round: Option<u32>) -> f64 {
    ratio(
        headshot_kills(log, player, round),
        kills(log, player, round),
    )
}

/// Number of rounds in which a player got exactly 1, 2, 3, 4 or at least 5 kills.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MultiKills {
    pub single: usize,
    pub double: usize,
    pub triple: usize,
    pub quad: usize,
    pub ace: usize,
}

impl MultiKills {
    pub fn as_array(&self) -> [usize; 5] {
        [self.single, self.double, self.triple, self.quad, self.ace]
    }

    /// Rounds with at least one kill
    pub fn rounds(&self) -> usize {
        self.as_array().iter().sum()
    }
}

/// Buckets the rounds of the match by the number of kill events the player
/// was the killer of. Team kills count as a kill here.
pub fn multi_kills(log: &EventLog, player: PlayerId) -> MultiKills {
    let mut per_round = BTreeMap::<u32, usize>::new();
    for kill in log.kills().filter(|k| k.killer == Some(player)) {
        *per_round.entry(kill.round).or_default() += 1;
    }

    per_round
        .into_values()
        .fold(MultiKills::default(), |mut acc, count| {
            match count {
                0 => {}
                1 => acc.single += 1,
                2 => acc.double += 1,
                3 => acc.triple += 1,
                4 => acc.quad += 1,
                _ => acc.ace += 1,
            };
            acc
        })
}

/// Total damage over a fixed divisor, independent of the rounds played.
pub fn average_damage_per_round(log: &EventLog, player: PlayerId, divisor: f64) -> f64 {
    damage_dealt(log, player, None).total() as f64 / divisor
}

/// Whole kills per death. The division truncates towards zero before the
/// result is widened, so 3 kills over 2 deaths is 1.0.
pub fn kill_death_ratio(log: &EventLog, player: PlayerId, deathless: DeathlessRatio) -> f32 {
    let kills = kills(log, player, None);
    let deaths = deaths(log, player, None);

    match (deaths, deathless) {
        (0, DeathlessRatio::Kills) => kills as f32,
        (0, DeathlessRatio::Divide) => kills as f32 / 0.0,
        (deaths, _) => (kills / deaths as i32) as f32,
    }
}
