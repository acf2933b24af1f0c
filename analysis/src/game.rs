//! The match facade tying roster, rounds and events together.

use crate::{
    aggregate::{self, DamageDealt, MultiKills},
    config::Config,
    event::EventLog,
    roster::{Participant, PlayerId, Roster},
    round::{Round, RoundLog, Team, WARMUP_ROUND},
    Error,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchInfo {
    pub id: uuid::Uuid,
    pub map: String,
    pub host: String,
    pub tickrate: u8,
    pub server_tickrate: u8,
    pub team1_tag: String,
    pub team2_tag: String,
    pub team1_players: Vec<PlayerId>,
    pub team2_players: Vec<PlayerId>,
    /// Seconds
    pub play_time: f32,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub info: MatchInfo,
    roster: Roster,
    rounds: RoundLog,
    events: EventLog,
    config: Config,
}

impl Match {
    /// Checks that every round and participant referenced by the inputs exists.
    #[tracing::instrument(name = "Match", skip_all, fields(map = %info.map))]
    pub fn new(
        info: MatchInfo,
        roster: Roster,
        rounds: RoundLog,
        events: EventLog,
    ) -> crate::Result<Self> {
        for id in info.team1_players.iter().chain(info.team2_players.iter()) {
            if !roster.contains(*id) {
                tracing::error!(player = %id, "Team member missing from roster");
                return Err(Error::UnknownParticipant(*id));
            }
        }

        for event in events.iter() {
            if event.round != WARMUP_ROUND && !rounds.contains(event.round) {
                tracing::error!(round = event.round, tick = event.tick, "Event in unknown round");
                return Err(Error::UnknownRound(event.round));
            }

            if let Some(id) = event.actors().find(|id| !roster.contains(*id)) {
                tracing::error!(player = %id, tick = event.tick, "Event references unknown player");
                return Err(Error::UnknownParticipant(id));
            }
        }

        tracing::debug!(
            players = roster.len(),
            rounds = rounds.len(),
            events = events.len(),
            "Validated match"
        );

        Ok(Self {
            info,
            roster,
            rounds,
            events,
            config: Config::default(),
        })
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn rounds(&self) -> &RoundLog {
        &self.rounds
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn team_tag(&self, team: Team) -> &str {
        match team {
            Team::One => &self.info.team1_tag,
            Team::Two => &self.info.team2_tag,
        }
    }

    pub fn team_players(&self, team: Team) -> &[PlayerId] {
        match team {
            Team::One => &self.info.team1_players,
            Team::Two => &self.info.team2_players,
        }
    }

    pub fn final_score(&self, team: Team) -> usize {
        self.rounds.wins(team)
    }

    pub fn score_by_half(&self, team: Team) -> Vec<usize> {
        self.rounds.wins_by_half(team)
    }

    pub fn participant(&self, player: PlayerId) -> crate::Result<&Participant> {
        self.roster
            .get(player)
            .ok_or(Error::UnknownParticipant(player))
    }

    pub fn round(&self, number: u32) -> crate::Result<&Round> {
        self.rounds.get(number).ok_or(Error::UnknownRound(number))
    }

    pub fn round_player(&self, player: PlayerId, round: u32) -> crate::Result<RoundPlayer<'_>> {
        Ok(RoundPlayer::new(
            self,
            self.participant(player)?,
            self.round(round)?,
        ))
    }

    /// One view per roster participant, in roster order.
    pub fn round_players(
        &self,
        round: u32,
    ) -> crate::Result<impl Iterator<Item = RoundPlayer<'_>> + '_> {
        let round = self.round(round)?;
        Ok(self
            .roster
            .iter()
            .map(move |participant| RoundPlayer::new(self, participant, round)))
    }

    pub fn player_totals(&self, player: PlayerId) -> crate::Result<PlayerTotals<'_>> {
        Ok(PlayerTotals {
            game: self,
            participant: self.participant(player)?,
        })
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerTotals<'_>> + '_ {
        self.roster
            .iter()
            .map(move |participant| PlayerTotals { game: self, participant })
    }
}

/// Statistics of one participant within one round, computed on every call.
#[derive(Debug, Clone, Copy)]
pub struct RoundPlayer<'m> {
    game: &'m Match,
    participant: &'m Participant,
    round: &'m Round,
}

impl<'m> RoundPlayer<'m> {
    pub(crate) fn new(game: &'m Match, participant: &'m Participant, round: &'m Round) -> Self {
        Self {
            game,
            participant,
            round,
        }
    }

    pub fn participant(&self) -> &'m Participant {
        self.participant
    }

    pub fn round(&self) -> &'m Round {
        self.round
    }

    fn scope(&self) -> (&'m EventLog, PlayerId, u32) {
        (&self.game.events, self.participant.id, self.round.number)
    }

    pub fn planted_bomb(&self) -> bool {
        let (log, id, round) = self.scope();
        aggregate::planted_bomb(log, id, round)
    }

    pub fn defused_bomb(&self) -> bool {
        let (log, id, round) = self.scope();
        aggregate::defused_bomb(log, id, round)
    }

    pub fn kills(&self) -> i32 {
        let (log, id, round) = self.scope();
        aggregate::kills(log, id, Some(round))
    }

    pub fn assists(&self) -> usize {
        let (log, id, round) = self.scope();
        aggregate::assists(log, id, Some(round))
    }

    pub fn headshot_kills(&self) -> usize {
        let (log, id, round) = self.scope();
        aggregate::headshot_kills(log, id, Some(round))
    }

    pub fn died(&self) -> bool {
        let (log, id, round) = self.scope();
        aggregate::died(log, id, round)
    }

    pub fn damage(&self) -> DamageDealt {
        let (log, id, round) = self.scope();
        aggregate::damage_dealt(log, id, Some(round))
    }

    pub fn total_damage_health(&self) -> u64 {
        self.damage().health
    }

    pub fn total_damage_armor(&self) -> u64 {
        self.damage().armor
    }

    pub fn headshot_ratio(&self) -> f64 {
        let (log, id, round) = self.scope();
        aggregate::headshot_ratio(log, id, Some(round))
    }
}

/// Match wide statistics of one participant, computed on every call.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTotals<'m> {
    game: &'m Match,
    participant: &'m Participant,
}

impl<'m> PlayerTotals<'m> {
    pub fn participant(&self) -> &'m Participant {
        self.participant
    }

    fn log(&self) -> &'m EventLog {
        &self.game.events
    }

    pub fn kills(&self) -> i32 {
        aggregate::kills(self.log(), self.participant.id, None)
    }

    pub fn assists(&self) -> usize {
        aggregate::assists(self.log(), self.participant.id, None)
    }

    pub fn headshot_kills(&self) -> usize {
        aggregate::headshot_kills(self.log(), self.participant.id, None)
    }

    pub fn deaths(&self) -> usize {
        aggregate::deaths(self.log(), self.participant.id, None)
    }

    pub fn bomb_plants(&self) -> usize {
        aggregate::bomb_plants(self.log(), self.participant.id, None)
    }

    pub fn bomb_defuses(&self) -> usize {
        aggregate::bomb_defuses(self.log(), self.participant.id, None)
    }

    pub fn damage(&self) -> DamageDealt {
        aggregate::damage_dealt(self.log(), self.participant.id, None)
    }

    pub fn total_damage_health(&self) -> u64 {
        self.damage().health
    }

    pub fn total_damage_armor(&self) -> u64 {
        self.damage().armor
    }

    pub fn multi_kills(&self) -> MultiKills {
        aggregate::multi_kills(self.log(), self.participant.id)
    }

    pub fn kill_death_ratio(&self) -> f32 {
        aggregate::kill_death_ratio(
            self.log(),
            self.participant.id,
            self.game.config.deathless_ratio,
        )
    }

    pub fn average_damage_per_round(&self) -> f64 {
        aggregate::average_damage_per_round(
            self.log(),
            self.participant.id,
            self.game.config.adr_divisor,
        )
    }

    pub fn headshot_ratio(&self) -> f64 {
        aggregate::headshot_ratio(self.log(), self.participant.id, None)
    }
}
