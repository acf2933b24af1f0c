//! Export of every computed view into the plain data types of [`common`].

use common::demo_analysis::{
    MatchSummary, PlayerSummary, RoundPlayerSummary, RoundSummary, RoundWinReason, TeamSummary,
};

use crate::{
    game::{Match, PlayerTotals, RoundPlayer},
    round::{Round, Team, WinReason},
};

impl From<WinReason> for RoundWinReason {
    fn from(value: WinReason) -> Self {
        match value {
            WinReason::StillInProgress => Self::StillInProgress,
            WinReason::BombExploded => Self::BombExploded,
            WinReason::VipEscaped => Self::VipEscaped,
            WinReason::VipKilled => Self::VipKilled,
            WinReason::TSaved => Self::TSaved,
            WinReason::CtStoppedEscape => Self::CtStoppedEscape,
            WinReason::RoundEndReasonTerroristsStopped => Self::RoundEndReasonTerroristsStopped,
            WinReason::BombDefused => Self::BombDefused,
            WinReason::TKilled => Self::TKilled,
            WinReason::CTKilled => Self::CTKilled,
            WinReason::Draw => Self::Draw,
            WinReason::HostageRescued => Self::HostageRescued,
            WinReason::TimeRanOut => Self::TimeRanOut,
            WinReason::RoundEndReasonHostagesNotRescued => Self::RoundEndReasonHostagesNotRescued,
            WinReason::TerroristsNotEscaped => Self::TerroristsNotEscaped,
            WinReason::VipNotEscaped => Self::VipNotEscaped,
            WinReason::GameStart => Self::GameStart,
            WinReason::TSurrender => Self::TSurrender,
            WinReason::CTSurrender => Self::CTSurrender,
            WinReason::TPlanted => Self::TPlanted,
            WinReason::CTReachedHostage => Self::CTReachedHostage,
        }
    }
}

impl Match {
    pub fn summary(&self) -> MatchSummary {
        let teams = [Team::One, Team::Two]
            .into_iter()
            .map(|team| TeamSummary {
                tag: self.team_tag(team).to_owned(),
                number: team.number(),
                final_score: self.final_score(team),
                score_by_half: self.score_by_half(team),
                players: self
                    .team_players(team)
                    .iter()
                    .map(|id| id.to_string())
                    .collect(),
            })
            .collect();

        let players = self.players().map(player_summary).collect();

        let rounds = self
            .rounds()
            .iter()
            .map(|round| self.round_summary(round))
            .collect();

        MatchSummary {
            info: common::MatchInfo {
                id: self.info.id.to_string(),
                map: self.info.map.clone(),
                host: self.info.host.clone(),
                tickrate: self.info.tickrate,
                server_tickrate: self.info.server_tickrate,
            },
            play_time: self.info.play_time,
            teams,
            players,
            rounds,
        }
    }

    fn round_summary(&self, round: &Round) -> RoundSummary {
        let _tracing_guard = tracing::debug_span!("Round", number = round.number).entered();

        let players = self
            .roster()
            .iter()
            .map(|participant| round_player_summary(RoundPlayer::new(self, participant, round)))
            .collect();

        RoundSummary {
            number: round.number,
            half: round.half,
            start_tick: round.start_tick,
            end_tick: round.end_tick,
            final_tick: round.final_tick,
            reason: round.win_reason.into(),
            winning_side: round.winning_side.label().to_owned(),
            winning_team: round.winning_team().number(),
            players,
        }
    }
}

fn player_summary(totals: PlayerTotals<'_>) -> PlayerSummary {
    let participant = totals.participant();
    let _tracing_guard = tracing::debug_span!("Player", id = %participant.id).entered();

    let damage = totals.damage();
    let summary = PlayerSummary {
        steam_id: participant.id.to_string(),
        name: participant.name.clone(),
        rank: participant.rank,
        team: participant.team.number(),
        kills: totals.kills(),
        assists: totals.assists(),
        deaths: totals.deaths(),
        headshot_kills: totals.headshot_kills(),
        bomb_plants: totals.bomb_plants(),
        bomb_defuses: totals.bomb_defuses(),
        damage_health: damage.health,
        damage_armor: damage.armor,
        multi_kills: totals.multi_kills().as_array(),
        kill_death_ratio: totals.kill_death_ratio(),
        average_damage_per_round: totals.average_damage_per_round(),
        headshot_ratio: totals.headshot_ratio(),
    };

    tracing::trace!(?summary, "Player totals");

    summary
}

fn round_player_summary(player: RoundPlayer<'_>) -> RoundPlayerSummary {
    let damage = player.damage();

    RoundPlayerSummary {
        steam_id: player.participant().id.to_string(),
        kills: player.kills(),
        assists: player.assists(),
        headshot_kills: player.headshot_kills(),
        died: player.died(),
        planted_bomb: player.planted_bomb(),
        defused_bomb: player.defused_bomb(),
        damage_health: damage.health,
        damage_armor: damage.armor,
        headshot_ratio: player.headshot_ratio(),
    }
}
