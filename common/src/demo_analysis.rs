#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchSummary {
    pub info: crate::MatchInfo,
    pub play_time: f32,
    pub teams: Vec<TeamSummary>,
    pub players: Vec<PlayerSummary>,
    pub rounds: Vec<RoundSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamSummary {
    pub tag: String,
    pub number: u32,
    pub final_score: usize,
    pub score_by_half: Vec<usize>,
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerSummary {
    pub steam_id: String,
    pub name: String,
    pub rank: u8,
    pub team: u32,
    pub kills: i32,
    pub assists: usize,
    pub deaths: usize,
    pub headshot_kills: usize,
    pub bomb_plants: usize,
    pub bomb_defuses: usize,
    pub damage_health: u64,
    pub damage_armor: u64,
    /// Rounds with 1, 2, 3, 4 and 5+ kills
    pub multi_kills: [usize; 5],
    pub kill_death_ratio: f32,
    pub average_damage_per_round: f64,
    pub headshot_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundSummary {
    pub number: u32,
    pub half: u32,
    pub start_tick: u32,
    pub end_tick: u32,
    pub final_tick: u32,
    pub reason: RoundWinReason,
    pub winning_side: String,
    pub winning_team: u32,
    pub players: Vec<RoundPlayerSummary>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoundPlayerSummary {
    pub steam_id: String,
    pub kills: i32,
    pub assists: usize,
    pub headshot_kills: usize,
    pub died: bool,
    pub planted_bomb: bool,
    pub defused_bomb: bool,
    pub damage_health: u64,
    pub damage_armor: u64,
    pub headshot_ratio: f64,
}

/// Serialized form of the round end reason; variant names are part of the
/// exported format.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundWinReason {
    StillInProgress,
    BombExploded,
    VipEscaped,
    VipKilled,
    TSaved,
    CtStoppedEscape,
    RoundEndReasonTerroristsStopped,
    BombDefused,
    TKilled,
    CTKilled,
    Draw,
    HostageRescued,
    TimeRanOut,
    RoundEndReasonHostagesNotRescued,
    TerroristsNotEscaped,
    VipNotEscaped,
    GameStart,
    TSurrender,
    CTSurrender,
    TPlanted,
    CTReachedHostage,
}
