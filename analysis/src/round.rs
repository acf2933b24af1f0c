use std::collections::BTreeMap;

/// Round number of events that happen before the first real round. Such events
/// need no Round Log entry and never count towards headshot kills.
pub const WARMUP_ROUND: u32 = 0;

/// Why a round ended, as reported by the game rules at the end of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum WinReason {
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

// Codes of `m_eRoundWinReason`, same numbering as demoinfocs' RoundEndReason
static ROUND_WIN_REASON: phf::Map<i32, WinReason> = phf::phf_map! {
    0_i32 => WinReason::StillInProgress,
    1_i32 => WinReason::BombExploded,
    2_i32 => WinReason::VipEscaped,
    3_i32 => WinReason::VipKilled,
    4_i32 => WinReason::TSaved,
    5_i32 => WinReason::CtStoppedEscape,
    6_i32 => WinReason::RoundEndReasonTerroristsStopped,
    7_i32 => WinReason::BombDefused,
    8_i32 => WinReason::TKilled,
    9_i32 => WinReason::CTKilled,
    10_i32 => WinReason::Draw,
    11_i32 => WinReason::HostageRescued,
    12_i32 => WinReason::TimeRanOut,
    13_i32 => WinReason::RoundEndReasonHostagesNotRescued,
    14_i32 => WinReason::TerroristsNotEscaped,
    15_i32 => WinReason::VipNotEscaped,
    16_i32 => WinReason::GameStart,
    17_i32 => WinReason::TSurrender,
    18_i32 => WinReason::CTSurrender,
    19_i32 => WinReason::TPlanted,
    20_i32 => WinReason::CTReachedHostage,
};

impl WinReason {
    /// Maps the engine's round end reason code. Codes outside `0..=20` are
    /// unknown to us and yield `None` rather than a fallback reason.
    pub fn from_code(code: i32) -> Option<Self> {
        ROUND_WIN_REASON.get(&code).copied()
    }

    /// Name of the round end as shown on the scoreboard
    pub fn label(&self) -> &'static str {
        match self {
            Self::StillInProgress => "StillInProgress",
            Self::BombExploded => "TargetBombed",
            Self::VipEscaped => "VIPEscaped",
            Self::VipKilled => "VIPKilled",
            Self::TSaved => "TerroristsEscaped",
            Self::CtStoppedEscape => "CTStoppedEscape",
            Self::RoundEndReasonTerroristsStopped => "TerroristsStopped",
            Self::BombDefused => "BombDefused",
            Self::TKilled => "CTWin",
            Self::CTKilled => "TerroristWin",
            Self::Draw => "Draw",
            Self::HostageRescued => "HostagesRescued",
            Self::TimeRanOut => "TargetSaved",
            Self::RoundEndReasonHostagesNotRescued => "HostagesNotRescued",
            Self::TerroristsNotEscaped => "TerroristsNotEscaped",
            Self::VipNotEscaped => "VIPNotEscaped",
            Self::GameStart => "GameStart",
            Self::TSurrender => "TerroristsSurrender",
            Self::CTSurrender => "CTSurrender",
            Self::TPlanted => "TerroristsPlanted",
            Self::CTReachedHostage => "CTsReachedHostage",
        }
    }
}

/// The faction played within a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Terrorist,
    CounterTerrorist,
}

impl Side {
    /// The side a team plays during the given half. Team one starts on the
    /// counter-terrorist side and the sides swap every half.
    pub fn for_team(team: Team, half: u32) -> Self {
        match (team, half % 2 != 0) {
            (Team::One, true) | (Team::Two, false) => Self::CounterTerrorist,
            (Team::One, false) | (Team::Two, true) => Self::Terrorist,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Terrorist => "T",
            Self::CounterTerrorist => "CT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn number(&self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    pub start_tick: u32,
    pub end_tick: u32,
    pub final_tick: u32,
    /// 1-based
    pub number: u32,
    pub win_reason: WinReason,
    pub winning_side: Side,
    pub half: u32,
}

impl Round {
    pub fn winning_team(&self) -> Team {
        if Side::for_team(Team::One, self.half) == self.winning_side {
            Team::One
        } else {
            Team::Two
        }
    }
}

/// The rounds of a match, numbered 1, 2, 3, ... without gaps.
#[derive(Debug, Clone, Default)]
pub struct RoundLog {
    rounds: Vec<Round>,
}

impl RoundLog {
    pub fn new(rounds: Vec<Round>) -> crate::Result<Self> {
        for (expected, round) in (1..).zip(rounds.iter()) {
            if round.number != expected {
                return Err(crate::Error::NonContiguousRound {
                    expected,
                    found: round.number,
                });
            }
            if round.half == 0 {
                return Err(crate::Error::InvalidHalf {
                    round: round.number,
                });
            }
        }

        Ok(Self { rounds })
    }

    pub fn get(&self, number: u32) -> Option<&Round> {
        let idx = usize::try_from(number.checked_sub(1)?).ok()?;
        self.rounds.get(idx)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.get(number).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> + '_ {
        self.rounds.iter()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of rounds won by the team over the whole match
    pub fn wins(&self, team: Team) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.winning_team() == team)
            .count()
    }

    /// Rounds won per half, ascending by half index. Every half present in the
    /// log gets an entry, even if the team did not win a single round in it.
    pub fn wins_by_half(&self, team: Team) -> Vec<usize> {
        let mut halves = BTreeMap::<u32, usize>::new();
        for round in self.rounds.iter() {
            let entry = halves.entry(round.half).or_default();
            if round.winning_team() == team {
                *entry += 1;
            }
        }

        halves.into_values().collect()
    }
}
