use crate::roster::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Participant {0} appears more than once in the roster")]
    DuplicateParticipant(PlayerId),

    #[error("Expected round {expected} but found round {found}")]
    NonContiguousRound { expected: u32, found: u32 },

    #[error("Round {round} has half index 0")]
    InvalidHalf { round: u32 },

    #[error("Unknown round: {0}")]
    UnknownRound(u32),

    #[error("Unknown participant: {0}")]
    UnknownParticipant(PlayerId),
}

pub type Result<T> = std::result::Result<T, Error>;
