use std::collections::HashMap;

use crate::round::Team;

/// Steam id of a participant, the join key between the roster and every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct PlayerId(pub u64);

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Participant {
    pub id: PlayerId,
    pub name: String,
    pub rank: u8,
    /// Team the player was assigned to when joining the match
    pub team: Team,
}

/// All participants of one match, in the order they were handed over.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Participant>,
    index: HashMap<PlayerId, usize>,
}

impl Roster {
    pub fn new(players: Vec<Participant>) -> crate::Result<Self> {
        let mut index = HashMap::with_capacity(players.len());
        for (i, player) in players.iter().enumerate() {
            if index.insert(player.id, i).is_some() {
                return Err(crate::Error::DuplicateParticipant(player.id));
            }
        }

        Ok(Self { players, index })
    }

    pub fn get(&self, id: PlayerId) -> Option<&Participant> {
        self.index.get(&id).map(|i| &self.players[*i])
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
