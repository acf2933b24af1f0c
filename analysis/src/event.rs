//! The ordered, append-only event stream of a match.

use crate::roster::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HitGroup {
    Generic,
    Head,
    Chest,
    Stomach,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    Gear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BombSite {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerDamage {
    pub attacker: Option<PlayerId>,
    pub victim: Option<PlayerId>,
    pub health_damage: u32,
    pub armor_damage: u32,
    pub hitgroup: HitGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerKill {
    pub killer: Option<PlayerId>,
    pub assister: Option<PlayerId>,
    pub victim: Option<PlayerId>,
    pub team_kill: bool,
    pub headshot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BombPlant {
    pub planter: Option<PlayerId>,
    pub site: BombSite,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BombDefuse {
    pub defuser: Option<PlayerId>,
    pub site: BombSite,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
    Damage(PlayerDamage),
    Kill(PlayerKill),
    BombPlant(BombPlant),
    BombDefuse(BombDefuse),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub round: u32,
    pub tick: u32,
    pub kind: EventKind,
}

impl Event {
    /// Every participant referenced by the event, skipping absent actors
    pub fn actors(&self) -> impl Iterator<Item = PlayerId> {
        let ids: [Option<PlayerId>; 3] = match &self.kind {
            EventKind::Damage(d) => [d.attacker, d.victim, None],
            EventKind::Kill(k) => [k.killer, k.assister, k.victim],
            EventKind::BombPlant(p) => [p.planter, None, None],
            EventKind::BombDefuse(d) => [d.defuser, None, None],
        };
        ids.into_iter().flatten()
    }
}

/// A kind specific payload together with the round and tick it happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<'e, T> {
    pub round: u32,
    pub tick: u32,
    pub event: &'e T,
}

impl<T> core::ops::Deref for Tagged<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.event
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> + Clone + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn project<T: 'static>(
        &self,
        select: fn(&EventKind) -> Option<&T>,
    ) -> impl Iterator<Item = Tagged<'_, T>> + Clone + '_ {
        self.events.iter().filter_map(move |e| {
            select(&e.kind).map(|event| Tagged {
                round: e.round,
                tick: e.tick,
                event,
            })
        })
    }

    pub fn damages(&self) -> impl Iterator<Item = Tagged<'_, PlayerDamage>> + Clone + '_ {
        self.project(|k| match k {
            EventKind::Damage(d) => Some(d),
            _ => None,
        })
    }

    pub fn kills(&self) -> impl Iterator<Item = Tagged<'_, PlayerKill>> + Clone + '_ {
        self.project(|k| match k {
            EventKind::Kill(d) => Some(d),
            _ => None,
        })
    }

    pub fn bomb_plants(&self) -> impl Iterator<Item = Tagged<'_, BombPlant>> + Clone + '_ {
        self.project(|k| match k {
            EventKind::BombPlant(d) => Some(d),
            _ => None,
        })
    }

    pub fn bomb_defuses(&self) -> impl Iterator<Item = Tagged<'_, BombDefuse>> + Clone + '_ {
        self.project(|k| match k {
            EventKind::BombDefuse(d) => Some(d),
            _ => None,
        })
    }
}

impl FromIterator<Event> for EventLog {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
