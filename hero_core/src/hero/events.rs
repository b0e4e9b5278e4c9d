//! Hero change notifications

use crate::types::{EntityRef, HeroId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Change event emitted by a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeroEvent {
    LevelChanged { old: u32, new: u32 },
    /// HP dropped to zero or below; carries the last attacker, if any
    Death { attacker: Option<EntityRef> },
    /// Fired before the new HP is stored
    Revived,
}

/// Handle returned by [`Hero::add_listener`](super::Hero::add_listener)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(HeroId, &HeroEvent)>;

/// Registered listeners of one hero, called in registration order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, source: HeroId, event: &HeroEvent) {
        for (_, callback) in self.entries.iter_mut() {
            callback(source, event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
