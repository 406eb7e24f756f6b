//! Tracking of values resident in fast storage.
//!
//! The evaluation stack never names a register directly. Intermediate results are
//! [StackEntry::Slot]s, and the [LoadedSet] maps each live slot to the [Location]
//! currently holding it. Spilling the accumulator relocates one slot, and every stack
//! entry pointing at that slot follows along.

use super::asm_ast::Operand;
use tracing::trace;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct SlotId(usize);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum StackEntry {
    Memory(char),
    Slot(SlotId),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Location {
    Register(u32),
    Accumulator,
    Temporary(u32),
}

impl From<Location> for Operand {
    fn from(value: Location) -> Self {
        match value {
            Location::Register(n) => Self::Reg(n),
            Location::Accumulator => Self::Acc,
            Location::Temporary(n) => Self::Temp(n),
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct LoadedSet {
    // indexed by SlotId, None once retired
    slots: Vec<Option<Location>>,
}

impl LoadedSet {
    fn location(&self, entry: StackEntry) -> Option<Location> {
        match entry {
            StackEntry::Memory(_) => None,
            StackEntry::Slot(SlotId(id)) => self.slots.get(id).copied().flatten(),
        }
    }

    pub fn is_loaded(&self, entry: StackEntry) -> bool {
        self.location(entry).is_some()
    }

    pub fn holder(&self, location: Location) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|&slot| slot == Some(location))
            .map(SlotId)
    }

    pub fn load(&mut self, location: Location) -> SlotId {
        debug_assert!(self.holder(location).is_none(), "{location:?} is occupied");
        self.slots.push(Some(location));
        SlotId(self.slots.len() - 1)
    }

    pub fn retire(&mut self, entry: StackEntry) {
        if let StackEntry::Slot(SlotId(id)) = entry {
            self.slots[id] = None;
        }
    }

    pub fn spill(&mut self, slot: SlotId, to: Location) {
        trace!(?slot, ?to, "spilling");
        debug_assert!(self.holder(to).is_none(), "{to:?} is occupied");
        self.slots[slot.0] = Some(to);
    }

    /// Lowest register index `>= first` that no live slot holds.
    pub fn free_register(&self, first: u32) -> Location {
        let mut n = first;
        while self.holder(Location::Register(n)).is_some() {
            n += 1;
        }
        Location::Register(n)
    }

    /// Lowest temporary index `>= 1` that no live slot holds.
    pub fn free_temporary(&self) -> Location {
        let mut n = 1;
        while self.holder(Location::Temporary(n)).is_some() {
            n += 1;
        }
        Location::Temporary(n)
    }

    pub fn operand(&self, entry: StackEntry) -> Operand {
        match (entry, self.location(entry)) {
            (StackEntry::Memory(name), _) => Operand::Var(name),
            (StackEntry::Slot(_), Some(location)) => location.into(),
            (StackEntry::Slot(slot), None) => {
                unreachable!("retired {slot:?} still on the evaluation stack")
            }
        }
    }
}
