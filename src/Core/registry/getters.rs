use super::*;

/// Getter methods for ChannelRegistry
///
/// These provide read-only access to the registry's occupancy for debugging
/// and monitoring purposes. None of them mutate any slot.
impl ChannelRegistry {
    /// Total number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn channel_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when every slot is taken and `register` would answer
    /// `RegistryFull`.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Borrow the live channel at `id`, if any. Out-of-range ids answer
    /// `None` like empty slots.
    pub fn channel_at(&self, id: u32) -> Option<&Channel> {
        self.channel(id)
    }
}
