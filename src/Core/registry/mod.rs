use crate::Mailbox::Store::MessageStore;
use crate::Mailbox::Structs::{ChannelInfo, Status};
use log::{debug, warn};

mod debug;
mod getters;

/// Default number of channel slots in a registry. Capacity is fixed at
/// construction and never grows.
pub const MAX_CHANNELS: usize = 8;

/// A single live channel: its slot id plus the FIFO store it owns.
pub struct Channel {
    /// The slot index this channel occupies in the registry.
    pub(crate) id: u32,
    /// The channel's message store. The channel is its sole owner.
    pub(crate) store: MessageStore,
}

/// Fixed-capacity table of optional channel slots addressed by integer id.
///
/// A slot is either empty or holds exactly one live channel whose `id` equals
/// the slot index. Allocation is deterministic first-fit in ascending index
/// order, so ids freed by `unregister` are re-handed-out before higher unused
/// ids.
///
/// The registry performs no internal locking: it is a caller-owned handle
/// meant for single-threaded use, or for embedders that provide their own
/// synchronization. The process-wide surface in `Mailbox::api` wraps one of
/// these in a single coarse mutex.
pub struct ChannelRegistry {
    slots: Vec<Option<Channel>>,
}

impl Channel {
    fn new(id: u32) -> Self {
        Self {
            id,
            store: MessageStore::new(),
        }
    }

    /// The slot index this channel occupies.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Live message count, derived from the store.
    pub fn message_count(&self) -> usize {
        self.store.len()
    }

    /// A fresh value snapshot of the channel's observable state.
    pub fn snapshot(&self) -> ChannelInfo {
        ChannelInfo {
            message_count: self.store.len() as u32,
            id: self.id,
        }
    }
}

impl ChannelRegistry {
    /// Create a registry with the default `MAX_CHANNELS` slots, all empty.
    pub fn new() -> Self {
        Self::with_capacity(MAX_CHANNELS)
    }

    /// Create a registry with `capacity` slots, all empty.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Register a new channel at the first empty slot.
    ///
    /// On success writes `{id, message_count: 0}` into `info` and returns
    /// `Registered`. Returns `RegistryFull` when every slot is taken; nothing
    /// is allocated or mutated in that case, `info` included.
    pub fn register(&mut self, info: &mut ChannelInfo) -> Status {
        let id = match self.slots.iter().position(|slot| slot.is_none()) {
            Some(id) => id,
            None => {
                warn!("register rejected: all {} slots taken", self.slots.len());
                return Status::RegistryFull;
            }
        };

        let channel = Channel::new(id as u32);
        *info = channel.snapshot();
        self.slots[id] = Some(channel);
        debug!("channel {} registered", id);
        Status::Registered
    }

    /// Unregister the channel at `id`, releasing every queued message.
    ///
    /// Out-of-range ids are treated identically to empty slots: both answer
    /// `ChannelNull` without touching any state.
    pub fn unregister(&mut self, id: u32) -> Status {
        let slot = match self.slots.get_mut(id as usize) {
            Some(slot) => slot,
            None => return Status::ChannelNull,
        };
        match slot.take() {
            // Dropping the channel drops its store, which walks the list and
            // frees every node and buffer exactly once.
            Some(channel) => {
                debug!(
                    "channel {} unregistered, {} queued messages released",
                    id,
                    channel.message_count()
                );
                drop(channel);
                Status::Unregistered
            }
            None => Status::ChannelNull,
        }
    }

    /// Write a fresh snapshot of channel `id` into `info`.
    ///
    /// Returns `Empty` or `NotEmpty` by the channel's message count, or
    /// `ChannelNull` for an unknown id.
    pub fn get_info(&self, id: u32, info: &mut ChannelInfo) -> Status {
        let channel = match self.channel(id) {
            Some(channel) => channel,
            None => return Status::ChannelNull,
        };
        *info = channel.snapshot();
        if info.message_count == 0 {
            Status::Empty
        } else {
            Status::NotEmpty
        }
    }

    /// Append a copy of `data` to channel `id`'s queue.
    ///
    /// Returns `NotEmpty` on success (the channel now holds at least one
    /// message; there is no distinct "enqueued" status), or `ChannelNull` for
    /// an unknown id.
    pub fn add_message(&mut self, id: u32, data: &[u8]) -> Status {
        let channel = match self.channel_mut(id) {
            Some(channel) => channel,
            None => return Status::ChannelNull,
        };
        channel.store.push_back(data);
        Status::NotEmpty
    }

    /// Detach the oldest message from channel `id` into `out`.
    ///
    /// When the queue is empty, `out` is set to `None` and the status is
    /// `Empty` with no side effects. Otherwise the payload moves into `out`
    /// and the status reports what *remains*: `NotEmpty` if more messages are
    /// queued, `Empty` if this was the last one. Callers draining a channel
    /// should therefore consume `out` before checking for `Empty`.
    pub fn next_message(&mut self, id: u32, out: &mut Option<Vec<u8>>) -> Status {
        let channel = match self.channel_mut(id) {
            Some(channel) => channel,
            None => return Status::ChannelNull,
        };
        *out = channel.store.pop_front();
        if out.is_some() && !channel.store.is_empty() {
            Status::NotEmpty
        } else {
            Status::Empty
        }
    }

    fn channel(&self, id: u32) -> Option<&Channel> {
        self.slots.get(id as usize).and_then(|slot| slot.as_ref())
    }

    fn channel_mut(&mut self, id: u32) -> Option<&mut Channel> {
        self.slots.get_mut(id as usize).and_then(|slot| slot.as_mut())
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
