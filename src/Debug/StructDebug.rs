use std::fmt;
use crate::Core::registry::{Channel, ChannelRegistry};
use crate::Mailbox::Store::MessageStore;

/// Debug function for ChannelRegistry
///
/// Provides a safe debug representation that shows:
/// - Total slot capacity
/// - Number of occupied slots
/// - The ids currently in use
pub fn debug_channel_registry(registry: &ChannelRegistry, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let ids: Vec<u32> = (0..registry.capacity() as u32)
        .filter(|&id| registry.channel_at(id).is_some())
        .collect();
    f.debug_struct("ChannelRegistry")
        .field("capacity", &registry.capacity())
        .field("channel_count", &registry.channel_count())
        .field("ids", &ids)
        .finish()
}

/// Debug function for Channel
///
/// Shows:
/// - Slot id
/// - Live message count
pub fn debug_channel(channel: &Channel, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Channel")
        .field("id", &channel.id())
        .field("message_count", &channel.message_count())
        .finish()
}

/// Debug function for MessageStore
///
/// Displays the queue length without walking or exposing the node links.
pub fn debug_message_store(store: &MessageStore, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MessageStore")
        .field("len", &store.len())
        .finish_non_exhaustive()
}
