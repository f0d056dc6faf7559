// In src/Mailbox/api.rs
//
// Process-wide mailbox surface over a single shared registry.
//
// The registry is a process singleton with an explicit lifecycle: `init` must
// succeed before any channel operation does, and `teardown` releases
// everything. The whole registry sits behind one coarse mutex, so unlike the
// caller-owned `ChannelRegistry` handle this surface is safe to call from
// multiple threads. Operations are short and synchronous; embedders that need
// finer-grained locking should own a `ChannelRegistry` handle instead.

use crate::Core::registry::ChannelRegistry;
use crate::Mailbox::Structs::{ChannelInfo, Status};
use lazy_static::lazy_static;
use log::debug;
use parking_lot::Mutex;

lazy_static! {
    static ref REGISTRY: Mutex<Option<ChannelRegistry>> = Mutex::new(None);
}

/// Initialize the process-wide registry with all slots empty.
///
/// Fails with `AlreadyExists` if the registry is already live; the existing
/// state is left untouched.
pub fn init() -> Status {
    let mut guard = REGISTRY.lock();
    if guard.is_some() {
        return Status::AlreadyExists;
    }
    *guard = Some(ChannelRegistry::new());
    debug!("registry initialized");
    Status::Created
}

/// Tear down the process-wide registry, unregistering every occupied slot.
///
/// Fails with `NotInitialized` if the registry is not live; calling teardown
/// twice without an intervening `init` fails the second time.
pub fn teardown() -> Status {
    let mut guard = REGISTRY.lock();
    let mut registry = match guard.take() {
        Some(registry) => registry,
        None => return Status::NotInitialized,
    };
    for id in 0..registry.capacity() as u32 {
        // Empty slots answer ChannelNull; occupied ones release their store.
        let _ = registry.unregister(id);
    }
    debug!("registry freed");
    Status::Freed
}

/// Register a new channel at the first empty slot and write its snapshot
/// into `info`.
///
/// A null info pointer cannot arise through this surface; the C wrapper
/// checks for it and answers `InfoNull` before the lifecycle check.
pub fn register(info: &mut ChannelInfo) -> Status {
    match REGISTRY.lock().as_mut() {
        Some(registry) => registry.register(info),
        None => Status::NotInitialized,
    }
}

/// Unregister the channel at `id`, releasing its queued messages.
pub fn unregister(id: u32) -> Status {
    match REGISTRY.lock().as_mut() {
        Some(registry) => registry.unregister(id),
        None => Status::NotInitialized,
    }
}

/// Snapshot channel `id` into `info`, answering `Empty` or `NotEmpty`.
pub fn get_info(id: u32, info: &mut ChannelInfo) -> Status {
    match REGISTRY.lock().as_ref() {
        Some(registry) => registry.get_info(id, info),
        None => Status::NotInitialized,
    }
}

/// Append a copy of `data` onto channel `id`'s queue.
pub fn add_message(id: u32, data: &[u8]) -> Status {
    match REGISTRY.lock().as_mut() {
        Some(registry) => registry.add_message(id, data),
        None => Status::NotInitialized,
    }
}

/// Move the oldest message of channel `id` into `out`.
///
/// See [`ChannelRegistry::next_message`] for the out-parameter and status
/// conventions.
pub fn next_message(id: u32, out: &mut Option<Vec<u8>>) -> Status {
    match REGISTRY.lock().as_mut() {
        Some(registry) => registry.next_message(id, out),
        None => Status::NotInitialized,
    }
}
