// Snapshot and status types shared by the Rust and C surfaces

use std::fmt;

/// Disposable snapshot of one channel's observable state.
///
/// This is a value copy handed to the caller, never a live view into the
/// registry: holding it past further mutation of the channel yields a
/// stale-but-valid snapshot, and mutating it has no effect on registry state.
/// ABI-stable across languages; all fields are little-endian.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelInfo {
    pub message_count: u32,
    pub id: u32,
}

/// Closed set of result codes returned by every mailbox operation.
///
/// Every operation is total: bad input (an out-of-range id, a null pointer on
/// the C surface) is answered with a status, never a panic. The variants fall
/// into four categories:
///
/// - lifecycle misuse: `AlreadyExists`, `NotInitialized`
/// - capacity exhaustion: `RegistryFull`
/// - invalid target: `ChannelNull`, `InfoNull`
/// - empty/not-empty signaling: `Empty`, `NotEmpty` (control flow, not errors)
///
/// with `Created`, `Freed`, `Registered` and `Unregistered` confirming the
/// corresponding lifecycle operations. Discriminants are the codes seen by C
/// callers.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Registry was successfully created
    Created = 0,
    /// Registry already exists
    AlreadyExists = 1,
    /// Registry hasn't been initialized
    NotInitialized = 2,
    /// Every channel slot is already taken
    RegistryFull = 3,
    /// Registry was successfully cleaned up
    Freed = 4,
    /// The requested channel is unregistered or out of range
    ChannelNull = 5,
    /// The requested channel holds no messages
    Empty = 6,
    /// The requested channel holds at least one message
    NotEmpty = 7,
    /// The channel was registered
    Registered = 8,
    /// The channel was unregistered
    Unregistered = 9,
    /// The given info pointer was null
    InfoNull = 10,
}

impl Status {
    /// Stable human-readable label, suitable for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Created => "Registry Created",
            Status::AlreadyExists => "Registry Exists",
            Status::NotInitialized => "Registry Doesn't Exist",
            Status::RegistryFull => "Registry Full",
            Status::Freed => "Registry Freed",
            Status::ChannelNull => "Channel is Null",
            Status::Empty => "Channel Empty",
            Status::NotEmpty => "Channel Not Empty",
            Status::Registered => "Channel Registered",
            Status::Unregistered => "Channel Unregistered",
            Status::InfoNull => "Info is Null",
        }
    }

    /// True for the failure categories (lifecycle misuse, capacity
    /// exhaustion, invalid target). `Empty`/`NotEmpty` are control-flow
    /// signals, not errors.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Status::AlreadyExists
                | Status::NotInitialized
                | Status::RegistryFull
                | Status::ChannelNull
                | Status::InfoNull
        )
    }

    /// The numeric code exposed on the C surface.
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
