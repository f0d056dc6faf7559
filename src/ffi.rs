use crate::Mailbox::api;
use crate::Mailbox::Structs::{ChannelInfo, Status};
use log::error;
use std::os::raw::c_char;
use std::ptr;

// Status codes as seen by C callers. These mirror the `#[repr(i32)]`
// discriminants of `Status`.
pub const MBX_CREATED: i32 = Status::Created as i32;
pub const MBX_ALREADY_EXISTS: i32 = Status::AlreadyExists as i32;
pub const MBX_NOT_INITIALIZED: i32 = Status::NotInitialized as i32;
pub const MBX_REGISTRY_FULL: i32 = Status::RegistryFull as i32;
pub const MBX_FREED: i32 = Status::Freed as i32;
pub const MBX_CHANNEL_NULL: i32 = Status::ChannelNull as i32;
pub const MBX_EMPTY: i32 = Status::Empty as i32;
pub const MBX_NOT_EMPTY: i32 = Status::NotEmpty as i32;
pub const MBX_REGISTERED: i32 = Status::Registered as i32;
pub const MBX_UNREGISTERED: i32 = Status::Unregistered as i32;
pub const MBX_INFO_NULL: i32 = Status::InfoNull as i32;

// -----------------------------------------------------------------------------
// Registry lifecycle
// -----------------------------------------------------------------------------

/// Initialize the process-wide registry.
///
/// # Returns
/// * `MBX_CREATED`, or `MBX_ALREADY_EXISTS` if it is already live.
#[no_mangle]
pub extern "C" fn mbx_init() -> i32 {
    api::init().code()
}

/// Tear down the process-wide registry, releasing every channel and message.
///
/// # Returns
/// * `MBX_FREED`, or `MBX_NOT_INITIALIZED` if there is nothing to free.
#[no_mangle]
pub extern "C" fn mbx_teardown() -> i32 {
    api::teardown().code()
}

// -----------------------------------------------------------------------------
// Channel API
// -----------------------------------------------------------------------------

/// Register a new channel and write its snapshot through `info`.
///
/// # Arguments
/// * `info` - Non-null pointer to a `ChannelInfo` to fill in.
///
/// # Returns
/// * `MBX_INFO_NULL` if `info` is null (checked before anything else).
/// * `MBX_NOT_INITIALIZED` / `MBX_REGISTRY_FULL` / `MBX_REGISTERED` otherwise.
#[no_mangle]
pub extern "C" fn mbx_register(info: *mut ChannelInfo) -> i32 {
    if info.is_null() {
        error!("mbx_register called with null info pointer");
        return MBX_INFO_NULL;
    }

    let mut out = ChannelInfo::default();
    let status = api::register(&mut out);
    if status == Status::Registered {
        unsafe { *info = out };
    }
    status.code()
}

/// Unregister a channel, releasing its queued messages.
///
/// # Returns
/// * `MBX_NOT_INITIALIZED`, `MBX_CHANNEL_NULL` or `MBX_UNREGISTERED`.
#[no_mangle]
pub extern "C" fn mbx_unregister(channel_id: u32) -> i32 {
    api::unregister(channel_id).code()
}

/// Snapshot a channel's state through `info`.
///
/// # Returns
/// * `MBX_INFO_NULL` if `info` is null (checked before anything else).
/// * `MBX_EMPTY` / `MBX_NOT_EMPTY` by message count on success.
#[no_mangle]
pub extern "C" fn mbx_get_info(channel_id: u32, info: *mut ChannelInfo) -> i32 {
    if info.is_null() {
        error!("mbx_get_info called with null info pointer");
        return MBX_INFO_NULL;
    }

    let mut out = ChannelInfo::default();
    let status = api::get_info(channel_id, &mut out);
    if status == Status::Empty || status == Status::NotEmpty {
        unsafe { *info = out };
    }
    status.code()
}

// -----------------------------------------------------------------------------
// Message API
// -----------------------------------------------------------------------------

/// Push a copy of `data[0..len]` onto a channel's queue.
///
/// The payload is copied at exactly `len` bytes; embedded zero bytes are
/// preserved and no terminator is required. `len == 0` enqueues an empty
/// message and may pass a null `data` pointer.
///
/// # Returns
/// * `MBX_INFO_NULL` if `data` is null with `len > 0`.
/// * `MBX_NOT_INITIALIZED`, `MBX_CHANNEL_NULL` or `MBX_NOT_EMPTY` otherwise.
#[no_mangle]
pub extern "C" fn mbx_add_message(channel_id: u32, data: *const u8, len: usize) -> i32 {
    let bytes: &[u8] = if len == 0 {
        &[]
    } else if data.is_null() {
        error!("mbx_add_message called with null data pointer");
        return MBX_INFO_NULL;
    } else {
        unsafe { std::slice::from_raw_parts(data, len) }
    };

    api::add_message(channel_id, bytes).code()
}

/// Pop the oldest message of a channel into a freshly allocated buffer.
///
/// On a successful pop, `*out_data` receives a heap buffer owned by the
/// caller (release it with `mbx_message_free`) and `*out_len` its length.
/// When nothing was dequeued, `*out_data` is set to null and `*out_len` to 0.
/// The status reports what remains: `MBX_NOT_EMPTY` if more messages are
/// queued, `MBX_EMPTY` if the pop drained the channel or it was already
/// empty. Callers must therefore consume `*out_data` before checking for
/// `MBX_EMPTY`.
///
/// # Returns
/// * `MBX_INFO_NULL` if `out_data` or `out_len` is null.
/// * `MBX_NOT_INITIALIZED`, `MBX_CHANNEL_NULL`, `MBX_EMPTY` or
///   `MBX_NOT_EMPTY` otherwise.
#[no_mangle]
pub extern "C" fn mbx_next_message(
    channel_id: u32,
    out_data: *mut *mut u8,
    out_len: *mut usize,
) -> i32 {
    if out_data.is_null() || out_len.is_null() {
        error!("mbx_next_message called with null output pointer");
        return MBX_INFO_NULL;
    }

    unsafe {
        *out_data = ptr::null_mut();
        *out_len = 0;
    }

    let mut out = None;
    let status = api::next_message(channel_id, &mut out);
    if let Some(payload) = out {
        let boxed = payload.into_boxed_slice();
        unsafe {
            *out_len = boxed.len();
            *out_data = Box::into_raw(boxed) as *mut u8;
        }
    }
    status.code()
}

/// Release a buffer handed out by `mbx_next_message`.
///
/// `len` must be the length reported alongside the buffer. Passing null is a
/// no-op.
#[no_mangle]
pub extern "C" fn mbx_message_free(data: *mut u8, len: usize) {
    if data.is_null() {
        return;
    }
    unsafe {
        let _ = Box::from_raw(ptr::slice_from_raw_parts_mut(data, len));
    }
}

// -----------------------------------------------------------------------------
// Status labels
// -----------------------------------------------------------------------------

/// Stable, nul-terminated label for a status code, for logging on the C side.
/// Unknown codes answer "Unknown Status". The returned pointer is static and
/// must not be freed.
#[no_mangle]
pub extern "C" fn mbx_status_label(status: i32) -> *const c_char {
    let label: &'static [u8] = match status {
        MBX_CREATED => b"Registry Created\0",
        MBX_ALREADY_EXISTS => b"Registry Exists\0",
        MBX_NOT_INITIALIZED => b"Registry Doesn't Exist\0",
        MBX_REGISTRY_FULL => b"Registry Full\0",
        MBX_FREED => b"Registry Freed\0",
        MBX_CHANNEL_NULL => b"Channel is Null\0",
        MBX_EMPTY => b"Channel Empty\0",
        MBX_NOT_EMPTY => b"Channel Not Empty\0",
        MBX_REGISTERED => b"Channel Registered\0",
        MBX_UNREGISTERED => b"Channel Unregistered\0",
        MBX_INFO_NULL => b"Info is Null\0",
        _ => b"Unknown Status\0",
    };
    label.as_ptr() as *const c_char
}
