// Module naming follows project convention (Mailbox = channel-based FIFO queues)
#[allow(non_snake_case)]
pub mod Mailbox {
    pub mod api;
    pub mod Store {
        pub mod Store;
        pub mod Store_impl;
        pub use Store::{Message, MessageStore}; // re-export for stable path
    }
    pub mod Structs {
        pub mod Queue_Structs;
        pub use Queue_Structs::{ChannelInfo, Status}; // re-export for stable path
    }
    pub use api::{add_message, get_info, init, next_message, register, teardown, unregister};
}
#[allow(non_snake_case)]
pub mod Core {
    pub mod registry;
    pub use registry::{Channel, ChannelRegistry, MAX_CHANNELS};
}
#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}
pub mod ffi;
