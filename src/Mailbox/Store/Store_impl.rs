// In src/Mailbox/Store/Store_impl.rs
use std::ptr::NonNull;

use super::Store::{Message, MessageStore};

impl Message {
    /// Build a detached node owning a copy of `data`. The forward link starts
    /// out `None`; linking is the store's job.
    pub(crate) fn new(data: &[u8]) -> Box<Self> {
        Box::new(Self {
            data: data.to_vec().into_boxed_slice(),
            next: None,
        })
    }

    /// The stored payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.data
    }

    /// Payload length in bytes, derived from the buffer itself.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of messages currently queued.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a copy of `data` at the tail.
    ///
    /// Zero-length payloads and payloads containing zero bytes are legal; the
    /// copy is taken at the slice's exact length.
    pub fn push_back(&mut self, data: &[u8]) {
        let node = NonNull::from(Box::leak(Message::new(data)));
        match self.tail {
            // Safety: `tail` points at a node owned by this store, and no
            // other reference to it exists while we hold `&mut self`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Detach the head node and hand its payload to the caller.
    ///
    /// Returns `None` if the store is empty. On success the caller becomes
    /// the sole owner of the returned buffer and the node itself is released
    /// here.
    pub fn pop_front(&mut self) -> Option<Vec<u8>> {
        let head = self.head?;
        // Safety: `head` was created from `Box::leak` in `push_back` and is
        // owned by this store; reconstituting the box transfers that
        // ownership back so the node is freed when it drops.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.data.into_vec())
    }

    /// Payload of the message at the head, without detaching it.
    pub fn front(&self) -> Option<&[u8]> {
        // Safety: `head` is owned by this store and stays valid for the
        // lifetime of `&self`.
        self.head.map(|head| unsafe { &*head.as_ptr() }.payload())
    }

    /// Release every queued node and buffer. Iterative, so deep queues do not
    /// recurse.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MessageStore {
    fn drop(&mut self) {
        self.clear();
    }
}
