// In demos/mailbox.rs
//
// Run-to-completion demonstration driver: set up the registry, register a
// channel, push a few messages, drain them in arrival order, tear down.
use channel_mailbox::Mailbox;
use channel_mailbox::Mailbox::Structs::{ChannelInfo, Status};

fn main() {
    env_logger::init();

    println!("Mailbox: {}", Mailbox::init());

    // Register a channel and add some messages
    let mut info = ChannelInfo::default();
    let status = Mailbox::register(&mut info);
    println!("Mailbox: {} (id {})", status, info.id);

    for payload in ["m1", "m2", "m3", "m4"] {
        Mailbox::add_message(info.id, payload.as_bytes());
    }

    let status = Mailbox::get_info(info.id, &mut info);
    println!(
        "Mailbox: channel {} holds {} messages ({})",
        info.id, info.message_count, status
    );

    // Print out all messages added, oldest first
    let mut slot = None;
    loop {
        let status = Mailbox::next_message(info.id, &mut slot);
        if let Some(payload) = slot.take() {
            println!("{}", String::from_utf8_lossy(&payload));
        }
        if status != Status::NotEmpty {
            break;
        }
    }

    // Unregister our channel, then an id that was never registered
    println!("Mailbox: {}", Mailbox::unregister(info.id));
    println!("Mailbox: {}", Mailbox::unregister(3));

    println!("Mailbox: {}", Mailbox::teardown());
}
