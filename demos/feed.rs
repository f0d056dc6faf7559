// In demos/feed.rs
//
// Throughput demo: enqueue sha256-hashed payloads onto one channel, then
// drain the channel verifying arrival order. Ctrl+C stops the feed early.
use channel_mailbox::Mailbox;
use channel_mailbox::Mailbox::Structs::{ChannelInfo, Status};
use sha2::{Digest, Sha256};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <num_messages>", args[0]);
        std::process::exit(1);
    }

    let num_messages: usize = args[1].parse().expect("Invalid number of messages");

    println!("Feed: Precomputing {} hashes...", num_messages);

    // Precompute hashes
    let start_precompute = std::time::Instant::now();
    let mut hashes = Vec::with_capacity(num_messages);

    for i in 0..num_messages {
        let mut hasher = Sha256::new();
        hasher.update(format!("message_{}", i).as_bytes());
        let result = hasher.finalize();
        let hash_hex = format!("{:x}", result);
        hashes.push(hash_hex);
    }

    let precompute_time = start_precompute.elapsed();
    println!(
        "Feed: Precomputed {} hashes in {:.2?}",
        num_messages, precompute_time
    );

    if Mailbox::init() != Status::Created {
        eprintln!("Feed: registry already initialized, aborting");
        std::process::exit(1);
    }

    let mut info = ChannelInfo::default();
    if Mailbox::register(&mut info) != Status::Registered {
        eprintln!("Feed: failed to register a channel");
        std::process::exit(1);
    }
    println!("Feed: Created channel {}", info.id);

    // Handle Ctrl+C to stop feeding early
    let running = Arc::new(AtomicBool::new(true));
    let running_for_handler = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_for_handler.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    // Feed hashes onto the channel
    let start_feed = std::time::Instant::now();
    let mut fed = 0;

    for (i, hash) in hashes.iter().enumerate() {
        if !running.load(Ordering::SeqCst) {
            println!("Feed: interrupted after {} messages", fed);
            break;
        }

        // Format: "message_number:hash"
        let message = format!("{}:{}", i, hash);
        match Mailbox::add_message(info.id, message.as_bytes()) {
            Status::NotEmpty => {
                fed += 1;
                if fed % 100 == 0 {
                    println!("Fed {} messages", fed);
                }
            }
            status => {
                eprintln!("Feed: failed to add message {}: {}", i, status);
                break;
            }
        }
    }

    let feed_time = start_feed.elapsed();
    println!("Feed: Fed {} messages in {:.2?}", fed, feed_time);
    println!(
        "Feed: Throughput: {:.2} messages/sec",
        fed as f64 / feed_time.as_secs_f64()
    );

    // Drain the channel, verifying arrival order
    let start_drain = std::time::Instant::now();
    let mut drained = 0;
    let mut in_order = true;
    let mut slot = None;

    loop {
        let status = Mailbox::next_message(info.id, &mut slot);
        if let Some(payload) = slot.take() {
            let message = String::from_utf8_lossy(&payload);
            if let Some((num_str, _hash)) = message.split_once(':') {
                if num_str.parse::<usize>() != Ok(drained) {
                    in_order = false;
                }
            }
            drained += 1;
        }
        if status != Status::NotEmpty {
            break;
        }
    }

    let drain_time = start_drain.elapsed();
    println!("Feed: Drained {} messages in {:.2?}", drained, drain_time);

    if drained == fed && in_order {
        println!("All messages received in order");
    } else {
        eprintln!(
            "Feed: order check failed (fed {}, drained {}, in_order {})",
            fed, drained, in_order
        );
    }

    println!("Feed: {}", Mailbox::unregister(info.id));
    println!("Feed: {}", Mailbox::teardown());
}
