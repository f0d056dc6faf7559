// Allocation tracking tests for the message store and registry.
//
// Note: Tests using dhat are marked with #[serial_test::serial] because
// dhat only allows one profiler to run at a time. They will run sequentially.
//
// # Run all allocation tracking tests
// cargo test --test allocation_tracking -- --nocapture
//
// # Run a specific test
// cargo test --test allocation_tracking test_unregister_frees_every_node_with_dhat -- --nocapture

use channel_mailbox::Core::registry::ChannelRegistry;
use channel_mailbox::Mailbox;
use channel_mailbox::Mailbox::Structs::{ChannelInfo, Status};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
#[serial_test::serial]
fn test_unregister_frees_every_node_with_dhat() {
    let _profiler = dhat::Profiler::new_heap();

    let mut registry = ChannelRegistry::new();
    let mut info = ChannelInfo::default();
    registry.register(&mut info);

    let baseline = dhat::HeapStats::get();

    for _ in 0..1000 {
        registry.add_message(info.id, &[7u8; 100]);
    }

    // Each enqueue allocates one node and one payload buffer.
    let loaded = dhat::HeapStats::get();
    assert_eq!(loaded.curr_blocks, baseline.curr_blocks + 2000);
    assert!(loaded.curr_bytes >= baseline.curr_bytes + 100_000);

    registry.unregister(info.id);

    // Every node and buffer must be gone, nothing double-counted.
    let freed = dhat::HeapStats::get();
    assert_eq!(freed.curr_blocks, baseline.curr_blocks);
    assert_eq!(freed.curr_bytes, baseline.curr_bytes);
}

#[test]
#[serial_test::serial]
fn test_drain_frees_as_it_goes_with_dhat() {
    let _profiler = dhat::Profiler::new_heap();

    let mut registry = ChannelRegistry::new();
    let mut info = ChannelInfo::default();
    registry.register(&mut info);

    let baseline = dhat::HeapStats::get();

    for _ in 0..500 {
        registry.add_message(info.id, &[3u8; 64]);
    }

    let mut slot = None;
    loop {
        let status = registry.next_message(info.id, &mut slot);
        // Dropping the payload here is the caller's release of the
        // transferred buffer.
        slot.take();
        if status != Status::NotEmpty {
            break;
        }
    }

    let drained = dhat::HeapStats::get();
    assert_eq!(drained.curr_blocks, baseline.curr_blocks);
    assert_eq!(drained.curr_bytes, baseline.curr_bytes);
}

#[test]
#[serial_test::serial]
fn test_teardown_frees_registry_with_dhat() {
    let _profiler = dhat::Profiler::new_heap();

    // Warm-up cycle so one-time initialization of the global surface does
    // not skew the baseline.
    assert_eq!(Mailbox::init(), Status::Created);
    assert_eq!(Mailbox::teardown(), Status::Freed);

    let baseline = dhat::HeapStats::get();

    assert_eq!(Mailbox::init(), Status::Created);
    let mut info = ChannelInfo::default();
    for _ in 0..4 {
        Mailbox::register(&mut info);
        for _ in 0..100 {
            Mailbox::add_message(info.id, &[9u8; 32]);
        }
    }
    assert_eq!(Mailbox::teardown(), Status::Freed);

    let freed = dhat::HeapStats::get();
    assert_eq!(freed.curr_blocks, baseline.curr_blocks);
    assert_eq!(freed.curr_bytes, baseline.curr_bytes);
}

#[test]
#[serial_test::serial]
fn test_store_churn_with_memory_stats() {
    println!("\n--- Running store churn with memory-stats ---");
    use memory_stats::memory_stats;

    let before = memory_stats();
    println!("Memory before: {:?}", before);

    let mut registry = ChannelRegistry::new();
    let mut info = ChannelInfo::default();
    registry.register(&mut info);

    let mut slot = None;
    for i in 0..10_000usize {
        registry.add_message(info.id, &[0xCD; 128]);
        registry.next_message(info.id, &mut slot);
        slot.take();
        if i % 1000 == 0 {
            println!("  Processed {} messages", i);
        }
    }

    let after = memory_stats();
    println!("Memory after: {:?}", after);

    if let (Some(b), Some(a)) = (before, after) {
        let delta = a.physical_mem as i64 - b.physical_mem as i64;
        println!("Memory delta: {} bytes ({:.2} KB)", delta, delta as f64 / 1024.0);
        println!("  Steady-state churn should not grow the queue's footprint;");
        println!("  each pop releases the node its push allocated.");
    }
}
