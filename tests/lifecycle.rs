// tests/lifecycle.rs
//
// Tests over the process-wide singleton surface. Every test here mutates the
// same global registry, so they hold TEST_LOCK and are marked serial; each
// one starts from a torn-down registry.

use channel_mailbox::Mailbox;
use channel_mailbox::Mailbox::Structs::{ChannelInfo, Status};

// Test helper to ensure we're the only test using the global registry
static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

fn reset_registry() {
    // Ignore the status: the registry may or may not be live from a
    // previously failed test.
    let _ = Mailbox::teardown();
}

#[test]
#[serial_test::serial]
fn test_lifecycle_gating() {
    let _guard = TEST_LOCK.lock();
    reset_registry();

    // Every channel operation is rejected before init.
    let mut info = ChannelInfo::default();
    let mut slot = None;
    assert_eq!(Mailbox::register(&mut info), Status::NotInitialized);
    assert_eq!(Mailbox::unregister(0), Status::NotInitialized);
    assert_eq!(Mailbox::get_info(0, &mut info), Status::NotInitialized);
    assert_eq!(Mailbox::add_message(0, b"x"), Status::NotInitialized);
    assert_eq!(Mailbox::next_message(0, &mut slot), Status::NotInitialized);
    assert_eq!(Mailbox::teardown(), Status::NotInitialized);

    assert_eq!(Mailbox::init(), Status::Created);
    assert_eq!(Mailbox::teardown(), Status::Freed);

    // Teardown twice without an intervening init fails the second time.
    assert_eq!(Mailbox::teardown(), Status::NotInitialized);
}

#[test]
#[serial_test::serial]
fn test_double_init_preserves_channels() {
    let _guard = TEST_LOCK.lock();
    reset_registry();

    assert_eq!(Mailbox::init(), Status::Created);

    let mut info = ChannelInfo::default();
    assert_eq!(Mailbox::register(&mut info), Status::Registered);
    Mailbox::add_message(info.id, b"kept");

    // Second init is rejected and the channel set is untouched.
    assert_eq!(Mailbox::init(), Status::AlreadyExists);
    assert_eq!(Mailbox::get_info(info.id, &mut info), Status::NotEmpty);
    assert_eq!(info.message_count, 1);

    let mut slot = None;
    Mailbox::next_message(info.id, &mut slot);
    assert_eq!(slot.take().unwrap(), b"kept");

    assert_eq!(Mailbox::teardown(), Status::Freed);
}

#[test]
#[serial_test::serial]
fn test_end_to_end_scenario() {
    let _guard = TEST_LOCK.lock();
    reset_registry();

    assert_eq!(Mailbox::init(), Status::Created);

    let mut info = ChannelInfo::default();
    assert_eq!(Mailbox::register(&mut info), Status::Registered);
    assert_eq!(info.id, 0);

    assert_eq!(Mailbox::add_message(0, b"m1"), Status::NotEmpty);
    assert_eq!(Mailbox::add_message(0, b"m2"), Status::NotEmpty);
    assert_eq!(Mailbox::get_info(0, &mut info), Status::NotEmpty);
    assert_eq!(info.message_count, 2);

    let mut slot = None;
    assert_eq!(Mailbox::next_message(0, &mut slot), Status::NotEmpty);
    assert_eq!(slot.take().unwrap(), b"m1");
    assert_eq!(Mailbox::next_message(0, &mut slot), Status::Empty);
    assert_eq!(slot.take().unwrap(), b"m2");

    assert_eq!(Mailbox::unregister(0), Status::Unregistered);
    assert_eq!(Mailbox::teardown(), Status::Freed);
}

#[test]
#[serial_test::serial]
fn test_unregister_unknown_keeps_registry_live() {
    let _guard = TEST_LOCK.lock();
    reset_registry();

    assert_eq!(Mailbox::init(), Status::Created);
    assert_eq!(Mailbox::unregister(7), Status::ChannelNull);
    assert_eq!(Mailbox::unregister(9999), Status::ChannelNull);

    // The failures above must not have flipped the lifecycle flag.
    let mut info = ChannelInfo::default();
    assert_eq!(Mailbox::register(&mut info), Status::Registered);
    assert_eq!(Mailbox::teardown(), Status::Freed);
}

#[test]
#[serial_test::serial]
fn test_teardown_releases_every_channel() {
    let _guard = TEST_LOCK.lock();
    reset_registry();

    assert_eq!(Mailbox::init(), Status::Created);
    let mut info = ChannelInfo::default();
    for _ in 0..4 {
        assert_eq!(Mailbox::register(&mut info), Status::Registered);
        for _ in 0..10 {
            Mailbox::add_message(info.id, &[1; 64]);
        }
    }
    assert_eq!(Mailbox::teardown(), Status::Freed);

    // A fresh lifecycle starts from an empty table: id 0 again, count 0.
    assert_eq!(Mailbox::init(), Status::Created);
    assert_eq!(Mailbox::register(&mut info), Status::Registered);
    assert_eq!(info.id, 0);
    assert_eq!(info.message_count, 0);
    assert_eq!(Mailbox::teardown(), Status::Freed);
}

#[test]
#[serial_test::serial]
fn test_channels_are_independent() {
    let _guard = TEST_LOCK.lock();
    reset_registry();

    assert_eq!(Mailbox::init(), Status::Created);

    let mut a = ChannelInfo::default();
    let mut b = ChannelInfo::default();
    Mailbox::register(&mut a);
    Mailbox::register(&mut b);

    Mailbox::add_message(a.id, b"for-a");
    Mailbox::add_message(b.id, b"for-b-1");
    Mailbox::add_message(b.id, b"for-b-2");

    assert_eq!(Mailbox::get_info(a.id, &mut a), Status::NotEmpty);
    assert_eq!(a.message_count, 1);
    assert_eq!(Mailbox::get_info(b.id, &mut b), Status::NotEmpty);
    assert_eq!(b.message_count, 2);

    // Draining one channel leaves the other alone.
    let mut slot = None;
    assert_eq!(Mailbox::next_message(a.id, &mut slot), Status::Empty);
    assert_eq!(slot.take().unwrap(), b"for-a");
    assert_eq!(Mailbox::get_info(b.id, &mut b), Status::NotEmpty);
    assert_eq!(b.message_count, 2);

    assert_eq!(Mailbox::teardown(), Status::Freed);
}

#[test]
#[serial_test::serial]
fn test_status_labels_are_stable() {
    let _guard = TEST_LOCK.lock();

    assert_eq!(Status::Created.label(), "Registry Created");
    assert_eq!(Status::NotInitialized.label(), "Registry Doesn't Exist");
    assert_eq!(Status::ChannelNull.to_string(), "Channel is Null");

    assert!(Status::RegistryFull.is_error());
    assert!(Status::InfoNull.is_error());
    assert!(!Status::Empty.is_error());
    assert!(!Status::NotEmpty.is_error());
    assert!(!Status::Freed.is_error());
}
