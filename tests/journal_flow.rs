use haven_bot::journal::{self, DeletionError, DeletionTracker};
use serenity::model::channel::{ChannelType, PermissionOverwrite};
use serenity::model::id::{ChannelId, GuildId, UserId};

#[test]
fn test_delete_then_confirm_same_channel() {
    // !deletejournal → !confirmdelete in the same channel → channel goes away
    let tracker = DeletionTracker::new();
    let owner = UserId::new(1);
    let journal_channel = ChannelId::new(100);

    tracker.request_deletion(owner, journal_channel, 1_000);
    assert_eq!(tracker.confirm_deletion(owner, journal_channel, 1_002), Ok(()));

    // Entry consumed; a second confirm fails.
    assert_eq!(
        tracker.confirm_deletion(owner, journal_channel, 1_003),
        Err(DeletionError::NoPendingRequest)
    );
}

#[test]
fn test_confirm_from_other_channel_or_user_fails() {
    let tracker = DeletionTracker::new();
    let owner = UserId::new(1);
    let journal_channel = ChannelId::new(100);

    tracker.request_deletion(owner, journal_channel, 1_000);

    assert_eq!(
        tracker.confirm_deletion(owner, ChannelId::new(200), 1_001),
        Err(DeletionError::NoPendingRequest)
    );
    assert_eq!(
        tracker.confirm_deletion(UserId::new(2), journal_channel, 1_001),
        Err(DeletionError::NoPendingRequest)
    );

    // The owner's request survives both failed attempts.
    assert_eq!(tracker.confirm_deletion(owner, journal_channel, 1_002), Ok(()));
}

#[test]
fn test_cancel_returns_to_created() {
    let tracker = DeletionTracker::new();
    let owner = UserId::new(1);
    let journal_channel = ChannelId::new(100);

    tracker.request_deletion(owner, journal_channel, 0);
    assert!(tracker.cancel_deletion(owner));
    assert_eq!(
        tracker.confirm_deletion(owner, journal_channel, 1),
        Err(DeletionError::NoPendingRequest)
    );

    // A fresh request works again after cancelling.
    tracker.request_deletion(owner, journal_channel, 10);
    assert_eq!(tracker.confirm_deletion(owner, journal_channel, 11), Ok(()));
}

#[test]
fn test_journal_channel_naming() {
    assert_eq!(journal::channel_name("River Song"), "journal-river-song");
    assert!(journal::is_journal_channel(&journal::channel_name("anyone")));
}

#[test]
fn test_existing_journal_detection() {
    let guild = GuildId::new(5);
    let owner = UserId::new(1);
    let bot = UserId::new(99);
    let name = journal::channel_name("River Song");
    let owner_overwrites = journal::private_overwrites(guild, owner, bot);
    let other_overwrites = journal::private_overwrites(guild, UserId::new(2), bot);

    assert!(journal::is_owned_journal(&name, ChannelType::Text, &owner_overwrites, &name, owner));

    // Same name, but created for someone else.
    assert!(!journal::is_owned_journal(&name, ChannelType::Text, &other_overwrites, &name, owner));
    // Right overwrites, wrong name or kind.
    assert!(!journal::is_owned_journal("general", ChannelType::Text, &owner_overwrites, &name, owner));
    assert!(!journal::is_owned_journal(&name, ChannelType::Voice, &owner_overwrites, &name, owner));
    // No overwrites at all.
    let none: Vec<PermissionOverwrite> = Vec::new();
    assert!(!journal::is_owned_journal(&name, ChannelType::Text, &none, &name, owner));
}
