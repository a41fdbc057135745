use std::collections::HashSet;

use haven_bot::commands;

#[test]
fn test_all_commands_returns_correct_count() {
    let cmds = commands::all();
    assert_eq!(
        cmds.len(),
        12,
        "Expected 12 commands (4 info + 3 lookups + 5 journal lifecycle), got {}",
        cmds.len()
    );
}

#[test]
fn test_all_commands_contain_expected_names() {
    let cmds = commands::all();
    let names: HashSet<&str> = cmds.iter().map(|cmd| cmd.name.as_str()).collect();

    let expected = [
        "resources",
        "legalhelp",
        "help",
        "gender",
        "journal",
        "clearjournal",
        "deletejournal",
        "confirmdelete",
        "canceldelete",
        "prompt",
        "journalhelp",
        "affirmation",
    ];

    for name in &expected {
        assert!(
            names.contains(name),
            "Expected command '{}' not found in commands::all(). Present names: {:?}",
            name,
            names
        );
    }
}

#[test]
fn test_no_duplicate_command_names() {
    let cmds = commands::all();
    let mut seen = HashSet::new();

    for cmd in &cmds {
        assert!(
            seen.insert(cmd.name.as_str()),
            "Duplicate command name found: '{}'",
            cmd.name
        );
    }
}

#[test]
fn test_all_commands_are_prefix_only() {
    let cmds = commands::all();

    for cmd in &cmds {
        assert!(
            cmd.prefix_action.is_some(),
            "Command '{}' is not a prefix command",
            cmd.name
        );
        assert!(
            cmd.slash_action.is_none(),
            "Command '{}' should not register a slash command",
            cmd.name
        );
    }
}

#[test]
fn test_journal_management_is_guild_only() {
    let cmds = commands::all();
    for cmd in cmds.iter().filter(|c| {
        matches!(
            c.name.as_str(),
            "journal" | "clearjournal" | "deletejournal" | "confirmdelete" | "canceldelete"
        )
    }) {
        assert!(cmd.guild_only, "Command '{}' should be guild_only", cmd.name);
    }
}
