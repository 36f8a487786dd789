use super::{HelpBook, HelpFlag, HelpTopic, Section};

pub(crate) fn book() -> HelpBook<'static> {
    HelpBook {
        title: "Simple To-Do",
        usage: "todo [command] [args]",
        topics: ALL_TOPICS,
        footer: &[
            "Run `todo` with no command to see the list. Use `todo help <command>` for details, e.g. `todo help edit`.",
        ],
    }
}

const ALL_TOPICS: &[HelpTopic<'static>] = &[
    HelpTopic {
        name: "list",
        summary: "Show every item with its number.",
        usage: "todo list [--plain] [--width N]",
        details: &[
            "Items are numbered from 1 in the order they were added; use these numbers with edit and delete.",
            "Long items are cut to the terminal width with an ellipsis.",
        ],
        flags: &[
            HelpFlag { name: "--plain", desc: "Disable color." },
            HelpFlag {
                name: "--width <N>",
                desc: "Fit rows to N columns instead of the terminal width.",
            },
        ],
        aliases: &["ls"],
        section: Section::Command,
        examples: &["todo list", "todo ls --plain"],
    },
    HelpTopic {
        name: "add",
        summary: "Append an item to the end of the list.",
        usage: "todo add <text...>",
        details: &[
            "All words after the command are joined with spaces into one item.",
            "Line breaks are folded into spaces; blank text is rejected.",
        ],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &["todo add Buy milk", "todo add \"Call the dentist\""],
    },
    HelpTopic {
        name: "edit",
        summary: "Change the text of an item.",
        usage: "todo edit <n> [text...]",
        details: &[
            "With text, item n is replaced directly.",
            "Without text, the item opens in $VISUAL or $EDITOR (default vi). Saving and quitting stores the edit; an unchanged item is left alone.",
        ],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &["todo edit 2 Gym at 6", "todo edit 2"],
    },
    HelpTopic {
        name: "delete",
        summary: "Remove one or more items by number.",
        usage: "todo delete <n...>",
        details: &[
            "Numbers refer to the list as last shown, so `todo delete 1 3` removes the first and third items.",
            "Nothing is removed if any number is out of range.",
        ],
        flags: &[],
        aliases: &["rm"],
        section: Section::Command,
        examples: &["todo delete 3", "todo rm 1 2"],
    },
    HelpTopic {
        name: "path",
        summary: "Print the location of the data file.",
        usage: "todo path",
        details: &["The data file holds one item per line and is rewritten on every change."],
        flags: &[],
        aliases: &[],
        section: Section::Command,
        examples: &[],
    },
    HelpTopic {
        name: "help",
        summary: "Show this overview or help for one command.",
        usage: "todo help [command]",
        details: &[],
        flags: &[],
        aliases: &["-h", "--help"],
        section: Section::Command,
        examples: &["todo help delete"],
    },
    HelpTopic {
        name: "SIMPLE_TODO_DIR",
        summary: "Directory holding data.txt (default: ~/.simple_todo).",
        usage: "SIMPLE_TODO_DIR",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "SIMPLE_TODO_LOG",
        summary: "Log level on stderr: off, error, warn, info, debug, trace (default: warn).",
        usage: "SIMPLE_TODO_LOG",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "EDITOR",
        summary: "Editor for `todo edit <n>`; $VISUAL takes precedence.",
        usage: "VISUAL / EDITOR",
        details: &[],
        flags: &[],
        aliases: &["VISUAL"],
        section: Section::Environment,
        examples: &[],
    },
    HelpTopic {
        name: "NO_COLOR",
        summary: "Disable colored output.",
        usage: "NO_COLOR",
        details: &[],
        flags: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &[],
    },
];
