//! Command registry and resolution.
//!
//! The first word of a submission (everything before the first space) is
//! matched case-sensitively against [`COMMANDS`]. Anything else resolves to
//! [`Resolved::NotFound`] carrying the full original input.

/// Logical commands understood by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    About,
    Experience,
    Skills,
    Contact,
    Help,
    Clear,
    Repeat,
    Ls,
    Pwd,
    Exit,
}

impl Command {
    /// Built-ins that act immediately instead of playing a content block.
    pub fn is_builtin(self) -> bool {
        matches!(self, Command::Clear | Command::Repeat | Command::Exit)
    }
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Primary name (e.g., "exp").
    pub name: &'static str,
    /// Aliases (e.g., ["projects"]).
    pub aliases: &'static [&'static str],
    /// Short description shown by `help`.
    pub description: &'static str,
    /// Listed by `help`.
    pub listed: bool,
    pub command: Command,
}

impl CommandDef {
    /// Returns true if `word` is the name or one of the aliases (exact match).
    pub fn matches(&self, word: &str) -> bool {
        self.name == word || self.aliases.contains(&word)
    }

    /// Returns the display name with aliases, e.g., "exit (quit)".
    pub fn display_name(&self) -> String {
        if self.aliases.is_empty() {
            self.name.to_string()
        } else {
            format!("{} ({})", self.name, self.aliases.join(", "))
        }
    }
}

/// Available commands.
pub const COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "about",
        aliases: &[],
        description: "Who I am",
        listed: true,
        command: Command::About,
    },
    CommandDef {
        name: "exp",
        aliases: &["projects"],
        description: "View my experience",
        listed: true,
        command: Command::Experience,
    },
    CommandDef {
        name: "skills",
        aliases: &[],
        description: "See my competencies",
        listed: true,
        command: Command::Skills,
    },
    CommandDef {
        name: "contact",
        aliases: &[],
        description: "Get in touch",
        listed: true,
        command: Command::Contact,
    },
    CommandDef {
        name: "clear",
        aliases: &[],
        description: "Clear the terminal",
        listed: true,
        command: Command::Clear,
    },
    CommandDef {
        name: "repeat",
        aliases: &[],
        description: "Replay the intro",
        listed: true,
        command: Command::Repeat,
    },
    CommandDef {
        name: "help",
        aliases: &[],
        description: "List available commands",
        listed: false,
        command: Command::Help,
    },
    CommandDef {
        name: "exit",
        aliases: &["quit"],
        description: "Leave the terminal",
        listed: true,
        command: Command::Exit,
    },
    CommandDef {
        name: "ls",
        aliases: &[],
        description: "List directory contents",
        listed: false,
        command: Command::Ls,
    },
    CommandDef {
        name: "pwd",
        aliases: &[],
        description: "Print working directory",
        listed: false,
        command: Command::Pwd,
    },
];

/// Outcome of resolving a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Known(Command),
    /// Unmatched first word; holds the full original input.
    NotFound(String),
}

/// Splits `input` on the first space and returns the word before it.
pub fn first_word(input: &str) -> &str {
    input.split_once(' ').map_or(input, |(word, _)| word)
}

/// Looks up a single word in the registry.
pub fn lookup(word: &str) -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|def| def.matches(word))
}

/// True when the first word of `input` names a command.
pub fn is_known(input: &str) -> bool {
    lookup(first_word(input)).is_some()
}

/// Resolves a submitted line.
pub fn resolve(input: &str) -> Resolved {
    match lookup(first_word(input)) {
        Some(def) => Resolved::Known(def.command),
        None => Resolved::NotFound(input.to_string()),
    }
}

/// Commands shown by `help`, in registry order.
pub fn listed() -> impl Iterator<Item = &'static CommandDef> {
    COMMANDS.iter().filter(|def| def.listed)
}
