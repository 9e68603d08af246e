//! Shell prompt rendering: `user@host:cwd$ command args`.

use crate::command;
use crate::config::PromptConfig;
use crate::style::{Style, StyledLine};

/// The `user@host:cwd$ ` prefix.
pub fn prefix(config: &PromptConfig) -> StyledLine {
    StyledLine::single(format!("{}@{}", config.user, config.host), Style::PromptUser)
        .push(":", Style::PromptSeparator)
        .push(config.cwd.clone(), Style::PromptPath)
        .push("$ ", Style::PromptSeparator)
}

/// Prompt followed by `input`, the first word coloured by whether it names
/// a known command.
pub fn echo(config: &PromptConfig, input: &str) -> StyledLine {
    let mut line = prefix(config);
    if input.is_empty() {
        return line;
    }

    let word = command::first_word(input);
    let style = if command::is_known(word) {
        Style::CommandKnown
    } else {
        Style::CommandUnknown
    };
    line = line.push(word, style);

    let rest = &input[word.len()..];
    if !rest.is_empty() {
        line = line.push(rest, Style::CommandArgs);
    }
    line
}
