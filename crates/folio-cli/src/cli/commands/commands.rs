//! `folio commands`: the shell's command list.

use folio_core::command;

pub fn list() {
    println!("Available commands:");
    for def in command::listed() {
        println!("  {:<16} {}", def.display_name(), def.description);
    }
    if let Some(help) = command::lookup("help") {
        println!("  {:<16} {}", help.display_name(), help.description);
    }
}
