use crate::commands::{CmdMessage, CmdResult};

const HELP_TEXT: &str = "Use next commands:
    add 'name' 'phone'  - add name and phone number to the dictionary
    append 'name' 'phone'  - add phone number to the name in dictionary
    change 'name' 'old_phone' 'new_phone' - change phone number in this name
    delete 'name' - delete name and phones from the dictionary
    find 'name' - find info by name
    seek 'name' 'phone' - find phone for name in the dictionary
    phone 'name' - show phone number for this name
    remove phone 'name' 'phone' - remove phone for this name
    show all  -  show all records in memory
    exit - exit from bot";

pub fn hello() -> CmdResult {
    CmdResult::with_message(CmdMessage::info("How can I help you?:"))
}

pub fn help() -> CmdResult {
    CmdResult::with_message(CmdMessage::info(HELP_TEXT))
}

/// The farewell plus the terminate flag; the loop stops on the flag, not
/// by re-reading the raw input line.
pub fn exit() -> CmdResult {
    CmdResult::with_message(CmdMessage::info("Good Bye!")).terminating()
}

pub fn unknown() -> CmdResult {
    CmdResult::with_message(CmdMessage::warning("Unknown command. Try again."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exit_terminates() {
        assert!(exit().terminate);
        assert!(!hello().terminate);
        assert!(!help().terminate);
        assert!(!unknown().terminate);
    }

    #[test]
    fn help_lists_every_command() {
        let result = help();
        let text = &result.messages[0].content;
        for keyword in [
            "add", "append", "change", "delete", "find", "seek", "phone", "remove", "show all",
            "exit",
        ] {
            assert!(text.contains(keyword), "help is missing {}", keyword);
        }
    }
}
