use crate::commands::helpers::{arg, capitalize};
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};

pub fn run(directory: &Directory, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?;

    let record = directory
        .find(name)
        .ok_or_else(|| DirectoryError::NameNotFound(name.to_lowercase()))?;

    Ok(CmdResult::with_message(CmdMessage::info(format!(
        "{} has {} phone number.",
        capitalize(name),
        record
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::DirectoryError;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn formats_the_whole_record_into_the_sentence() {
        let mut directory = Directory::new();
        add::run(&mut directory, &args(&["alice", "5551234567"])).unwrap();

        let result = run(&directory, &args(&["alice"])).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Alice has Contact name: alice, phones: 5551234567 phone number."
        );
    }

    #[test]
    fn absent_name_fails_like_every_other_lookup() {
        let directory = Directory::new();
        let err = run(&directory, &args(&["alice"])).unwrap_err();
        assert!(matches!(err, DirectoryError::NameNotFound(_)));
    }
}
