use crate::commands::helpers::arg;
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};

pub fn run(directory: &mut Directory, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let record = directory
        .find_mut(name)
        .ok_or_else(|| DirectoryError::PhoneNotFound(phone.to_string()))?;
    record.remove_phone(phone)?;

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "{} deleted.",
        phone
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, append};
    use crate::error::DirectoryError;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn removes_exactly_one_phone() {
        let mut directory = Directory::new();
        add::run(&mut directory, &args(&["alice", "5551234567"])).unwrap();
        append::run(&mut directory, &args(&["alice", "5559876543"])).unwrap();

        run(&mut directory, &args(&["alice", "5551234567"])).unwrap();
        let phones = directory.find("alice").unwrap().phones();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "5559876543");
    }

    #[test]
    fn absent_phone_fails() {
        let mut directory = Directory::new();
        add::run(&mut directory, &args(&["alice", "5551234567"])).unwrap();

        let err = run(&mut directory, &args(&["alice", "5550000000"])).unwrap_err();
        assert!(matches!(err, DirectoryError::PhoneNotFound(_)));
    }

    #[test]
    fn absent_name_fails_with_the_same_kind() {
        let mut directory = Directory::new();
        let err = run(&mut directory, &args(&["bob", "5551234567"])).unwrap_err();
        assert!(matches!(err, DirectoryError::PhoneNotFound(_)));
    }
}
