use crate::commands::helpers::{arg, capitalize};
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};

pub fn run(directory: &mut Directory, args: &[String]) -> Result<CmdResult> {
    let raw_name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    let record = directory
        .find_mut(raw_name)
        .ok_or_else(|| DirectoryError::NameNotFound(raw_name.to_lowercase()))?;
    record.add_phone(phone)?;

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "{}'s phone added another one {}",
        capitalize(raw_name),
        phone
    ))))
}
