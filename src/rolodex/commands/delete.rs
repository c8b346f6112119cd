use crate::commands::helpers::{arg, capitalize};
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};

pub fn run(directory: &mut Directory, args: &[String]) -> Result<CmdResult> {
    let raw_name = arg(args, 0)?;

    // The directory itself treats absence as a no-op; the command does not.
    if directory.find(raw_name).is_none() {
        return Err(DirectoryError::NameNotFound(raw_name.to_lowercase()));
    }
    directory.delete(raw_name);

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Record with name {} deleted.",
        capitalize(raw_name)
    ))))
}
