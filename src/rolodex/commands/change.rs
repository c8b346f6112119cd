use crate::commands::helpers::arg;
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};

pub fn run(directory: &mut Directory, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    let record = directory
        .find_mut(name)
        .ok_or_else(|| DirectoryError::NameNotFound(name.to_lowercase()))?;
    record.edit_phone(old_phone, new_phone)?;

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Phone {} changed to phone {}",
        old_phone, new_phone
    ))))
}
