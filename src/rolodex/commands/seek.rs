use crate::commands::helpers::arg;
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};

pub fn run(directory: &Directory, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    // An unknown name reports the phone as missing, matching the bot's
    // long-standing message for this command.
    let record = directory
        .find(name)
        .ok_or_else(|| DirectoryError::PhoneNotFound(phone.to_string()))?;

    let message = match record.find_phone(phone)? {
        Some(found) => CmdMessage::info(found.as_str()),
        None => CmdMessage::warning(format!("Phone {} not found.", phone)),
    };
    Ok(CmdResult::with_message(message))
}
