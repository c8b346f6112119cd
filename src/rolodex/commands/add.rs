use crate::commands::helpers::arg;
use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};
use crate::model::Record;

pub fn run(directory: &mut Directory, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?.to_lowercase();
    let phone = arg(args, 1)?;

    if directory.find(&name).is_some() {
        return Err(DirectoryError::NameExists(name));
    }

    // Validate the phone before the record is inserted, so a rejected
    // phone leaves the directory untouched.
    let mut record = Record::new(&name);
    record.add_phone(phone)?;
    directory.add_record(record);

    Ok(CmdResult::with_message(CmdMessage::success(format!(
        "Add name = {}, phone = {}",
        name, phone
    ))))
}
