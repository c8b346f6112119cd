use crate::commands::helpers::arg;
use crate::commands::CmdResult;
use crate::directory::Directory;
use crate::error::{DirectoryError, Result};

pub fn run(directory: &Directory, args: &[String]) -> Result<CmdResult> {
    let name = arg(args, 0)?;

    let record = directory
        .find(name)
        .ok_or_else(|| DirectoryError::NameNotFound(name.to_lowercase()))?;

    Ok(CmdResult::default().with_listed_records(vec![record.to_string()]))
}
