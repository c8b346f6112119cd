use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;

/// List every record, sorted by key for stable output, then the summary
/// line the bot has always printed.
pub fn run(directory: &Directory) -> CmdResult {
    let mut lines: Vec<(String, String)> = directory
        .records()
        .map(|record| (record.name().key(), record.to_string()))
        .collect();
    lines.sort_by(|a, b| a.0.cmp(&b.0));

    let mut result =
        CmdResult::default().with_listed_records(lines.into_iter().map(|(_, line)| line).collect());
    result.add_message(CmdMessage::info("There is all records in dictionary"));
    result
}
