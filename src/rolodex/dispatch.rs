//! Keyword table and line parsing.
//!
//! A command line starts with one of the keywords below, followed by
//! whitespace-separated positional arguments. Matching is longest-keyword
//! wins, and the keyword must be followed by end-of-line or whitespace,
//! so `addison ...` never resolves to `add`.

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    AppendPhone,
    Change,
    Delete,
    Exit,
    Find,
    Seek,
    Hello,
    Help,
    Phone,
    ShowAll,
    RemovePhone,
    Unknown,
}

// Declaration order matches the bot's historical command table; the
// matcher re-sorts by descending keyword length, which keeps the
// observable command set identical while making resolution order-proof.
const TABLE: [(&str, Command); 12] = [
    ("add", Command::Add),
    ("append phone", Command::AppendPhone),
    ("change", Command::Change),
    ("delete", Command::Delete),
    ("exit", Command::Exit),
    ("find", Command::Find),
    ("seek", Command::Seek),
    ("hello", Command::Hello),
    ("help", Command::Help),
    ("phone", Command::Phone),
    ("show all", Command::ShowAll),
    ("remove phone", Command::RemovePhone),
];

static COMMANDS: Lazy<Vec<(&'static str, Command)>> = Lazy::new(|| {
    let mut table = TABLE.to_vec();
    table.sort_by_key(|(keyword, _)| std::cmp::Reverse(keyword.len()));
    table
});

#[derive(Debug)]
pub struct ParsedLine {
    pub command: Command,
    pub args: Vec<String>,
}

/// Resolve a raw input line to a command and its positional arguments.
///
/// The keyword is matched ASCII-case-insensitively; the arguments keep
/// the user's casing (messages echo names back as typed). No keyword
/// match resolves to [`Command::Unknown`].
pub fn parse(line: &str) -> ParsedLine {
    for (keyword, command) in COMMANDS.iter() {
        // Keywords are ASCII, so comparing the prefix in place keeps
        // multibyte lookalikes (e.g. the Kelvin sign, which lowercases
        // to `k`) from matching, and `keyword.len()` stays a valid
        // char boundary in `line`.
        let matched = line
            .get(..keyword.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword));
        if !matched {
            continue;
        }
        let rest = &line[keyword.len()..];
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let args = rest.split_whitespace().map(str::to_string).collect();
        return ParsedLine {
            command: *command,
            args,
        };
    }
    ParsedLine {
        command: Command::Unknown,
        args: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_longest_first() {
        for pair in COMMANDS.windows(2) {
            assert!(pair[0].0.len() >= pair[1].0.len());
        }
    }

    #[test]
    fn resolves_two_word_keywords() {
        let parsed = parse("append phone Alice 5559876543");
        assert_eq!(parsed.command, Command::AppendPhone);
        assert_eq!(parsed.args, vec!["Alice", "5559876543"]);

        let parsed = parse("remove phone alice 5551234567");
        assert_eq!(parsed.command, Command::RemovePhone);

        let parsed = parse("show all");
        assert_eq!(parsed.command, Command::ShowAll);
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn keyword_must_end_at_a_word_boundary() {
        // `addison` starts with the `add` keyword but is not a command.
        assert_eq!(parse("addison 5551234567").command, Command::Unknown);
        assert_eq!(parse("phones alice").command, Command::Unknown);
        assert_eq!(parse("add alice 5551234567").command, Command::Add);
    }

    #[test]
    fn multibyte_lookalikes_never_match_or_panic() {
        // U+212A (Kelvin sign) lowercases to `k`, which would turn this
        // into `seek` if matching went through `to_lowercase`.
        let parsed = parse("see\u{212A} alice 5551234567");
        assert_eq!(parsed.command, Command::Unknown);
        assert_eq!(parse("ﬁnd alice").command, Command::Unknown);
    }

    #[test]
    fn keyword_match_is_case_insensitive_but_args_keep_case() {
        let parsed = parse("ADD Alice 5551234567");
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args[0], "Alice");
    }

    #[test]
    fn unmatched_or_empty_lines_are_unknown() {
        assert_eq!(parse("").command, Command::Unknown);
        assert_eq!(parse("frobnicate").command, Command::Unknown);
        assert_eq!(parse(" add alice 5551234567").command, Command::Unknown);
    }

    #[test]
    fn bare_keyword_parses_with_no_args() {
        let parsed = parse("add");
        assert_eq!(parsed.command, Command::Add);
        assert!(parsed.args.is_empty());
    }
}
