use crate::error::{Result, TaskError};
use crate::input::commands::Command;
use crate::models::datetime;

/// Translate one trimmed, non-empty input line into a validated command.
/// Command keywords are matched case-sensitively as line prefixes.
pub fn parse(line: &str) -> Result<Command> {
    if line == "bye" {
        return Ok(Command::Exit);
    }
    if line == "list" {
        return Ok(Command::List);
    }

    if let Some(rest) = line.strip_prefix("mark ") {
        return Ok(Command::Mark(parse_task_number(rest)?));
    }
    if let Some(rest) = line.strip_prefix("unmark ") {
        return Ok(Command::Unmark(parse_task_number(rest)?));
    }
    if let Some(rest) = line.strip_prefix("delete ") {
        return Ok(Command::Delete(parse_task_number(rest)?));
    }

    if let Some(rest) = line.strip_prefix("todo") {
        let description = rest.trim();
        if description.is_empty() {
            return Err(TaskError::validation("Task description cannot be empty."));
        }
        return Ok(Command::AddTodo(description.to_string()));
    }

    if let Some(rest) = line.strip_prefix("deadline") {
        let rest = rest.trim();
        let Some((description, when)) = split_at_token(rest, "/by") else {
            return Err(TaskError::validation("Use: deadline <desc> /by <when>"));
        };
        let (description, when) = (description.trim(), when.trim());
        if description.is_empty() || when.is_empty() {
            return Err(TaskError::validation("Description and time required."));
        }
        return Ok(Command::AddDeadline {
            description: description.to_string(),
            due: datetime::parse_user(when)?,
        });
    }

    if let Some(rest) = line.strip_prefix("event") {
        let rest = rest.trim();
        let from_pos = find_token(rest, "/from");
        let to_pos = find_token(rest, "/to");
        let (Some(from_pos), Some(to_pos)) = (from_pos, to_pos) else {
            return Err(TaskError::validation(
                "Use: event <desc> /from <start> /to <end>",
            ));
        };
        if to_pos <= from_pos {
            return Err(TaskError::validation(
                "Use: event <desc> /from <start> /to <end>",
            ));
        }
        let description = rest[..from_pos].trim();
        let from = rest[from_pos + "/from".len()..to_pos].trim();
        let to = rest[to_pos + "/to".len()..].trim();
        if description.is_empty() || from.is_empty() || to.is_empty() {
            return Err(TaskError::validation("Provide desc, from, and to."));
        }
        return Ok(Command::AddEvent {
            description: description.to_string(),
            from: datetime::parse_user(from)?,
            to: datetime::parse_user(to)?,
        });
    }

    if let Some(rest) = line.strip_prefix("find") {
        let keyword = rest.trim();
        if keyword.is_empty() {
            return Err(TaskError::validation("Provide a keyword to find."));
        }
        return Ok(Command::Find(keyword.to_string()));
    }

    Err(TaskError::UnknownCommand)
}

fn parse_task_number(s: &str) -> Result<usize> {
    s.trim().parse().map_err(|_| TaskError::BadTaskNumber)
}

/// Byte offset of the first occurrence of `token` as a standalone word,
/// i.e. bounded by whitespace or the ends of the string. A token embedded
/// in a longer word (e.g. `/by` inside `/byline`) does not count.
fn find_token(haystack: &str, token: &str) -> Option<usize> {
    for (pos, _) in haystack.match_indices(token) {
        let before_ok = pos == 0 || haystack[..pos].ends_with(char::is_whitespace);
        let after = &haystack[pos + token.len()..];
        let after_ok = after.is_empty() || after.starts_with(char::is_whitespace);
        if before_ok && after_ok {
            return Some(pos);
        }
    }
    None
}

fn split_at_token<'a>(s: &'a str, token: &str) -> Option<(&'a str, &'a str)> {
    let pos = find_token(s, token)?;
    Some((&s[..pos], &s[pos + token.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chrono::NaiveDateTime;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn validation_message(result: Result<Command>) -> String {
        match result {
            Err(TaskError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn parses_exit_and_list() {
        assert_eq!(parse("bye").unwrap(), Command::Exit);
        assert_eq!(parse("list").unwrap(), Command::List);
    }

    #[test]
    fn bye_requires_exact_match() {
        assert!(matches!(parse("bye now"), Err(TaskError::UnknownCommand)));
        assert!(matches!(parse("Bye"), Err(TaskError::UnknownCommand)));
    }

    #[test]
    fn parses_todo() {
        assert_eq!(
            parse("todo read book").unwrap(),
            Command::AddTodo("read book".to_string())
        );
    }

    #[test]
    fn todo_without_description_fails() {
        assert_eq!(
            validation_message(parse("todo")),
            "Task description cannot be empty."
        );
        assert_eq!(
            validation_message(parse("todo   ")),
            "Task description cannot be empty."
        );
    }

    #[test]
    fn parses_deadline() {
        assert_eq!(
            parse("deadline return book /by 2019-10-15").unwrap(),
            Command::AddDeadline {
                description: "return book".to_string(),
                due: dt(2019, 10, 15, 0, 0),
            }
        );
    }

    #[test]
    fn deadline_without_by_token_fails_with_usage() {
        assert_eq!(
            validation_message(parse("deadline return book")),
            "Use: deadline <desc> /by <when>"
        );
    }

    #[test]
    fn deadline_missing_desc_or_time_fails() {
        assert_eq!(
            validation_message(parse("deadline /by 2019-10-15")),
            "Description and time required."
        );
        assert_eq!(
            validation_message(parse("deadline return book /by")),
            "Description and time required."
        );
    }

    #[test]
    fn deadline_with_bad_date_fails_with_date_error() {
        assert!(matches!(
            parse("deadline return book /by someday"),
            Err(TaskError::UnparsableDate)
        ));
    }

    #[test]
    fn by_embedded_in_a_word_is_not_a_token() {
        assert_eq!(
            validation_message(parse("deadline fix /byline article")),
            "Use: deadline <desc> /by <when>"
        );
    }

    #[test]
    fn parses_event() {
        assert_eq!(
            parse("event trip /from 2019-10-15 /to 2019-10-18").unwrap(),
            Command::AddEvent {
                description: "trip".to_string(),
                from: dt(2019, 10, 15, 0, 0),
                to: dt(2019, 10, 18, 0, 0),
            }
        );
    }

    #[test]
    fn event_with_missing_or_misordered_tokens_fails_with_usage() {
        let usage = "Use: event <desc> /from <start> /to <end>";
        assert_eq!(validation_message(parse("event trip")), usage);
        assert_eq!(
            validation_message(parse("event trip /from 2019-10-15")),
            usage
        );
        assert_eq!(
            validation_message(parse("event trip /to 2019-10-18 /from 2019-10-15")),
            usage
        );
    }

    #[test]
    fn event_with_empty_fields_fails() {
        assert_eq!(
            validation_message(parse("event /from 2019-10-15 /to 2019-10-18")),
            "Provide desc, from, and to."
        );
        assert_eq!(
            validation_message(parse("event trip /from /to 2019-10-18")),
            "Provide desc, from, and to."
        );
        assert_eq!(
            validation_message(parse("event trip /from 2019-10-15 /to")),
            "Provide desc, from, and to."
        );
    }

    #[test]
    fn event_does_not_require_from_before_to_in_time() {
        // Permissive on purpose: only token order is checked, not values.
        assert!(parse("event trip /from 2019-10-18 /to 2019-10-15").is_ok());
    }

    #[test]
    fn parses_mark_unmark_delete() {
        assert_eq!(parse("mark 2").unwrap(), Command::Mark(2));
        assert_eq!(parse("unmark 2").unwrap(), Command::Unmark(2));
        assert_eq!(parse("delete 3").unwrap(), Command::Delete(3));
    }

    #[test]
    fn non_numeric_task_number_fails() {
        assert!(matches!(parse("mark two"), Err(TaskError::BadTaskNumber)));
        assert!(matches!(parse("delete -1"), Err(TaskError::BadTaskNumber)));
        assert!(matches!(parse("unmark "), Err(TaskError::BadTaskNumber)));
    }

    #[test]
    fn parses_find() {
        assert_eq!(
            parse("find book").unwrap(),
            Command::Find("book".to_string())
        );
    }

    #[test]
    fn find_without_keyword_fails() {
        assert_eq!(
            validation_message(parse("find")),
            "Provide a keyword to find."
        );
    }

    #[test]
    fn unrecognized_input_is_unknown_command() {
        assert!(matches!(parse("blah"), Err(TaskError::UnknownCommand)));
        assert!(matches!(parse("LIST"), Err(TaskError::UnknownCommand)));
    }
}
