use super::*;

#[test]
fn parses_add_with_raw_title() {
    assert_eq!(
        parse_command("add   Walk dog ").expect("parse"),
        Some(UiCommand::Add("  Walk dog ".into()))
    );
    assert_eq!(
        parse_command("add").expect("parse"),
        Some(UiCommand::Add(String::new()))
    );
}

#[test]
fn parses_ids_with_optional_hash() {
    assert_eq!(
        parse_command("toggle 1").expect("parse"),
        Some(UiCommand::Toggle(TodoId(1)))
    );
    assert_eq!(
        parse_command("  d #12").expect("parse"),
        Some(UiCommand::Delete(TodoId(12)))
    );
}

#[test]
fn blank_line_is_ignored() {
    assert_eq!(parse_command("   ").expect("parse"), None);
    assert_eq!(parse_command("").expect("parse"), None);
}

#[test]
fn reports_bad_ids_and_unknown_verbs() {
    assert_eq!(
        parse_command("toggle"),
        Err(CommandError::MissingId("toggle"))
    );
    assert_eq!(
        parse_command("toggle abc"),
        Err(CommandError::InvalidId {
            command: "toggle",
            raw: "abc".into(),
        })
    );
    assert_eq!(
        parse_command("frobnicate 3"),
        Err(CommandError::Unknown("frobnicate".into()))
    );
}

#[test]
fn simple_verbs_are_case_insensitive() {
    assert_eq!(parse_command("LIST").expect("parse"), Some(UiCommand::List));
    assert_eq!(parse_command("Quit").expect("parse"), Some(UiCommand::Quit));
    assert_eq!(parse_command("?").expect("parse"), Some(UiCommand::Help));
}
