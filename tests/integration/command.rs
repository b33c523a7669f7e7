use courseplan::core::types::Weekday;

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    normalized_lines, read_log_contents, run_with_input, try_execute_command, write_valid_config,
};

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "frobnicate\nexit\n");

    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    let expected = "Command resolution failed for 'frobnicate'. Unknown command: frobnicate";
    assert!(
        stderr_lines.iter().any(|line| line == expected),
        "stderr did not include expected error. stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn main_shows_schedule_after_adding_course() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let input = "add mon \"Test\" 09:00 10:00\nshow\nexit\n";
    let output = run_with_input(&dir, input);
    assert!(output.status.success(), "show run should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MONDAY"), "stdout did not include schedule");
    assert!(stdout.contains("Test"));
}

#[test]
fn invalid_time_is_rejected_inline() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "add mon \"Test\" 25:00 26:00\nshow\nexit\n");

    assert!(output.status.success());
    let stderr_lines = normalized_lines(&output.stderr);
    assert!(
        stderr_lines
            .iter()
            .any(|l| l.contains("Argument parsing failed")),
        "stderr was: {stderr_lines:?}"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No courses scheduled for Monday."));
}

#[test]
fn man_command_prints_general_manual() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines.iter().any(|line| line == "NAME"));
    assert!(stdout_lines
        .iter()
        .any(|line| line == "courseplan - Course schedule YAML generator."));
}

#[test]
fn man_command_prints_topic_manual() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "man add\nexit\n");

    assert!(output.status.success());
    let stdout_lines = normalized_lines(&output.stdout);
    assert!(stdout_lines
        .iter()
        .any(|line| line.contains("add <day> \"<course>\" <start> <end>")));
}

#[test]
fn add_and_remove_cascade_through_commands() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    execute_command(
        "add mon \"CS101\" 09:00 10:00",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command(
        "add wed \"CS101\" 09:00 10:00 true",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command(
        "link \"CS101\" https://example.com/cs101",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );

    // Removing one of two occurrences keeps the metadata.
    execute_command("del wed 1", &arg_parser, &command_parser, &mut ctx);
    assert_eq!(
        ctx.session.metadata_for("CS101"),
        Some("https://example.com/cs101")
    );

    // Removing the last occurrence drops name and metadata.
    execute_command("del mon 1", &arg_parser, &command_parser, &mut ctx);
    assert!(ctx.session.course_names().is_empty());
    assert!(ctx.session.metadata_for("CS101").is_none());
}

#[test]
fn link_rejects_non_url_values_in_url_mode() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    execute_command(
        "add mon \"CS101\" 09:00 10:00",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );

    let err = try_execute_command(
        "link \"CS101\" \"just text\"",
        &arg_parser,
        &command_parser,
        &mut ctx,
    )
    .unwrap_err();
    assert!(err.contains("valid URL"), "error was: {err}");
    assert!(ctx.session.metadata_for("CS101").is_none());
}

#[test]
fn del_with_bad_index_reports_validation_error() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    let err =
        try_execute_command("del mon 3", &arg_parser, &command_parser, &mut ctx).unwrap_err();
    assert!(err.contains("No entry 3 on Monday"), "error was: {err}");
}

#[test]
fn reset_clears_session_through_command() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    execute_command(
        "add fri \"Chem\" 13:00 14:30 true",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command("reset", &arg_parser, &command_parser, &mut ctx);

    assert!(!ctx.session.has_entries());
    assert!(ctx.session.entries(Weekday::Friday).is_empty());
}

#[test]
fn commands_are_logged_to_session_file() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "add mon \"Test\" 09:00 10:00\nexit\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("session log should exist");
    assert!(log.contains("Command run: add mon \"Test\" 09:00 10:00"));
    assert!(log.contains("Added to Monday"));
}
