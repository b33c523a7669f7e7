use std::fs;

use crate::common::{
    CommandArgParser, CommandParser, build_context, execute_command, make_temp_dir,
    try_execute_command, write_valid_config, write_xpath_config,
};

#[test]
fn export_schedule_writes_expected_yaml() {
    let dir = make_temp_dir("export");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    execute_command(
        "add mon \"CS101\" 09:00 10:00 true",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command("export schedule", &arg_parser, &command_parser, &mut ctx);

    let yaml = fs::read_to_string(dir.join("exports").join("course_details.yaml")).unwrap();
    assert_eq!(
        yaml,
        "Monday:\n  - course: CS101\n    start_time: '09:00'\n    end_time: '10:00'\n    send_message: True\n"
    );
}

#[test]
fn export_schedule_requires_entries() {
    let dir = make_temp_dir("export");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    let err =
        try_execute_command("export schedule", &arg_parser, &command_parser, &mut ctx).unwrap_err();
    assert!(err.contains("No schedule entries to export"));
    assert!(!dir.join("exports").join("course_details.yaml").exists());
}

#[test]
fn export_metadata_uses_placeholder_for_unlinked_courses() {
    let dir = make_temp_dir("export");
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
        "add tue \"Math\" 11:00 12:00",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command(
        "link \"Math\" https://example.com/math",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command("export metadata", &arg_parser, &command_parser, &mut ctx);

    let yaml = fs::read_to_string(dir.join("exports").join("course_url.yaml")).unwrap();
    assert_eq!(
        yaml,
        "CS101: https://example.com/course\nMath: https://example.com/math\n"
    );
}

#[test]
fn export_metadata_requires_courses() {
    let dir = make_temp_dir("export");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    let err =
        try_execute_command("export metadata", &arg_parser, &command_parser, &mut ctx).unwrap_err();
    assert!(err.contains("No courses to export"));
}

#[test]
fn xpath_mode_exports_locator_file() {
    let dir = make_temp_dir("export");
    write_xpath_config(&dir);
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
        "add tue \"Math\" 11:00 12:00",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command(
        "link \"CS101\" /html/body/div[4]/span[3]",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command("export metadata", &arg_parser, &command_parser, &mut ctx);

    let yaml = fs::read_to_string(dir.join("exports").join("course_xpath.yaml")).unwrap();
    assert_eq!(
        yaml,
        "CS101: /html/body/div[4]/span[3]\nMath: /html/body/div[1]/a\n"
    );
    assert!(!dir.join("exports").join("course_url.yaml").exists());
}

#[test]
fn exports_reflect_entry_order_across_days() {
    let dir = make_temp_dir("export");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let arg_parser = CommandArgParser::new();
    let command_parser = CommandParser::new();

    // Friday first in input order, but Monday must lead in the document.
    execute_command(
        "add fri \"Chem\" 08:00 09:00",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command(
        "add mon \"Bio\" 10:00 11:00",
        &arg_parser,
        &command_parser,
        &mut ctx,
    );
    execute_command("export schedule", &arg_parser, &command_parser, &mut ctx);

    let yaml = fs::read_to_string(dir.join("exports").join("course_details.yaml")).unwrap();
    let monday = yaml.find("Monday:").unwrap();
    let friday = yaml.find("Friday:").unwrap();
    assert!(monday < friday);
}
