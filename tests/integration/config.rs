use std::io::BufReader;

use courseplan::config::Config;
use courseplan::core::types::MetadataKind;
use courseplan::prompter::flows::config_edit::ConfigEditFlow;
use courseplan::prompter::flows::credentials_flow::CredentialsFlow;
use courseplan::prompter::prompter::Prompter;

use crate::common::{build_context, make_temp_dir, run_with_input, write_valid_config};

#[test]
fn main_allows_running_config_command() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "config\nN\nexit\n");
    assert!(output.status.success(), "config run should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("CONFIG"),
        "stdout did not include CONFIG table"
    );
}

#[test]
fn config_edit_persists_metadata_kind_change() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let flow = ConfigEditFlow::new(&mut ctx);
    let input = b"Y\n0\nxpath\nN\n";
    let reader = BufReader::new(&input[..]);
    Prompter::new()
        .run_with_reader(flow, false, reader)
        .expect("config flow should run");

    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(
        cfg.metadata_kind(),
        MetadataKind::Xpath,
        "metadata kind should persist to disk"
    );
}

#[test]
fn credentials_flow_writes_env_file_from_reader() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let mut ctx = build_context(&dir);
    let flow = CredentialsFlow::new(&mut ctx);
    let input = b"user1\nhunter2\n\n";
    let reader = BufReader::new(&input[..]);
    Prompter::new()
        .run_with_reader(flow, false, reader)
        .expect("credentials flow should run");

    let contents = std::fs::read_to_string(dir.join(".env")).unwrap();
    assert_eq!(contents, "lmsid=user1\npassword=hunter2\nwebhookurl=null");
}

#[test]
fn main_allows_running_credentials_command() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);

    let output = run_with_input(&dir, "credentials\nexit\n");
    assert!(output.status.success(), "credentials run should succeed");
}
