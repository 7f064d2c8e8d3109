//! Descriptions and configuration read from disk.

use std::fs;

use fsmgen_conformance::full_pipeline;
use fsmgen_verilog::{VerilogEmitter, VerilogOptions, BANNER_BEGIN};
use tempfile::TempDir;

#[test]
fn json_and_toml_files_render_identically() {
    let tmp = TempDir::new().unwrap();
    let json_path = tmp.path().join("door.json");
    let toml_path = tmp.path().join("door.toml");
    fs::write(
        &json_path,
        r#"{"name": "door", "states": {"closed": {"open": "push"}, "open": {"closed": "pull"}}}"#,
    )
    .unwrap();
    fs::write(
        &toml_path,
        "name = \"door\"\n\n[states]\nclosed = { open = \"push\" }\nopen = { closed = \"pull\" }\n",
    )
    .unwrap();

    let from_json = fsmgen_config::load_description(&json_path).unwrap();
    let from_toml = fsmgen_config::load_description(&toml_path).unwrap();
    let a = full_pipeline(&from_json).unwrap().unwrap();
    let b = full_pipeline(&from_toml).unwrap().unwrap();
    assert_eq!(a.verilog, b.verilog);
    assert_eq!(a.dot, b.dot);
    assert!(a.verilog.contains("wire door_closed_open = ((door_state == door_closed) & (push));"));
}

#[test]
fn config_file_enables_banner() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join(fsmgen_config::CONFIG_FILE_NAME);
    fs::write(&config_path, "[verilog]\nbanner = true\n\n[lint]\nallow = \"W102\"\n").unwrap();
    let config = fsmgen_config::load_config(&config_path).unwrap();

    let raw = serde_json::json!({"states": ["a", "b"]});
    let fsm = fsmgen_normalize::normalize(&raw).unwrap().unwrap();
    let text = VerilogEmitter::new(VerilogOptions {
        banner: config.verilog.banner,
    })
    .emit(&fsm);
    assert!(text.starts_with(BANNER_BEGIN));
    assert!(config.lint.is_allowed("W102", "unreachable-state"));
}
