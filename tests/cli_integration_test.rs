use assert_cmd::Command;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write_units(dir: &TempDir) {
    let units = dir.path().join("units");
    fs::create_dir_all(units.join("nested")).unwrap();
    fs::write(
        units.join("a.jsonl"),
        indoc! {r#"
            {"dimension":"indent_style","kind":"indentation","style":"space"}
            {"dimension":"indent_style","kind":"indentation","style":"space"}
            {"dimension":"csharp_style_var_elsewhere","kind":"flag","value":true}
            {"dimension":"dotnet_style_require_accessibility_modifiers","kind":"accessibility","category":"not_provided","is_interface_member":false}
        "#},
    )
    .unwrap();
    fs::write(
        units.join("nested/b.jsonl"),
        indoc! {r#"
            # second unit
            {"dimension":"indent_style","kind":"indentation","style":"tab"}
            {"dimension":"csharp_style_expression_bodied_methods","kind":"member","shape":{"expression_body":{"multi_line":false}}}
            {"dimension":"csharp_preferred_modifier_order","kind":"modifiers","keywords":["public","static"]}
        "#},
    )
    .unwrap();
}

fn stylemap(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("stylemap").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_analyze_emits_editorconfig() {
    let dir = TempDir::new().unwrap();
    write_units(&dir);

    let output = stylemap(&dir)
        .args(["analyze", "units", "--severity", "suggestion"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        indoc! {"
            root = true

            [*.cs]
            indent_style = space:suggestion
            csharp_style_var_elsewhere = true:suggestion
            csharp_style_expression_bodied_methods = when_on_single_line:suggestion
            dotnet_style_require_accessibility_modifiers = never:suggestion
            csharp_preferred_modifier_order = public,static,private,protected,internal,extern,new,virtual,abstract,sealed,override,readonly,unsafe,volatile,async:suggestion
        "}
    );
}

#[test]
fn test_analyze_uses_config_file() {
    let dir = TempDir::new().unwrap();
    write_units(&dir);
    fs::write(
        dir.path().join(".stylemap.toml"),
        indoc! {r#"
            [severity]
            default = "error"

            [severity.overrides]
            indent_style = "none"

            [thresholds]
            min_occurrences = 2

            [output]
            section = "*.{cs,csx}"
            root = false
        "#},
    )
    .unwrap();

    let output = stylemap(&dir).args(["analyze", "units"]).output().unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[*.{cs,csx}]\nindent_style = space:none\n"
    );
}

#[test]
fn test_analyze_json_output_to_file() {
    let dir = TempDir::new().unwrap();
    write_units(&dir);
    let report = dir.path().join("report.json");

    stylemap(&dir)
        .args(["analyze", "units", "--format", "json", "--output"])
        .arg(&report)
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(value["units"], 2);
    assert_eq!(value["dimensions"][0]["total_occurrences"], 3);
}

#[test]
fn test_analyze_skips_broken_unit() {
    let dir = TempDir::new().unwrap();
    write_units(&dir);
    fs::write(dir.path().join("units/broken.jsonl"), "{\"dimension\":\n").unwrap();

    let output = stylemap(&dir).args(["analyze", "units"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains("indent_style = space:warning"));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("broken.jsonl"));
}

#[test]
fn test_analyze_fails_without_observation_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();

    stylemap(&dir).args(["analyze", "empty"]).assert().failure();
}

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();

    stylemap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".stylemap.toml").exists());

    stylemap(&dir).arg("init").assert().failure();
    stylemap(&dir).args(["init", "--force"]).assert().success();
}
