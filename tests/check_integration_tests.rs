mod common;

use predicates::prelude::*;

use common::{CLEAN_HEADER, TestFixture};

#[test]
fn clean_file_passes_recommended_rules() {
    let fixture = TestFixture::new();
    fixture.create_file("Point.h", CLEAN_HEADER);

    style_guard!()
        .current_dir(fixture.path())
        .args(["check", "Point.h"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Summary: 1 files checked, 1 passed, 0 failed (0 errors)",
        ));
}

#[test]
fn violations_exit_with_one_and_name_the_rule() {
    let fixture = TestFixture::new();
    let long = "x".repeat(95);
    fixture.create_file("bad.cxx", &format!("int a   ;\n// {long}\n"));

    style_guard!()
        .current_dir(fixture.path())
        .args(["check", "bad.cxx", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bad.cxx: [LEN] line 2: line length is 98 characters (max 80)"))
        .stdout(predicate::str::contains("bad.cxx: [SEM] line 1: 3 spaces before semicolon (max 0)"));
}

#[test]
fn local_config_is_discovered() {
    let fixture = TestFixture::new();
    fixture.create_config("[semicolon_space]\nmax = 3\n");
    fixture.create_file("a.cxx", "int a   ;\n\tint b;\n");

    style_guard!()
        .current_dir(fixture.path())
        .args(["check", "a.cxx"])
        .assert()
        .code(0);
}

#[test]
fn no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[semicolon_space]\nmax = 3\n");
    fixture.create_file("a.cxx", "int a   ;\n");

    style_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "a.cxx"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[SEM]"));
}

#[test]
fn header_and_include_guard_from_config() {
    let fixture = TestFixture::new();
    fixture.create_file("conf/header.txt", "// Copyright Example\n");
    let config = fixture.create_file(
        "conf/style.toml",
        "[header]\ntemplate = \"header.txt\"\n\n[include_guard]\npattern = \"<NAMEOFCLASS>_H\"\n",
    );
    fixture.create_file("Good.h", "// Copyright Example\n#ifndef GOOD_H\n#define GOOD_H\n#endif\n");
    fixture.create_file("Bad.h", "// Copyright Nobody\n#ifndef GUARD\n#define GUARD\n#endif\n");

    style_guard!()
        .current_dir(fixture.path())
        .arg("check")
        .arg("--config")
        .arg(&config)
        .args(["Good.h", "Bad.h", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Bad.h: [HRD] line 1:"))
        .stdout(predicate::str::contains("Bad.h: [DEF] line 2: include guard is GUARD, expected BAD_H"))
        .stdout(predicate::str::contains("Good.h:").not());
}

#[test]
fn json_output_lists_findings_per_file() {
    let fixture = TestFixture::new();
    fixture.create_file("a.cxx", "\tint a;");

    let output = style_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--format", "json", "a.cxx"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["summary"]["failed"], 1);
    let rules: Vec<_> = value["results"][0]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["rule"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(rules, vec!["eof_new_line", "tabs", "indent"]);
}

#[test]
fn info_flag_shows_informational_records() {
    let fixture = TestFixture::new();
    fixture.create_file("main.cxx", "int main() { return 0; }\n");

    style_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--info", "--color", "never", "main.cxx"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("main.cxx: [DCL] line 1: no class declaration found"));
}

#[test]
fn many_files_are_reported_in_argument_order() {
    let fixture = TestFixture::new();
    let names: Vec<String> = (0..8).map(|i| format!("f{i}.cxx")).collect();
    for name in &names {
        fixture.create_file(name, "int a ;\n");
    }

    let assert = style_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .args(&names)
        .assert()
        .code(1);

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let order: Vec<_> = stdout
        .lines()
        .filter_map(|line| line.split(':').next())
        .filter(|name| name.ends_with(".cxx"))
        .collect();
    assert_eq!(order, names);
}
