use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const POM: &str = r#"<project>
    <groupId>org.example</groupId>
    <artifactId>shell</artifactId>
    <version>1.0</version>
</project>"#;

const LOCK: &str = r#"
[[package]]
group = "com.adobe.flex"
name = "framework"
version = "3.2.0"

[[package]]
group = "com.adobe.flex"
name = "playerglobal"
version = "9"
scope = "external"

[[package]]
group = "com.adobe.flex"
name = "datavisualization"
version = "3.2.0"
scope = "rsl"

[[package]]
group = "org.example"
name = "module"
version = "1.0"
type = "swf"

[[package]]
group = "org.flexunit"
name = "flexunit"
version = "4.0"
scope = "test"
"#;

#[allow(deprecated)]
fn flexmojo_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("flexmojo").unwrap();
    cmd.env("HOME", home).env_remove("FLEX_HOME").env_remove("RUST_LOG");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();
    fs::write(tmp.path().join("flexmojo.lock"), LOCK).unwrap();
    tmp
}

#[test]
fn test_classify_defaults_to_compile_swcs() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["classify"])
        .assert()
        .success()
        .stdout("com.adobe.flex:framework:3.2.0 (compile)\n");
}

#[test]
fn test_classify_multiple_scopes_keeps_resolution_order() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["classify", "--scope", "rsl", "--scope", "external"])
        .assert()
        .success()
        .stdout(
            "com.adobe.flex:playerglobal:9 (external)\n\
             com.adobe.flex:datavisualization:3.2.0 (rsl)\n",
        );
}

#[test]
fn test_classify_by_type() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["classify", "--type", "swf"])
        .assert()
        .success()
        .stdout("org.example:module:1.0 (compile)\n");
}

#[test]
fn test_classify_all_scopes() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["classify", "--all-scopes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("framework"))
        .stdout(predicate::str::contains("flexunit:4.0 (test)"))
        .stdout(predicate::str::contains("module").not());
}

#[test]
fn test_classify_uses_global_config_scopes() {
    let tmp = project();
    let config_dir = tmp.path().join(".flexmojo");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[build]\nscopes = [\"test\"]\n",
    )
    .unwrap();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["classify"])
        .assert()
        .success()
        .stdout("org.flexunit:flexunit:4.0 (test)\n");
}

#[test]
fn test_classify_without_lockfile_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["classify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flexmojo.lock"));
}

#[test]
fn test_classify_duplicate_lock_entries_fail() {
    let tmp = project();
    fs::write(
        tmp.path().join("flexmojo.lock"),
        format!(
            "{LOCK}\n[[package]]\ngroup = \"com.adobe.flex\"\nname = \"framework\"\n\
             version = \"3.2.0\"\nscope = \"merged\"\n"
        ),
    )
    .unwrap();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["classify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("com.adobe.flex:framework:3.2.0"));
}
