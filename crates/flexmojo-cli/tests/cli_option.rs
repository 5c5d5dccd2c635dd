use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const POM: &str = r#"<project>
    <groupId>org.example</groupId>
    <artifactId>shell</artifactId>
    <version>1.0</version>
    <build>
        <pluginManagement>
            <plugins>
                <plugin>
                    <artifactId>flex-compiler-mojo</artifactId>
                    <configuration>
                        <targetPlayer>9.0.0</targetPlayer>
                        <debug>false</debug>
                    </configuration>
                </plugin>
            </plugins>
        </pluginManagement>
        <plugins>
            <plugin>
                <artifactId>flex-compiler-mojo</artifactId>
                <configuration>
                    <targetPlayer>9.0.124</targetPlayer>
                </configuration>
                <executions>
                    <execution>
                        <configuration>
                            <targetPlayer>10.0.0</targetPlayer>
                        </configuration>
                    </execution>
                </executions>
            </plugin>
            <plugin>
                <artifactId>flex-optimizer-mojo</artifactId>
                <configuration>
                    <level>3</level>
                </configuration>
            </plugin>
        </plugins>
    </build>
</project>"#;

#[allow(deprecated)]
fn flexmojo_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("flexmojo").unwrap();
    cmd.env("HOME", home).env_remove("FLEX_HOME").env_remove("RUST_LOG");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), POM).unwrap();
    tmp
}

#[test]
fn test_option_prints_most_specific_value() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["option", "targetPlayer"])
        .assert()
        .success()
        .stdout("10.0.0\n");
}

#[test]
fn test_option_falls_back_to_management() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["option", "debug"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_option_of_other_plugin() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["option", "level", "--plugin", "flex-optimizer-mojo"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_option_absent_is_not_an_error() {
    let tmp = project();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["option", "locales"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("not declared"));
}

#[test]
fn test_option_from_subdirectory() {
    let tmp = project();
    let nested = tmp.path().join("src/main/flex");
    fs::create_dir_all(&nested).unwrap();

    flexmojo_cmd(tmp.path())
        .current_dir(&nested)
        .args(["option", "targetPlayer"])
        .assert()
        .success()
        .stdout("10.0.0\n");
}

#[test]
fn test_option_without_pom_fails() {
    let tmp = TempDir::new().unwrap();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["option", "targetPlayer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find pom.xml"));
}

#[test]
fn test_option_with_malformed_pom_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("pom.xml"), "<project><artifactId>x</artifactId>").unwrap();

    flexmojo_cmd(tmp.path())
        .current_dir(tmp.path())
        .args(["option", "targetPlayer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project descriptor error"));
}
