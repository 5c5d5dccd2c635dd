use flexmojo_core::artifact::{scope, SWC};
use flexmojo_core::project::ProjectDescriptor;
use flexmojo_resolver::{ArtifactClassifier, DependencyResolver, LockfileResolver};
use flexmojo_util::errors::FlexmojoError;
use tempfile::TempDir;

const LOCK: &str = r#"
[[package]]
group = "com.adobe.flex.framework"
name = "framework"
version = "3.0.0"

[[package]]
group = "com.adobe.flex.framework"
name = "playerglobal"
version = "9-3.0.0"
scope = "external"

[[package]]
group = "net.digitalprimates"
name = "fluint"
version = "1.0.0"
scope = "test"

[[package]]
group = "com.adobe.flex.framework"
name = "framework"
version = "3.0.0-rb"
type = "rb.swc"
"#;

fn project_in(dir: &std::path::Path) -> ProjectDescriptor {
    ProjectDescriptor {
        basedir: dir.to_path_buf(),
        artifact_id: "app".to_string(),
        ..Default::default()
    }
}

#[test]
fn resolves_lockfile_next_to_project() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("flexmojo.lock"), LOCK).unwrap();
    let resolver = LockfileResolver::for_project(&project_in(tmp.path()));
    assert_eq!(resolver.path(), tmp.path().join("flexmojo.lock"));

    let set = resolver.resolve().unwrap();
    assert_eq!(set.len(), 4);
}

#[test]
fn classifier_over_lockfile() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("flexmojo.lock"), LOCK).unwrap();
    let resolver = LockfileResolver::for_project(&project_in(tmp.path()));
    let classifier = ArtifactClassifier::new(resolver);

    let compile = classifier.classify(SWC, &[scope::COMPILE]).unwrap();
    assert_eq!(compile.len(), 1);
    assert_eq!(compile[0].id.to_string(), "com.adobe.flex.framework:framework:3.0.0");

    let external = classifier.classify(SWC, &[scope::EXTERNAL, scope::RSL]).unwrap();
    assert_eq!(external.len(), 1);
    assert_eq!(external[0].id.name, "playerglobal");
}

#[test]
fn missing_lockfile_is_resolution_error() {
    let tmp = TempDir::new().unwrap();
    let err = LockfileResolver::for_project(&project_in(tmp.path()))
        .resolve()
        .unwrap_err();
    assert!(matches!(err, FlexmojoError::Resolution { .. }));
    assert!(err.to_string().contains("flexmojo.lock"));
}

#[test]
fn duplicate_entries_are_resolution_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("flexmojo.lock");
    std::fs::write(
        &path,
        "[[package]]\ngroup = \"g\"\nname = \"a\"\nversion = \"1\"\n\n\
         [[package]]\ngroup = \"g\"\nname = \"a\"\nversion = \"1\"\n",
    )
    .unwrap();
    let err = LockfileResolver::new(&path).resolve().unwrap_err();
    assert!(err.to_string().contains("more than once"));
}
