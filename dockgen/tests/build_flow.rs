//! End-to-end build flow against a fake build tool.
//!
//! Uses a shell script standing in for `docker` so the persist → spawn →
//! await → resolve path runs for real without an image daemon.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use dockgen::{
    BuildInvoker, Dockerfile, DockgenError, Instructions, Step, MANIFEST_FILENAME,
};

/// Write an executable fake build tool into `dir` and return its path.
fn write_tool(dir: &Path, script: &str) -> String {
    let path = dir.join("fake-build-tool");
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path.to_string_lossy().into_owned()
}

fn sample_manifest() -> Dockerfile {
    let mut deps = Step::new("deps", "Install build dependencies");
    deps.run("apk add --no-cache git");

    let mut image = Dockerfile::with_banner();
    image
        .from("node:18-alpine")
        .with_step(&deps)
        .workdir("/app")
        .copy(".", ".")
        .expose(8080)
        .cmd(["npx", "--yes", "serve", "-s", "-l", "8080"]);
    image
}

#[tokio::test]
async fn build_success_persists_manifest_and_passes_args() {
    let dir = tempfile::TempDir::new().unwrap();
    let tool = write_tool(dir.path(), "#!/bin/sh\nprintf '%s\\n' \"$*\" > argv.txt\nexit 0\n");

    let image = sample_manifest();
    let rendered = image.render();

    let invoker = BuildInvoker {
        program: tool,
        dir: dir.path().to_path_buf(),
        quiet: true,
    };
    invoker.build(&rendered, ".", "demo:latest").await.unwrap();

    // The persisted file is the exact render, byte for byte.
    let written = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
    assert_eq!(written, rendered);

    // The tool saw context, tag, and manifest path in the documented order.
    let argv = fs::read_to_string(dir.path().join("argv.txt")).unwrap();
    assert_eq!(argv, "build . -t demo:latest -f Dockerfile\n");
}

#[tokio::test]
async fn build_failure_surfaces_build_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let tool = write_tool(
        dir.path(),
        "#!/bin/sh\necho 'manifest rejected' >&2\nexit 7\n",
    );

    let invoker = BuildInvoker {
        program: tool,
        dir: dir.path().to_path_buf(),
        quiet: true,
    };
    let err = invoker
        .build("FROM alpine:3.19", ".", "demo:latest")
        .await
        .unwrap_err();
    assert!(matches!(err, DockgenError::BuildError));

    // The manifest was still persisted before the tool ran.
    assert!(dir.path().join(MANIFEST_FILENAME).exists());
}

#[tokio::test]
async fn missing_tool_surfaces_spawn_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let invoker = BuildInvoker {
        program: dir.path().join("not-installed").to_string_lossy().into_owned(),
        dir: dir.path().to_path_buf(),
        quiet: true,
    };
    let err = invoker
        .build("FROM alpine:3.19", ".", "demo:latest")
        .await
        .unwrap_err();
    assert!(matches!(err, DockgenError::SpawnError { .. }));
}
