use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

mod sym_index;

const USAGE: &str = "\
Usage:
  cargo xtask sym-index [options]";

pub fn run() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::from(1);
    };

    match command.as_str() {
        "sym-index" => sym_index::run(args.collect()),
        _ => {
            eprintln!("{USAGE}");
            ExitCode::from(1)
        }
    }
}

/// The nearest ancestor of `start` laid out as this workspace: a manifest
/// with the `xtask` member next to it.
fn workspace_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join("Cargo.toml").is_file() && dir.join("xtask/Cargo.toml").is_file())
        .map(Path::to_path_buf)
}

/// Resolve a user-supplied path against the current directory.
fn resolve_path(input: &Path) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = workspace_root_from(&cwd)
        .or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).parent().map(Path::to_path_buf));
    resolve_path_from(input, &cwd, root.as_deref())
}

/// Absolute paths are taken as given. A relative path stays under `cwd` when
/// it, or the directory it would be created in, already exists there, and
/// otherwise lands under the workspace root.
fn resolve_path_from(input: &Path, cwd: &Path, root: Option<&Path>) -> PathBuf {
    if input.is_absolute() {
        return input.to_path_buf();
    }

    let from_cwd = cwd.join(input);
    let parent_exists = from_cwd.parent().is_some_and(Path::is_dir);
    if from_cwd.exists() || parent_exists {
        return from_cwd;
    }

    match root {
        Some(root) => root.join(input),
        None => from_cwd,
    }
}
