use std::process::Command;

/// Run git and return its trimmed output, or "unknown" outside a repository.
fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Capture Git values during compilation (not at runtime)
    println!("cargo:rustc-env=GIT_HASH={}", git(&["rev-parse", "--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_DATE={}", git(&["log", "-1", "--format=%ci"]));
    println!("cargo:rerun-if-changed=.git/HEAD");
}
