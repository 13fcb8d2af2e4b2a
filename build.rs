use std::process::Command;

fn main() {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .expect("failed to execute rustup");
    let targets = String::from_utf8_lossy(&output.stdout);
    if !targets.lines().any(|t| t.trim() == "wasm32-unknown-unknown") {
        panic!(
            "the wasm32-unknown-unknown target is missing; install it with `rustup target add wasm32-unknown-unknown`"
        );
    }
}
