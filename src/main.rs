//! Host-side helper: `cargo run` compiles the page script with wasm-pack
//! into `static/pkg` and serves `static/` locally.
//!
//! The port comes from `FOLIO_FX_PORT` (default 8000).

use std::env;
use std::process::{Command, ExitCode, Stdio};

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    match env::var("FOLIO_FX_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("FOLIO_FX_PORT={raw:?} is not a port, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn build_pkg() -> Result<(), String> {
    println!("Building WASM pkg …");
    let status = Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
        .map_err(|_| {
            "wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/)".to_owned()
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("wasm-pack exited with {status}"))
    }
}

fn main() -> ExitCode {
    if let Err(err) = build_pkg() {
        eprintln!("{err}");
        if !std::path::Path::new("static/pkg").exists() {
            return ExitCode::FAILURE;
        }
        eprintln!("serving the previously built static/pkg");
    }

    let port = port();
    println!("Serving static/ at http://127.0.0.1:{port} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match server {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            eprintln!("http server exited with {status}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("failed to start http server: {err}");
            ExitCode::FAILURE
        }
    }
}
