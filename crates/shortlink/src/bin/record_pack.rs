//! Encodes a stored record and writes it to stdout.
//!
//! Usage: `record-pack [--hex] <url> [secret]`

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use shortlink::logging::init_logging;
use shortlink_buffers::hex_dump;
use shortlink_record::{encode, StoredValue};

const USAGE: &str = "usage: record-pack [--hex] <url> [secret]";

fn run() -> Result<(), Box<dyn Error>> {
    let mut hex = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--hex" => hex = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let url = positional.next().ok_or(USAGE)?;
    let secret = positional.next();
    if positional.next().is_some() {
        return Err(USAGE.into());
    }

    let bytes = encode(&StoredValue { url, secret })?;
    tracing::debug!(len = bytes.len(), "record encoded");

    let mut stdout = io::stdout().lock();
    if hex {
        stdout.write_all(hex_dump(&bytes).as_bytes())?;
    } else {
        stdout.write_all(&bytes)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging("warn");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("record-pack: {err}");
            ExitCode::FAILURE
        }
    }
}
