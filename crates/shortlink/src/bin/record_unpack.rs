//! Decodes a stored record read from stdin.
//!
//! Usage: `record-unpack [--hex] < record.bin`
//!
//! Prints `url` and `secret` lines. With `--hex` the raw input is dumped to
//! stderr first.

use std::error::Error;
use std::io::{self, Read};
use std::process::ExitCode;

use shortlink::logging::init_logging;
use shortlink_buffers::{hex_dump, print_octets_default};
use shortlink_record::RecordDecoder;

fn run() -> Result<(), Box<dyn Error>> {
    let hex = std::env::args().skip(1).any(|arg| arg == "--hex");

    let mut decoder = RecordDecoder::new();
    let mut input = Vec::new();
    let mut chunk = [0u8; 8192];
    let mut stdin = io::stdin().lock();
    loop {
        let n = stdin.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        input.extend_from_slice(&chunk[..n]);
        if let Err(err) = decoder.push(&chunk[..n]) {
            tracing::error!(head = %print_octets_default(&input), "record rejected");
            return Err(err.into());
        }
    }

    if hex {
        eprint!("{}", hex_dump(&input));
    }

    let value = decoder.finish()?;
    println!("url: {}", value.url);
    match value.secret() {
        Some(secret) => println!("secret: {secret}"),
        None => println!("secret: (none)"),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging("warn");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("record-unpack: {err}");
            ExitCode::FAILURE
        }
    }
}
