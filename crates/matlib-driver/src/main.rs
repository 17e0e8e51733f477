use matlib_driver::{correlate_files, DEFAULT_PULSE, DEFAULT_SIGNAL};
use std::path::PathBuf;

fn parse_args() -> (PathBuf, PathBuf) {
    let mut args = std::env::args().skip(1);
    let pulse = args.next().unwrap_or_else(|| DEFAULT_PULSE.to_string());
    let signal = args.next().unwrap_or_else(|| DEFAULT_SIGNAL.to_string());
    if let Some(extra) = args.next() {
        eprintln!("unrecognized argument: {extra}");
        eprintln!("usage: matlib-driver [PULSE] [SIGNAL]");
        std::process::exit(2);
    }
    (PathBuf::from(pulse), PathBuf::from(signal))
}

fn main() {
    let (pulse, signal) = parse_args();
    match correlate_files(&pulse, &signal) {
        Ok(curve) => {
            for value in curve {
                println!("{value}");
            }
        }
        Err(err) => {
            eprintln!("matlib-driver: {err}");
            std::process::exit(1);
        }
    }
}
