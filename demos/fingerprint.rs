use keyprint::{KeyMaterial, KeyprintResult};
use std::env;
use std::fmt::Display;
use std::fs;
use std::path::Path;

fn print_fingerprint<P: Display + AsRef<Path>>(path: P) -> KeyprintResult<()> {
    print!("{}: ", path);
    match fs::read(path) {
        Ok(pem) => match KeyMaterial::from_pem(&pem).and_then(|key| key.fingerprint()) {
            Ok(fingerprint) => println!("{}", fingerprint),
            Err(e) => println!("{}", e),
        },
        Err(e) => {
            println!("{}", e);
        }
    }
    Ok(())
}

fn main() -> KeyprintResult<()> {
    env_logger::init();

    let mut argv = env::args();
    argv.next();
    for arg in argv {
        print_fingerprint(&arg)?;
    }
    Ok(())
}
