//! Generate a random key pair and payment address and print them in the
//! four-line seed/secret/public/address format.

use std::process::ExitCode;

use keyaddr::{generate_key, KeygenError, Network};

fn run() -> Result<(), KeygenError> {
    let key = generate_key(Network::Main)?;
    let public_hex = hex::encode(key.public.encode(true)?);

    println!("seed          0x: {}", key.seed.to_hex());
    println!("secret       b58: {}", key.secret.to_wif(Network::Main));
    println!("public        0x: {public_hex}");
    println!("address b58check: {}", key.address);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
