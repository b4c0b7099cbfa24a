//! Validate VAT numbers from the command line.
//!
//! ```text
//! cargo run --example vat_check --features vies -- DE136695976 FRAB123456789
//! cargo run --example vat_check --features vies -- --remote DE136695976
//! ```
//!
//! Set `RUST_LOG=euvat=debug` to see dispatch decisions.

use euvat::checksum::modulus_outcome;
use euvat::registry::ViesClient;
use euvat::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut remote = false;
    let mut ids: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--remote" {
            remote = true;
        } else {
            ids.push(arg);
        }
    }
    if ids.is_empty() {
        ids = [
            "DE136695976",
            "DE136695977",
            "ATU12345678",
            "BE0403032921",
            "FRAB123456789",
            "NL004495445B01",
            "DE12345678",  // too short
            "XX999999999", // unknown country
        ]
        .map(String::from)
        .to_vec();
    }

    println!("=== Local Validation ===\n");

    for id in &ids {
        match parse_vat_number(id) {
            Ok(vat) => println!(
                "  {id} => format ok (country={}, number={}), checksum {:?}, local={}",
                vat.country(),
                vat.number(),
                modulus_outcome(id),
                validate_local(id)
            ),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }

    if !remote {
        return;
    }

    println!("\n=== VIES Existence Check ===\n");

    let client = match ViesClient::builder().user_agent("euvat-demo").build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("  cannot create VIES client: {e}");
            return;
        }
    };
    let validator = Validator::new(client);

    for id in &ids {
        match validator.validate_remote(id) {
            Ok(valid) => println!("  {id} => registered={valid}"),
            Err(e) => println!("  {id} => ERROR: {e}"),
        }
    }
}
