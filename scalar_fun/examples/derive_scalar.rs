//! Derives a scalar from some command line arguments and prints it.
//!
//! ```text
//! cargo run --example derive_scalar -- secp256r1 alice bob
//! ```
use scalar_fun::{Curve, CurveScalar, Params, hash::HashInto};

fn main() {
    let mut args = std::env::args().skip(1);
    let curve = match args.next().map(|name| name.parse::<Curve>()) {
        Some(Ok(curve)) => curve,
        Some(Err(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        None => Curve::Secp256k1,
    };
    let items: Vec<String> = args.collect();
    let items: Vec<&dyn HashInto> = items.iter().map(|item| item as &dyn HashInto).collect();

    let params = Params::new(curve);
    let scalar = CurveScalar::hash_to_scalar(&params, &items);
    println!("{}", curve);
    println!("{}", scalar);
}
