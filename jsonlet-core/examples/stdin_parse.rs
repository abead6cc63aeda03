use std::io::Read;

use jsonlet_core::parse;

fn main() {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).unwrap();

    match parse(&input) {
        Ok(value) => println!("{:?}", value),
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(1);
        }
    }
}
