use jsonlet_core::parse;

fn main() {
    let documents: &[&[u8]] = &[
        b"null",
        b"  true  ",
        b"-1.5e3",
        b"0.5",
        b"truee",
        b"01",
        b"1e400",
    ];

    for &input in documents {
        print!("{:?} => ", std::str::from_utf8(input).unwrap());
        match parse(input) {
            Ok(value) => println!("{:?}", value),
            Err(e) => println!("error: {}", e),
        }
    }
}
