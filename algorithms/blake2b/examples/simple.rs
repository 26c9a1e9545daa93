//! BLAKE2b Basic Example
//!
//! Minimal usage: `let digest = blake2b::hash(&data, 32)?;`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), blake2b::Error> {
    let data = b"Hello, World!";
    let digest = blake2b::hash(data, 32)?;

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {}", digest.to_hex());
    println!("Ok:   {}", blake2b::verify(data, &digest));
    Ok(())
}
