use cubehash::{hash256, Hasher, Params};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = "Hello, world!";
    let hash = hash256(16, 32, input.as_bytes()).expect("valid parameters");
    println!("Input: {}", input);
    println!("Input hex: {}", hex::encode(input.as_bytes()));
    println!("Hash ({}): {}", Params::CUBEHASH_16_32_256, hash);

    let hash2 = Hasher::new(Params::CUBEHASH_16_32_256)
        .chain_update("Hello, ")
        .chain_update("world!")
        .finalize();
    println!("Streamed hash: {}", hash2);

    match hash256(0, 32, input.as_bytes()) {
        Ok(_) => unreachable!("zero rounds is rejected"),
        Err(e) => println!("Rejected: {}", e),
    }
}
