use cubehash::{digest, Params};
use serde::Serialize;

const TEST_VECTORS_INPUT: [&str; 3] = ["", "Hello", "The quick brown fox jumps over the lazy dog"];
const TEST_VECTOR_OUTPUT_FILE: &str = "test_vectors/basic_test_vector.json";

#[derive(Serialize)]
struct TestVector {
    params: String,
    rounds: u32,
    block_bytes: usize,
    digest_bits: usize,
    input: String,
    output: String,
}

fn main() {
    println!("Generating test vectors...");
    let presets = [
        Params::CUBEHASH_1_1_256,
        Params::CUBEHASH_8_1_256,
        Params::CUBEHASH_8_1_512,
        Params::CUBEHASH_16_32_256,
        Params::CUBEHASH_16_32_512,
    ];
    let test_vectors = presets
        .iter()
        .flat_map(|params| {
            TEST_VECTORS_INPUT.iter().map(move |input| TestVector {
                params: params.to_string(),
                rounds: params.rounds(),
                block_bytes: params.block_bytes(),
                digest_bits: params.digest_bits(),
                input: hex::encode(input.as_bytes()),
                output: digest(*params, input.as_bytes()).to_hex(),
            })
        })
        .collect::<Vec<_>>();
    // Convert the test vectors to a json object, pretty print it
    let test_vectors_json = serde_json::to_string_pretty(&test_vectors).unwrap();
    println!("{}", test_vectors_json);
    std::fs::create_dir_all("test_vectors").unwrap();
    std::fs::write(TEST_VECTOR_OUTPUT_FILE, test_vectors_json).unwrap();
    println!("Test vectors written to {}", TEST_VECTOR_OUTPUT_FILE);
}
