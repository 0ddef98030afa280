//! The first-data directory file.

use tempfile::TempDir;
use votebin::binary::{body_crc32, read_u32_be};
use votebin::build::run_first_data;
use votebin::first_data::build_first_data;
use votebin::lz11::decompress;
use votebin::reference::COUNTRIES;
use votebin::signing::verify;

use crate::common::test_signer;

#[test]
fn test_signed_first_data_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("first.bin");
    let signer = test_signer();

    let written = run_first_data(Some(&signer), &path).unwrap();
    let signed = std::fs::read(&path).unwrap();
    assert_eq!(signed.len(), written);

    let container = decompress(verify(&signer.public_key(), &signed).unwrap()).unwrap();
    assert_eq!(container, build_first_data().unwrap());
    assert_eq!(read_u32_be(&container, 8), Some(body_crc32(&container)));
}

#[test]
fn test_every_country_listed_in_order() {
    let container = build_first_data().unwrap();
    let table = read_u32_be(&container, 13).unwrap() as usize;
    for (i, country) in COUNTRIES.iter().enumerate() {
        let record = &container[table + i * 6..table + (i + 1) * 6];
        assert_eq!(record[0], country.code);
        assert_eq!(usize::from(record[1]), country.languages.len());
    }
}
