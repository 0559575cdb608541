#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end tests compiling caption source text into containers
//!
//! Covers the source reader, key hashing, block packing, and the container
//! codec together, then checks layout invariants on the serialized bytes.

use closecaption_crypto::hash_caption_key;
use closecaption_formats::closecaption::{
    CaptionBuilder, CaptionError, CaptionFile, DATA_ALIGNMENT, HEADER_SIZE,
};
use closecaption_formats::source::{CaptionPair, CaptionSource};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn utf16le(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

fn compile(source: &str) -> CaptionFile {
    let source = CaptionSource::from_utf16le(&utf16le(source)).expect("Should decode source");
    CaptionBuilder::new()
        .add_captions(source.captions().map(CaptionPair::into_parts))
        .build()
        .expect("Should build container")
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
}

// --- Scenario A: language line only ---

#[test]
fn language_only_source_produces_empty_directory() {
    let data = compile("\"Language\" \"english\"\n").build().unwrap();

    assert_eq!(&data[0..4], b"VCCD");
    assert_eq!(read_i32(&data, 4), 1, "version");
    assert_eq!(read_i32(&data, 8), 1, "block_count");
    assert_eq!(read_i32(&data, 12), 8192, "block_size");
    assert_eq!(read_i32(&data, 16), 0, "directory_count");
    assert_eq!(read_i32(&data, 20), 512, "data_offset");
    assert_eq!(data.len(), 8704);
    assert!(data[HEADER_SIZE as usize..].iter().all(|&b| b == 0));
}

// --- Scenario B: a single caption ---

#[test]
fn single_caption_source() {
    let file = compile("\"Caption_001\" \"Hello\"\n");

    assert_eq!(file.header.directory_count, 1);
    assert_eq!(file.header.data_offset, 512);

    let entry = file.entries[0];
    assert_eq!(entry.hash, hash_caption_key("Caption_001").unwrap());
    assert_eq!(entry.block_index, 0);
    assert_eq!(entry.offset, 0);
    assert_eq!(entry.length, 12);

    let parsed = CaptionFile::parse(&file.build().unwrap()).unwrap();
    let captions = parsed.resolve().unwrap();
    assert_eq!(captions[0].text, "Hello");
}

// --- Filtering ---

#[test]
fn metadata_lines_never_reach_the_directory() {
    let file = compile(
        "\"Language\" \"english\"\n\
         \"[english]Caption_001\" \"Hello\"\n\
         \"Caption_001\" \"Hallo\"\n",
    );

    let hashes: Vec<u32> = file.entries.iter().map(|e| e.hash).collect();
    assert_eq!(hashes, vec![hash_caption_key("Caption_001").unwrap()]);
    assert!(!hashes.contains(&hash_caption_key("Language").unwrap()));
}

// --- Multi-block container ---

#[test]
fn many_captions_span_several_blocks() {
    let mut source = String::from("\"lang\"\n{\n\"Language\" \"english\"\n\"Tokens\"\n{\n");
    for i in 0..600 {
        source.push_str(&format!(
            "\t\"Caption_{i:04}\"\t\"<sfx>Line number {i} of the long conversation\"\n"
        ));
    }
    source.push_str("}\n}\n");

    let file = compile(&source);
    assert_eq!(file.entries.len(), 600);
    assert!(file.header.block_count > 1);

    let data = file.build().unwrap();
    assert_eq!(data.len() as u64 % DATA_ALIGNMENT, 0);

    let parsed = CaptionFile::parse(&data).unwrap();
    let found = parsed
        .lookup("caption_0599", &closecaption_crypto::CaptionKeyHasher::new())
        .unwrap()
        .expect("Should find last caption");
    assert_eq!(found.text, "<sfx>Line number 599 of the long conversation");
    assert_eq!(found.entry.block_index, file.header.block_count - 1);
}

// --- Oversized payloads ---

#[test]
fn oversized_caption_is_rejected() {
    let huge = "x".repeat(5000);
    let source = CaptionSource::new(format!("\"Huge\" \"{huge}\"")).unwrap();
    let result = CaptionBuilder::new()
        .add_captions(source.captions().map(CaptionPair::into_parts))
        .build();

    assert!(matches!(
        result,
        Err(CaptionError::PayloadTooLarge {
            length: 10_002,
            block_size: 8192,
            ..
        })
    ));
}

// --- Properties ---

fn caption_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::btree_map("[A-Za-z0-9_.]{1,24}", "[^\"\\x00]{0,120}", 0..80)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn round_trip_preserves_captions(captions in caption_strategy()) {
        // Keys unique up to ASCII case so hashes collide only by chance
        let mut seen = std::collections::HashSet::new();
        let captions: Vec<(String, String)> = captions
            .into_iter()
            .filter(|(k, _)| seen.insert(k.to_ascii_lowercase()))
            .collect();

        let file = CaptionBuilder::new()
            .block_size(1024)
            .add_captions(captions.clone())
            .build()
            .unwrap();
        let parsed = CaptionFile::parse(&file.build().unwrap()).unwrap();

        let mut expected: Vec<(u32, String)> = captions
            .iter()
            .map(|(k, t)| (hash_caption_key(k).unwrap(), t.clone()))
            .collect();
        expected.sort_by_key(|(hash, _)| *hash);

        let actual: Vec<(u32, String)> = parsed
            .sorted_by_hash()
            .unwrap()
            .into_iter()
            .map(|c| (c.hash(), c.text))
            .collect();

        let mut expected_hashes: Vec<u32> = expected.iter().map(|(h, _)| *h).collect();
        expected_hashes.dedup();
        prop_assume!(expected_hashes.len() == expected.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn layout_is_aligned(captions in caption_strategy(), block_size in 512u32..4096) {
        let file = CaptionBuilder::new()
            .block_size(block_size)
            .add_captions(captions)
            .build()
            .unwrap();
        let data = file.build().unwrap();

        let data_offset = file.header.data_offset();
        prop_assert_eq!(data_offset % DATA_ALIGNMENT, 0);
        prop_assert!(data_offset >= HEADER_SIZE + 12 * file.entries.len() as u64);
        prop_assert_eq!(data.len() as u64 % DATA_ALIGNMENT, 0);
        prop_assert!(data.len() as u64 >= file.header.data_end());
        prop_assert!(file.blocks.iter().all(|b| b.len() == block_size as usize));
    }
}
