// Feeding the input in one chunk or many small chunks must yield
// identical sentence and word output.

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{extract_sentences, run_pipeline};

const MIXED_TEXT: &str = "Mr. Smith went to Washington. He arrived on a Tuesday! \
Was anyone expecting him? \"Hardly,\" the papers wrote. \
The rest of the story is a trailing fragment without punctuation";

#[tokio::test]
async fn test_sentences_identical_across_chunk_sizes() {
    let whole = extract_sentences(MIXED_TEXT, 1 << 20).await;
    assert_eq!(whole.len(), 5);

    for chunk_size in [1, 2, 3, 5, 8, 13, 64, 1024] {
        let chunked = extract_sentences(MIXED_TEXT, chunk_size).await;
        assert_eq!(whole, chunked, "sentence mismatch at chunk size {}", chunk_size);
    }
}

#[tokio::test]
async fn test_rendered_outputs_identical_across_chunk_sizes() {
    let (xml_whole, csv_whole) = run_pipeline(MIXED_TEXT, 1 << 20).await;

    for chunk_size in [3, 17, 100] {
        let (xml, csv) = run_pipeline(MIXED_TEXT, chunk_size).await;
        assert_eq!(xml_whole, xml, "XML mismatch at chunk size {}", chunk_size);
        assert_eq!(csv_whole, csv, "CSV mismatch at chunk size {}", chunk_size);
    }
}

#[tokio::test]
async fn test_chunk_boundary_between_abbreviation_and_name() {
    // Chunk sizes chosen so reads end right after "Mr." and mid-"Smith"
    let text = "Mr. Smith stayed. Then he left. ";
    let whole = extract_sentences(text, 1 << 20).await;
    assert_eq!(whole.len(), 2);

    for chunk_size in [4, 5, 6] {
        let chunked = extract_sentences(text, chunk_size).await;
        assert_eq!(whole, chunked, "abbreviation split at chunk size {}", chunk_size);
    }
}

#[tokio::test]
async fn test_unicode_content_across_chunk_sizes() {
    let text = "Müller sagte nichts. Die Straße war leer. Ein schönes Café öffnete";
    let whole = extract_sentences(text, 1 << 20).await;
    assert_eq!(whole.len(), 3);

    // Chunk size 1 forces every multi-byte character across a read boundary
    for chunk_size in [1, 2, 7] {
        let chunked = extract_sentences(text, chunk_size).await;
        assert_eq!(whole, chunked, "unicode mismatch at chunk size {}", chunk_size);
    }
}
