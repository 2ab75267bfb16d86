//! Byte views and lazy decoding of `Text`

use viewkit::string::utf8::{decode_first, REPLACEMENT};
use viewkit::Text;

#[test]
fn test_hello_globe_decode() {
    let s = Text::from("Hello 🌎");
    assert_eq!(s.byte_len(), 10);

    let offsets: Vec<usize> = s.decode().map(|(i, _)| i).collect();
    assert_eq!(offsets, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(s.decode().last(), Some((6, '🌎')));

    let fragment = s.byte_slice(4, 7).unwrap();
    assert_eq!(fragment.to_code_points(), vec!['o', ' ', REPLACEMENT]);

    let tail = s.byte_slice_from(6).unwrap();
    assert_eq!(tail.to_code_points(), vec!['🌎']);
    assert_eq!(tail.to_bytes(), "🌎".as_bytes());
}

#[test]
fn test_views_do_not_copy_or_validate() {
    let s = Text::from("नमस्कार");
    let cut = s.byte_slice(1, 5).unwrap();
    assert_eq!(cut.byte_len(), 4);
    assert_eq!(cut.as_bytes(), &"नमस्कार".as_bytes()[1..5]);
    assert!(!cut.is_valid_utf8());
    assert_eq!(cut.to_code_points(), vec![REPLACEMENT; 4]);
}

#[test]
fn test_decode_matches_std_for_valid_text() {
    let samples = ["", "ascii only", "Hola", "こんにちは", "Привіт", "mixed é€🌎 end"];
    for sample in samples {
        let text = Text::from(sample);
        let ours: Vec<(usize, char)> = text.decode().collect();
        let expected: Vec<(usize, char)> = sample.char_indices().collect();
        assert_eq!(ours, expected, "decode mismatch for {:?}", sample);
        assert_eq!(text.char_count(), sample.chars().count());
        assert_eq!(text.as_str(), Some(sample));
    }
}

#[test]
fn test_every_malformed_byte_advances_by_one() {
    let bytes = [b'a', 0xFF, 0xC0, 0xAF, 0xE0, 0x80, 0xAF, b'b'];
    let text = Text::from(&bytes[..]);
    let decoded: Vec<(usize, char)> = text.decode().collect();
    assert_eq!(
        decoded,
        vec![
            (0, 'a'),
            (1, REPLACEMENT),
            (2, REPLACEMENT),
            (3, REPLACEMENT),
            (4, REPLACEMENT),
            (5, REPLACEMENT),
            (6, REPLACEMENT),
            (7, 'b'),
        ]
    );
    assert_eq!(text.to_string_lossy().chars().count(), 8);
}

#[test]
fn test_decode_first_widths() {
    assert_eq!(decode_first("€".as_bytes()), ('€', 3));
    assert_eq!(decode_first(&[0xF0, 0x9F, 0x8C]), (REPLACEMENT, 1));
    assert_eq!(decode_first(&[]), (REPLACEMENT, 0));
}

#[test]
fn test_decode_is_lazy_and_restartable() {
    let text = Text::from("abc🌎");
    let mut iter = text.decode();
    assert_eq!(iter.next(), Some((0, 'a')));
    let snapshot = iter.clone();
    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.next(), None);
    assert_eq!(snapshot.collect::<Vec<_>>().len(), 3);
    assert_eq!(text.decode().count(), 4);
}

#[test]
fn test_text_from_owned_sources() {
    let from_string = Text::from(String::from("Hello"));
    let from_vec = Text::from(b"Hello".to_vec());
    let from_slice = Text::from_bytes(b"Hello");
    assert_eq!(from_string, from_vec);
    assert_eq!(from_vec, from_slice);
    assert_eq!(from_slice, "Hello");
}
