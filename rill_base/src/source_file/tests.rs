#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..15, 15..18]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "test file";
    let source_file = super::SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
}

#[test]
fn test_get_location() {
    let source_file = super::SourceFile::temp("ab\ncd").unwrap();

    assert_eq!(source_file.get_location(0).unwrap(), super::Location {
        line: 1,
        column: 1
    });
    assert_eq!(source_file.get_location(3).unwrap(), super::Location {
        line: 2,
        column: 1
    });
    assert_eq!(source_file.get_location(4).unwrap(), super::Location {
        line: 2,
        column: 2
    });

    // one past the last character resolves to the end of the final line
    assert_eq!(source_file.get_location(5).unwrap(), super::Location {
        line: 2,
        column: 3
    });
}

#[test]
fn test_get_location_rejects_non_char_boundary() {
    let source_file = super::SourceFile::temp("ß").unwrap();
    assert!(source_file.get_location(1).is_none());
}

#[test]
fn test_iterator_lookahead() {
    let source_file = super::SourceFile::temp("ab").unwrap();
    let mut iterator = source_file.iter();

    assert_eq!(iterator.peek(), Some((0, 'a')));
    assert_eq!(iterator.peek_second(), Some((1, 'b')));
    assert_eq!(iterator.next(), Some((0, 'a')));

    assert_eq!(iterator.peek(), Some((1, 'b')));
    assert_eq!(iterator.peek_second(), None);
    assert_eq!(iterator.next(), Some((1, 'b')));

    assert_eq!(iterator.peek(), None);
    assert_eq!(iterator.next(), None);
}
