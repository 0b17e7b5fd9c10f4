use super::*;

fn buffer_with(text: &str) -> GapBuffer {
    let mut buf = GapBuffer::with_capacity(8);
    for byte in text.bytes() {
        buf.insert(byte);
    }
    buf
}

#[test]
fn test_new_buffer() {
    let buf = GapBuffer::with_capacity(10);
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 10);
    assert_eq!(buf.gap_start(), 0);
    assert_eq!(buf.gap_end(), 10);
    assert_eq!(buf.cursor(), 0);
}

#[test]
fn test_default_capacity() {
    let buf = GapBuffer::default();
    assert_eq!(buf.capacity(), 1024);
    assert_eq!(buf.gap_len(), 1024);
}

#[test]
fn test_from_bytes_starts_at_beginning() {
    let buf = GapBuffer::from_bytes(b"hello".to_vec());
    assert_eq!(buf.capacity(), 5);
    assert_eq!(buf.gap_start(), 0);
    assert_eq!(buf.gap_end(), 0);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.after_gap(), b"hello");
    assert_eq!(buf.byte_after(), Some(b'h'));
    assert_eq!(buf.byte_before(), None);
}

#[test]
fn test_insert() {
    let mut buf = GapBuffer::with_capacity(10);
    assert!(!buf.insert(b'a'));
    assert_eq!(buf.len(), 1);
    assert_eq!(buf.cursor(), 1);
    assert_eq!(buf.to_vec(), b"a");
}

#[test]
fn test_move_and_insert() {
    let mut buf = buffer_with("hello");
    for _ in 0..5 {
        buf.move_left().unwrap();
    }
    buf.insert(b'X');
    assert_eq!(buf.to_vec(), b"Xhello");
    assert_eq!(buf.cursor(), 1);
}

#[test]
fn test_move_returns_crossed_byte() {
    let mut buf = buffer_with("ab");
    assert_eq!(buf.move_left().unwrap(), b'b');
    assert_eq!(buf.move_left().unwrap(), b'a');
    assert_eq!(buf.move_right().unwrap(), b'a');
    assert_eq!(buf.to_vec(), b"ab");
}

#[test]
fn test_delete_backward() {
    let mut buf = buffer_with("hello");
    buf.move_left().unwrap();
    assert_eq!(buf.delete_backward().unwrap(), b'l');
    assert_eq!(buf.to_vec(), b"helo");
    assert_eq!(buf.cursor(), 3);
}

#[test]
fn test_delete_forward() {
    let mut buf = buffer_with("abc");
    buf.move_left().unwrap();
    buf.move_left().unwrap();
    assert_eq!(buf.delete_forward().unwrap(), b'b');
    assert_eq!(buf.to_vec(), b"ac");
    assert_eq!(buf.cursor(), 1);
}

#[test]
fn test_boundaries() {
    let mut buf = buffer_with("x");
    assert!(matches!(buf.move_right(), Err(EditError::AtBufferEnd)));
    assert!(matches!(buf.delete_forward(), Err(EditError::AtBufferEnd)));

    buf.move_left().unwrap();
    assert!(matches!(buf.move_left(), Err(EditError::AtBufferStart)));
    assert!(matches!(
        buf.delete_backward(),
        Err(EditError::AtBufferStart)
    ));
}

#[test]
fn test_move_left_at_start_never_corrupts() {
    let mut buf = buffer_with("abc");
    while buf.move_left().is_ok() {}
    let (start, end) = (buf.gap_start(), buf.gap_end());
    for _ in 0..10 {
        assert!(matches!(buf.move_left(), Err(EditError::AtBufferStart)));
        assert_eq!(buf.gap_start(), start);
        assert_eq!(buf.gap_end(), end);
    }
    assert_eq!(buf.to_vec(), b"abc");
}

#[test]
fn test_grow_preserves_content_at_any_gap() {
    let text = b"grow me\nplease";
    for cursor in 0..=text.len() {
        let mut buf = GapBuffer::with_capacity(4);
        for &b in text {
            buf.insert(b);
        }
        for _ in cursor..text.len() {
            buf.move_left().unwrap();
        }
        let before = buf.to_vec();
        let old_capacity = buf.capacity();
        let old_start = buf.gap_start();
        buf.grow();
        assert_eq!(buf.to_vec(), before);
        assert!(buf.capacity() > old_capacity);
        assert_eq!(buf.gap_start(), old_start);
        assert_eq!(buf.capacity() - buf.gap_end(), text.len() - cursor);
    }
}

#[test]
fn test_grow_from_zero_capacity() {
    let mut buf = GapBuffer::from_bytes(Vec::new());
    assert_eq!(buf.capacity(), 0);
    assert!(buf.insert(b'a'));
    assert_eq!(buf.capacity(), 1);
    assert!(buf.insert(b'b'));
    assert_eq!(buf.capacity(), 2);
    assert_eq!(buf.to_vec(), b"ab");
}

#[test]
fn test_insert_into_exhausted_gap_grows_by_half() {
    let mut buf = GapBuffer::from_bytes(b"abcd".to_vec());
    for _ in 0..4 {
        buf.move_right().unwrap();
    }
    assert_eq!(buf.gap_start(), 4);
    assert_eq!(buf.gap_end(), 4);

    assert!(buf.insert(b'e'));
    assert_eq!(buf.capacity(), 6);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.to_vec(), b"abcde");
}

#[test]
fn test_bytes_skips_gap() {
    let mut buf = buffer_with("left|right");
    for _ in 0..6 {
        buf.move_left().unwrap();
    }
    let collected: Vec<u8> = buf.bytes().collect();
    assert_eq!(collected, b"left|right");
    assert_eq!(buf.before_gap(), b"left");
    assert_eq!(buf.after_gap(), b"|right");
}
