use crate::response::Response;

fn response<const N: usize>(data: &[u8]) -> Response<N> {
    let mut response = Response::new();
    let target = response.spare_capacity();
    let count = data.len().min(target.len());
    target[..count].copy_from_slice(&data[..count]);
    response.commit(0, count);
    response
}

#[test]
fn test_empty() {
    let response: Response<16> = Response::new();

    assert!(response.is_empty());
    assert!(!response.is_full());
    assert_eq!(Ok(""), response.as_str());
    assert_eq!(0, response.lines().count());
}

#[test]
fn test_lines_skip_blank_lines() {
    let response: Response<64> = response(b"AT+GMR\r\nAT version:1.2.0.0\r\n\r\nOK\r\n");
    let lines: alloc::vec::Vec<&str> = response.lines().collect();

    assert_eq!(alloc::vec!["AT+GMR", "AT version:1.2.0.0", "OK"], lines);
}

#[test]
fn test_partial_line() {
    let response: Response<64> = response(b"+CWLAP:(3,\"home\"");

    assert_eq!(Some("+CWLAP:(3,\"home\""), response.lines().next());
    assert_eq!(16, response.len());
}

#[test]
fn test_invalid_utf8() {
    let response: Response<8> = response(&[0x4f, 0x4b, 0xff, b'\n', b'O', b'K']);

    assert!(response.as_str().is_err());
    assert_eq!(&[0x4f, 0x4b, 0xff, b'\n', b'O', b'K'], response.as_bytes());
    assert_eq!(alloc::vec!["OK"], response.lines().collect::<alloc::vec::Vec<_>>());
}

#[test]
fn test_full() {
    let response: Response<4> = response(b"ready");

    assert!(response.is_full());
    assert_eq!(b"read", response.as_bytes());
}
