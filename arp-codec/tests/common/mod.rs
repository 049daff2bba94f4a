use std::{fs, path::PathBuf, str};

pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut path = PathBuf::from("tests");
    path.push("packet_examples");
    path.push(fname);

    let content = fs::read_to_string(path).unwrap();
    let content = content.trim();
    assert!(content.len() % 2 == 0);

    content
        .as_bytes()
        .chunks(2)
        .map(|pair| u8::from_str_radix(str::from_utf8(pair).unwrap(), 16).unwrap())
        .collect()
}
