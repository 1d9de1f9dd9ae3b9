#![no_main]

use libfuzzer_sys::fuzz_target;
use sgoann::{Annotations, ErrorKind};

fuzz_target!(|data: &[u8]| {
    // Raw bytes on purpose: invalid UTF-8 must surface as an encoding error, never a panic.
    match Annotations::parse(data) {
        Ok(anns) => {
            for (path, signature) in anns.iter() {
                assert!(!path.is_empty());
                assert_eq!(signature, signature.trim());
            }
        }
        Err(err) => {
            if err.kind() == ErrorKind::Encoding {
                assert!(std::str::from_utf8(data).is_err());
            }
        }
    }
});
