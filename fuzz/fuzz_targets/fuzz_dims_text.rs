#![no_main]

use libfuzzer_sys::fuzz_target;
use mat32::{Dims, Enum as _};
use pretty_assertions::assert_eq;

fuzz_target!(|input: (Dims, Vec<u8>)| {
    let (mut value, text) = input;
    let before = value;

    // Any value, valid or not, can be written out.
    let marshaled = value.marshal_text();
    if value.is_valid() {
        assert_eq!(marshaled.parse::<Dims>(), Ok(value));
    }

    match value.unmarshal_text(&text) {
        Ok(()) => {
            assert!(value.is_valid());
            assert!(text.eq_ignore_ascii_case(value.marshal_text().as_bytes()));
        }
        Err(error) => {
            assert_eq!(value, before);
            assert_eq!(error.type_name(), "Dims");
        }
    }
});
