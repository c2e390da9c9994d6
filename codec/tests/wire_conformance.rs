//! Wire-format conformance over the public API: the byte-level invariants
//! every encoder/decoder pair in the stack relies on.

use lumen_codec::{Decode, Encode, Error, Reader, VarArray, VarOpaque, Writer, XdrString};

#[test]
fn booleans_are_whole_words() {
    assert_eq!(true.encode().as_ref(), &[0x00, 0x00, 0x00, 0x01]);
    assert_eq!(false.encode().as_ref(), &[0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn three_byte_opaque_pads_to_four() {
    let mut writer = Writer::new();
    writer.put_fixed_opaque(&[0x01, 0x02, 0x03]);
    assert_eq!(writer.finish().as_ref(), &[0x01, 0x02, 0x03, 0x00]);
}

#[test]
fn empty_string_is_exactly_the_prefix() {
    let value = XdrString::<16>::try_from("").unwrap();
    assert_eq!(value.encode().as_ref(), &[0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn half_a_length_prefix_is_truncation_not_length_error() {
    assert!(matches!(
        VarArray::<u32, 8>::decode(&[0x00, 0x00]),
        Err(Error::Truncated {
            offset: 0,
            needed: 4,
            remaining: 2,
        })
    ));
}

#[test]
fn every_prefix_of_a_valid_encoding_fails() {
    let value = VarArray::<VarOpaque<8>, 4>::try_from(vec![
        VarOpaque::try_from(&[1, 2, 3][..]).unwrap(),
        VarOpaque::try_from(&[4][..]).unwrap(),
    ])
    .unwrap();
    let encoded = value.encode();
    assert_eq!(encoded.len() % 4, 0);
    for len in 0..encoded.len() {
        assert!(
            VarArray::<VarOpaque<8>, 4>::decode(&encoded[..len]).is_err(),
            "prefix of {len} bytes decoded successfully"
        );
    }
}

#[test]
fn reencoding_well_formed_bytes_is_identity() {
    let values: [&[u8]; 3] = [
        &[0x00, 0x00, 0x00, 0x00],
        &[0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x2A],
        &[0x00, 0x00, 0x00, 0x03, 0xAA, 0xBB, 0xCC, 0x00],
    ];
    // None, Some(42), and a padded 3-byte opaque.
    assert_eq!(
        Option::<u32>::decode(values[0]).unwrap().encode().as_ref(),
        values[0]
    );
    assert_eq!(
        Option::<u32>::decode(values[1]).unwrap().encode().as_ref(),
        values[1]
    );
    assert_eq!(
        VarOpaque::<8>::decode(values[2]).unwrap().encode().as_ref(),
        values[2]
    );
}

#[test]
fn lenient_padding_is_an_explicit_opt_in() {
    let wire = [0x00, 0x00, 0x00, 0x03, 0xAA, 0xBB, 0xCC, 0x07];
    assert!(matches!(
        VarOpaque::<8>::decode(&wire),
        Err(Error::NonZeroPadding { offset: 7 })
    ));
    let value =
        VarOpaque::<8>::decode_from(Reader::new(&wire).with_lenient_padding()).unwrap();
    assert_eq!(value.as_slice(), &[0xAA, 0xBB, 0xCC]);
}

#[test]
fn reader_and_writer_mirror_each_other() {
    let mut writer = Writer::new();
    writer.put_u32(7);
    writer.put_i32(-7);
    writer.put_u64(1 << 40);
    writer.put_i64(-(1 << 40));
    writer.put_bool(true);
    writer.put_variable_opaque(&[9, 9]);
    let bytes = writer.finish();

    let mut reader = Reader::new(&bytes);
    assert_eq!(reader.get_u32().unwrap(), 7);
    assert_eq!(reader.get_i32().unwrap(), -7);
    assert_eq!(reader.get_u64().unwrap(), 1 << 40);
    assert_eq!(reader.get_i64().unwrap(), -(1 << 40));
    assert!(reader.get_bool().unwrap());
    assert_eq!(reader.get_variable_opaque(16).unwrap(), &[9, 9]);
    assert!(reader.is_empty());
}
