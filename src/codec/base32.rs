use std::io::{BufRead, BufWriter, Read, Write};

use super::framing::{self, LineWriter};
use super::Codec;
use crate::error::{BintextError, LengthConstraint, Result};
use crate::types::{CodecMeta, EncodingKind};

const NAME: &str = "base32";
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PADDING: u8 = b'=';

/// Symbols per 40-bit super-group.
const GROUP_SYMBOLS: usize = 8;

/// Trailing group lengths the encoder can emit: 1 to 4 leftover bytes.
const TAIL_SYMBOLS: [usize; 4] = [2, 4, 5, 7];

fn symbol_value(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'2'..=b'7' => Some(byte - b'2' + 26),
        _ => None,
    }
}

/// Rebuilds the bytes of one super-group from its symbol values.
///
/// Each output byte is read from a 15-bit window spanning three symbols.
/// On the final step a zero byte that only exists because of trailing
/// symbol bits is dropped.
fn write_group(values: &[u8], out: &mut impl Write) -> std::io::Result<()> {
    let bits = values.len() * 5;
    let value_at = |i: usize| values.get(i).copied().map_or(0, u32::from);

    for j in (0..bits).step_by(8) {
        let n = j / 5;
        let window = (value_at(n) << 10) | (value_at(n + 1) << 5) | value_at(n + 2);
        let byte = (window >> (7 - j % 5)) & 0xff;
        if j + 5 > bits && byte == 0 {
            break;
        }
        out.write_all(&[byte as u8])?;
    }
    Ok(())
}

pub struct Base32;

impl Codec for Base32 {
    fn meta(&self) -> CodecMeta {
        CodecMeta {
            kind: EncodingKind::Base32,
            name: NAME,
            aliases: &["b32", "base32upper"],
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
            skippable: "",
            description: "RFC4648 Base32, uppercase with '=' padding",
        }
    }

    fn encode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write, line_length: usize) -> Result<()> {
        let mut out = LineWriter::new(output, line_length);
        let mut read = 0usize;
        let mut emitted = 0usize;
        // Bits of the next byte needed to complete `pending`; cycles 5, 2, 4, 1, 3.
        let mut shift: u32 = 5;
        let mut pending: u32 = 0;

        for byte in input.bytes() {
            let b = u32::from(byte?);
            read += 1;

            pending = (pending | (b >> (8 - shift))) & 0x1f;
            out.put(ALPHABET[pending as usize])?;
            emitted += 1;

            if shift < 4 {
                pending = (b >> (3 - shift)) & 0x1f;
                out.put(ALPHABET[pending as usize])?;
                emitted += 1;
                shift += 5;
            }

            shift -= 3;
            pending = (b << shift) & 0x1f;
        }

        if emitted != read.div_ceil(5) * GROUP_SYMBOLS {
            out.put(ALPHABET[pending as usize])?;
            emitted += 1;
            while emitted % GROUP_SYMBOLS != 0 {
                out.put(PADDING)?;
                emitted += 1;
            }
        }

        out.finish()?;
        Ok(())
    }

    fn decode_stream(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        let mut out = BufWriter::new(output);
        let mut group = [0u8; GROUP_SYMBOLS];
        let mut count = 0;
        let mut total = 0;

        for symbol in framing::symbols(input, b"") {
            let (position, byte) = symbol?;
            if byte == PADDING {
                break;
            }
            group[count] = symbol_value(byte).ok_or_else(|| framing::reject(NAME, byte, position))?;
            count += 1;
            total += 1;
            if count == GROUP_SYMBOLS {
                write_group(&group, &mut out)?;
                count = 0;
            }
        }

        if count != 0 && !TAIL_SYMBOLS.contains(&count) {
            return Err(BintextError::invalid_length_msg(
                LengthConstraint::MultipleOf(GROUP_SYMBOLS),
                total,
                format!("a trailing base32 group of {} symbols does not end on a byte boundary", count),
            ));
        }
        write_group(&group[..count], &mut out)?;

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BintextError;
    use test_case::test_case;

    const RANGE_ENCODED: &str = concat!(
        "AAAQEAYEAUDAOCAJBIFQYDIOB4IBCEQTCQKRMFYYDENBWHA5DYPSAIJCEMSCKJRHFAUSUKZMFUXC",
        "6MBRGIZTINJWG44DSOR3HQ6T4P2AIFBEGRCFIZDUQSKKJNGE2TSPKBIVEU2UKVLFOWCZLJNVYXK6",
        "L5QGCYTDMRSWMZ3INFVGW3DNNZXXA4LSON2HK5TXPB4XU634PV7H7QUAYKA4FAWCQPBIJQUFYKDM",
        "FB6CRDBITQUKYKF4FDGCRXBI5QUPYKIMFEOCSLBJHQUUYKK4FFWCS7BJRQUZYKNMFG6CTTBJ3QU6",
        "YKP4FIGCUHBKFQVDYKSMFJOCU3BKPQVIYKU4FKWCVPBKZQVNYKXMFL6CWDBLDQVSYKZ4FNGCWXBL",
        "NQVXYK4MFOOCXLBLXQV4YK64FPWCX7BYBQ4BYOBMHA6DQTBYLQ4GYOD4HCGDRHBYVQ4LYOGMHDOD",
        "R3BY7Q4QYOI4HEWDSPBZJQ4VYOLMHF6DTDBZTQ42YON4HHGDTXBZ5Q47YOQMHIODULB2HQ5EYOS4",
        "HJWDU7B2RQ5JYOVMHK6DVTB23Q5OYOX4HMGDWHB3FQ5TYO2MHNODW3B3PQ5YYO44HOWDXPB3ZQ55",
        "YO7A====",
    );

    #[test]
    fn test_encode_test_bytes() {
        assert_eq!(Base32.encode_bytes(&[0x54, 0x65, 0x73, 0x74], 0).unwrap(), "KRSXG5A=");
        assert_eq!(Base32.decode_bytes("KRSXG5A=").unwrap(), b"Test");
    }

    #[test_case(b"", ""; "empty")]
    #[test_case(b"f", "MY======"; "one byte")]
    #[test_case(b"fo", "MZXQ===="; "two bytes")]
    #[test_case(b"foo", "MZXW6==="; "three bytes")]
    #[test_case(b"foob", "MZXW6YQ="; "four bytes")]
    #[test_case(b"fooba", "MZXW6YTB"; "full group")]
    #[test_case(b"foobar", "MZXW6YTBOI======"; "group and one byte")]
    fn test_rfc4648_vectors(data: &[u8], expected: &str) {
        assert_eq!(Base32.encode_bytes(data, 0).unwrap(), expected);
        assert_eq!(Base32.decode_bytes(expected).unwrap(), data);
    }

    #[test]
    fn test_char_range_string() {
        let text: String = (0u8..255).map(char::from).collect();
        let encoded = Base32.encode_str(&text, 0).unwrap();
        assert_eq!(encoded, RANGE_ENCODED);
        assert_eq!(Base32.decode_string(&encoded).unwrap(), text);
    }

    #[test]
    fn test_trailing_zero_bytes_survive() {
        let cases: [&[u8]; 5] = [&[0], &[0, 0], &[1, 0], &[0, 0, 0, 0], &[0, 0, 0, 0, 0, 0]];
        for data in cases {
            let encoded = Base32.encode_bytes(data, 0).unwrap();
            assert_eq!(Base32.decode_bytes(&encoded).unwrap(), data, "encoded as {}", encoded);
        }
    }

    #[test]
    fn test_decode_without_padding() {
        assert_eq!(Base32.decode_bytes("KRSXG5A").unwrap(), b"Test");
    }

    #[test_case("A", 1; "one symbol")]
    #[test_case("KRS", 3; "three symbols")]
    #[test_case("KRSXG5", 6; "six symbols")]
    #[test_case("MZXW6YTBB", 9; "full group and one symbol")]
    #[test_case("KRS=====", 3; "three symbols before padding")]
    fn test_truncated_trailing_group_is_fault(code: &str, total: usize) {
        let err = Base32.decode_bytes(code).unwrap_err();
        assert!(err.is_decoding_fault());
        match err {
            BintextError::InvalidLength { actual, .. } => assert_eq!(actual, total),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_decode_stops_at_padding() {
        assert_eq!(Base32.decode_bytes("MY======garbage!").unwrap(), b"f");
    }

    #[test]
    fn test_decode_ignores_whitespace() {
        assert_eq!(Base32.decode_bytes(" KRSX\r\nG5A=\t").unwrap(), b"Test");
    }

    #[test]
    fn test_rejects_lowercase_and_out_of_range_digits() {
        assert!(matches!(
            Base32.decode_bytes("krsxg5a=").unwrap_err(),
            BintextError::InvalidCharacter { char: 'k', position: 0 }
        ));
        assert!(matches!(
            Base32.decode_bytes("KRS1G5A=").unwrap_err(),
            BintextError::InvalidCharacter { char: '1', position: 3 }
        ));
        assert!(matches!(
            Base32.decode_bytes("KRSXG5A8").unwrap_err(),
            BintextError::InvalidCharacter { char: '8', position: 7 }
        ));
    }

    #[test]
    fn test_line_wrapping_includes_padding() {
        let sep = std::str::from_utf8(framing::LINE_SEPARATOR).unwrap();
        let wrapped = Base32.encode_bytes(b"f", 4).unwrap();
        assert_eq!(wrapped, format!("MY=={sep}===={sep}"));
        assert_eq!(Base32.decode_bytes(&wrapped).unwrap(), b"f");
    }
}
