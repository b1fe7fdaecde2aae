use std::fs;
use std::io;
use std::path::Path;

/// Reads a text file with the requested encoding and returns its lines.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_lines<P: AsRef<Path>>(filename: P, encoding: &str) -> io::Result<Vec<String>> {
	let bytes = fs::read(filename)?;
	let contents = decode(bytes, encoding)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Decodes raw file bytes.
///
/// Supported encodings: `utf-8` (strict) and `latin-1`, where every byte
/// maps directly to a code point. Unknown names are rejected.
fn decode(bytes: Vec<u8>, encoding: &str) -> io::Result<String> {
	match encoding.to_ascii_lowercase().as_str() {
		"utf-8" | "utf8" => String::from_utf8(bytes)
			.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
		"latin-1" | "latin1" | "iso-8859-1" => {
			Ok(bytes.iter().map(|&b| b as char).collect())
		}
		other => Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("unsupported encoding: {other}"),
		)),
	}
}

#[cfg(test)]
mod tests {
	use super::decode;

	#[test]
	fn utf8_roundtrip() {
		let text = decode("héllo".as_bytes().to_vec(), "utf-8").unwrap();
		assert_eq!(text, "héllo");
	}

	#[test]
	fn latin1_maps_bytes_to_code_points() {
		// 0xE9 is 'é' in latin-1 but invalid as standalone UTF-8.
		let text = decode(vec![b'h', 0xE9], "latin-1").unwrap();
		assert_eq!(text, "hé");
		assert!(decode(vec![b'h', 0xE9], "utf-8").is_err());
	}

	#[test]
	fn unknown_encoding_rejected() {
		let err = decode(b"x".to_vec(), "ebcdic").unwrap_err();
		assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
	}
}
