use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context};

use crate::AppResult;

/// Read an `.ls8` program image from a file, or standard input when the
/// path is `-`.
pub fn load_program(filepath: &Path) -> AppResult<Vec<u8>> {
    if filepath == Path::new("-") {
        parse_program(stdin().lock())
    } else {
        let file = File::open(filepath)
            .with_context(|| format!("could not open program file '{}'", filepath.display()))?;

        parse_program(BufReader::new(file))
    }
}

/// Parse the textual `.ls8` format: the leading run of binary digits on
/// each line is one memory byte and must be exactly 8 digits long,
/// everything after it is commentary. Lines without leading binary digits
/// are skipped.
pub fn parse_program<B: BufRead>(reader: B) -> AppResult<Vec<u8>> {
    let mut program = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("could not read line {}", index + 1))?;
        let digits: String = line
            .trim_start()
            .chars()
            .take_while(|c| *c == '0' || *c == '1')
            .collect();

        if digits.is_empty() {
            continue;
        }
        if digits.len() != 8 {
            bail!(
                "line {}: expected 8 binary digits, found {} ('{}')",
                index + 1,
                digits.len(),
                digits
            );
        }

        let byte = u8::from_str_radix(&digits, 2)
            .with_context(|| format!("line {}: invalid byte '{}'", index + 1, digits))?;
        program.push(byte);
    }

    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MULT_SOURCE: &str = r#"# multiply two numbers and print the result
00000100 # LDI R0,8
00000000
00001000
00000100 # LDI R1,9
00000001
00001001
00000101 # MUL R0,R1
00000000
00000001
00000110 # PRN R0
00000000
00011011 # HLT
"#;

    #[test]
    fn test_parse_program() {
        let program = parse_program(MULT_SOURCE.as_bytes()).unwrap();
        assert_eq!(
            vec![
                0b00000100, 0x00, 0x08, 0b00000100, 0x01, 0x09, 0b00000101, 0x00, 0x01,
                0b00000110, 0x00, 0b00011011,
            ],
            program
        );
    }

    #[test]
    fn test_comment_and_blank_lines_are_skipped() {
        let source = "# a comment\n\n   \n00000000\n";
        let program = parse_program(source.as_bytes()).unwrap();
        assert_eq!(vec![0x00], program);
    }

    #[test]
    fn test_trailing_annotation_is_ignored() {
        let program = parse_program("00011011 halt right here\n".as_bytes()).unwrap();
        assert_eq!(vec![0b00011011], program);
    }

    #[test]
    fn test_short_line_is_an_error() {
        let error = parse_program("00000100\n0000100\n".as_bytes()).unwrap_err();
        assert!(error.to_string().contains("line 2"));
        assert!(error.to_string().contains("found 7"));
    }

    #[test]
    fn test_long_line_is_an_error() {
        let error = parse_program("000001000\n".as_bytes()).unwrap_err();
        assert!(error.to_string().contains("line 1"));
        assert!(error.to_string().contains("found 9"));
    }

    #[test]
    fn test_load_program_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MULT_SOURCE.as_bytes()).unwrap();

        let program = load_program(file.path()).unwrap();

        assert_eq!(12, program.len());
    }

    #[test]
    fn test_load_program_missing_file() {
        let error = load_program(Path::new("does/not/exist.ls8")).unwrap_err();
        assert!(error.to_string().contains("does/not/exist.ls8"));
    }
}
