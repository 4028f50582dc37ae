use flate2::read::MultiGzDecoder;
use std::{
    error::Error,
    ffi::OsStr,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

pub fn is_compressed<P: AsRef<Path>>(p: &P) -> bool {
    p.as_ref().extension() == Some(OsStr::new("gz"))
}

pub fn read_with_gz<P: AsRef<Path>>(p: &P) -> Result<Box<dyn BufRead>, Box<dyn Error>> {
    let file = File::open(p)?;

    if is_compressed(p) {
        debug!("reading {} as gzip", p.as_ref().display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprPair {
    pub line: usize,
    pub lhs: String,
    pub rhs: String,
}

pub fn parse_line(line: &str) -> Result<(String, String), Box<dyn Error>> {
    let line = line.trim();

    let sides: Vec<&str> = line.split('=').collect();
    if sides.len() != 2 {
        let err: Box<dyn Error> = Box::new(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid line, expected `lhs = rhs`: {}", line),
        ));

        return Err(err);
    }

    Ok((sides[0].trim().to_string(), sides[1].trim().to_string()))
}

#[must_use]
pub struct ExprPairReader<R: BufRead> {
    reader: R,
    comment: char,
}

impl<R: BufRead> ExprPairReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            comment: '#',
        }
    }

    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    pub fn finish(self) -> Result<Vec<ExprPair>, Box<dyn Error>> {
        let mut pairs = vec![];

        for (idx, line) in self.reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with(self.comment) {
                continue;
            }

            let (lhs, rhs) = parse_line(trimmed)?;
            pairs.push(ExprPair {
                line: idx + 1,
                lhs,
                rhs,
            });
        }

        Ok(pairs)
    }
}

#[cfg(test)]
mod test_reader {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    const PAIRS: &str = "# de morgan\n(ab)' = a' + b'\n\n a xor b = a + b \n";

    #[test]
    fn test_pairs() {
        let pairs = ExprPairReader::new(PAIRS.as_bytes()).finish().unwrap();
        assert_eq!(
            pairs,
            vec![
                ExprPair {
                    line: 2,
                    lhs: "(ab)'".to_string(),
                    rhs: "a' + b'".to_string(),
                },
                ExprPair {
                    line: 4,
                    lhs: "a xor b".to_string(),
                    rhs: "a + b".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_custom_comment() {
        let pairs = ExprPairReader::new("; skipped\na = a\n".as_bytes())
            .with_comment(';')
            .finish()
            .unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].line, 2);
    }

    #[test]
    fn test_invalid_line() {
        assert!(ExprPairReader::new("a + b\n".as_bytes()).finish().is_err());
        assert!(ExprPairReader::new("a = b = c\n".as_bytes()).finish().is_err());
    }

    #[test]
    fn test_is_compressed() {
        assert!(is_compressed(&"pairs.txt.gz"));
        assert!(!is_compressed(&"pairs.txt"));
    }

    #[test]
    fn test_read_with_gz() {
        let path = std::env::temp_dir().join(format!("veribool-{}.txt.gz", std::process::id()));

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(PAIRS.as_bytes()).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let pairs = ExprPairReader::new(read_with_gz(&path).unwrap())
            .finish()
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].lhs, "a xor b");
    }
}
