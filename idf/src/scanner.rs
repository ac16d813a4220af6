/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::{IdfError, IdfObject, Result};
use std::borrow::Cow;

/// Reads the text of an IDF file, dropping the byte order mark if
/// there is one. Files that are not valid UTF-8 are read as Latin-1.
///
/// ```
/// use idf::scanner::decode;
///
/// assert_eq!(decode("Zone,Café;".as_bytes()), "Zone,Café;");
/// assert_eq!(decode(b"Zone,Caf\xe9;"), "Zone,Café;");
/// ```
pub fn decode(source: &[u8]) -> Cow<'_, str> {
    let source = source.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(source);
    match std::str::from_utf8(source) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(source.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Parses the objects written in an IDF text
///
/// ```
/// use idf::scanner::parse;
///
/// let objects = parse(b"
///     ! A comment
///     Zone,
///         Bedroom,  !- Name
///         0;        !- Direction of Relative North
/// ").unwrap();
/// assert_eq!(objects.len(), 1);
/// assert_eq!(objects[0].class, "Zone");
/// assert_eq!(objects[0].fields, vec!["Bedroom".to_string(), "0".to_string()]);
/// ```
pub fn parse(source: &[u8]) -> Result<Vec<IdfObject>> {
    let text = decode(source);
    let mut scanner = IdfScanner::new(text.as_bytes(), 1);
    scanner.parse_objects()
}

/// The scanner. Its source must be UTF-8 (see [`decode`]).
pub(crate) struct IdfScanner<'a> {
    /// The line being read
    line: usize,

    source: &'a [u8],

    current_index: usize,
}

impl<'a> IdfScanner<'a> {
    /// Creates a new [`IdfScanner`]
    pub(crate) fn new(source: &'a [u8], line: usize) -> Self {
        Self {
            source,
            line,
            current_index: 0,
        }
    }

    fn make_error<S: Into<String>>(msg: S, line: usize) -> IdfError {
        IdfError::Syntax {
            line,
            msg: msg.into(),
        }
    }

    fn finished(&self) -> bool {
        self.current_index >= self.source.len()
    }

    /// Advances one byte in the `source`, returning it. Returns
    /// `None` if finished.
    fn advance(&mut self) -> Option<u8> {
        let v = self.source.get(self.current_index).copied();
        if v.is_some() {
            self.current_index += 1;
        }
        v
    }

    /// Gets the byte at the `current_index`, if any.
    fn peek(&self) -> Option<u8> {
        self.source.get(self.current_index).copied()
    }

    /// Consumes everything until the end of the line, without
    /// consuming the line break
    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == b'\n' {
                return;
            }
            self.current_index += 1;
        }
    }

    /// Skips the white spaces and the comments
    fn skip_white_space(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                b' ' | b'\r' | b'\t' => {
                    self.current_index += 1;
                }
                b'\n' => {
                    self.line += 1;
                    self.current_index += 1;
                }
                b'!' => self.skip_comment(),
                _ => return,
            }
        }
    }

    /// Consumes a whole object (i.e., up to and including the `;`)
    fn object(&mut self) -> Result<Option<IdfObject>> {
        self.skip_white_space();
        if self.finished() {
            return Ok(None);
        }
        let start_line = self.line;

        let mut fields: Vec<Vec<u8>> = Vec::new();
        let mut current: Vec<u8> = Vec::new();
        loop {
            match self.advance() {
                None => {
                    return Err(Self::make_error(
                        "Unexpected end of file: object is not terminated by ';'",
                        start_line,
                    ))
                }
                Some(b'!') => self.skip_comment(),
                Some(b'\n') => self.line += 1,
                Some(b',') => fields.push(std::mem::take(&mut current)),
                Some(b';') => {
                    fields.push(current);
                    break;
                }
                Some(c) => current.push(c),
            }
        }

        let mut text = Vec::with_capacity(fields.len());
        for f in fields {
            let f = String::from_utf8(f)
                .map_err(|_| Self::make_error("Object is not valid UTF-8", start_line))?;
            text.push(f.trim().to_string());
        }
        let mut fields = text.into_iter();
        let class = fields.next().unwrap_or_default();
        if class.is_empty() {
            return Err(Self::make_error("Found an object with no type", start_line));
        }
        Ok(Some(IdfObject::new(class, fields.collect())))
    }

    /// Parses all the objects in the source
    pub(crate) fn parse_objects(&mut self) -> Result<Vec<IdfObject>> {
        let mut ret = Vec::new();
        while let Some(obj) = self.object()? {
            ret.push(obj);
        }
        Ok(ret)
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_skip_white_space() {
        let source = b"  \n\n ! hello\n  Zone";
        let mut scanner = IdfScanner::new(source, 1);
        scanner.skip_white_space();
        assert_eq!(scanner.line, 4);
        assert_eq!(scanner.peek(), Some(b'Z'));
    }

    #[test]
    fn test_latin1_names() -> Result<()> {
        let objects = parse(b"Zone,Caf\xe9 Ni\xf1o;")?;
        assert_eq!(objects[0].fields, vec!["Café Niño".to_string()]);

        let objects = parse("Zone,Café Niño;".as_bytes())?;
        assert_eq!(objects[0].fields, vec!["Café Niño".to_string()]);
        Ok(())
    }

    #[test]
    fn test_byte_order_mark() -> Result<()> {
        let objects = parse(b"\xEF\xBB\xBFVersion,23.1;")?;
        assert_eq!(objects[0].class, "Version");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_in_scanner() {
        let mut scanner = IdfScanner::new(b"Zone,Caf\xe9;", 1);
        assert!(matches!(
            scanner.parse_objects(),
            Err(IdfError::Syntax { line: 1, .. })
        ));
    }

    #[test]
    fn test_blank_fields_are_kept() -> Result<()> {
        let objects = parse(b"People, Sleepers,,Always On;")?;
        assert_eq!(objects.len(), 1);
        assert_eq!(
            objects[0].fields,
            vec![
                "Sleepers".to_string(),
                String::new(),
                "Always On".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_several_objects() -> Result<()> {
        let source = b"
        Version,23.1;

        Schedule:Compact,
            PMV_H_SP_Bedroom,        !- Name
            Any Number,              !- Schedule Type Limits Name
            Through: 12/31,          !- Field 1
            For: AllDays,            !- Field 2
            Until: 24:00,-0.5;       !- Field 3
        ";
        let objects = parse(source)?;
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[1].class, "Schedule:Compact");
        assert_eq!(objects[1].fields.len(), 5);
        assert_eq!(objects[1].fields[4], "-0.5");
        Ok(())
    }

    #[test]
    fn test_unterminated() {
        let source = b"Version,23.1;\n\nZone,\n  Bedroom,\n";
        match parse(source) {
            Err(IdfError::Syntax { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a syntax error, found {:?}", other),
        }
    }

    #[test]
    fn test_no_type() {
        assert!(parse(b"Zone, A; , B;").is_err());
    }
}
