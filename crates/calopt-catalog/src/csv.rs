use std::iter::Peekable;
use std::str::Chars;

use crate::record::{truncate, RawRecord, ReadError};

/// Column positions of the required fields in the header row
struct Columns {
    name: usize,
    calories: usize,
    price: usize,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, ReadError> {
        let find = |column: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or_else(|| ReadError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            name: find("name")?,
            calories: find("calories")?,
            price: find("price")?,
        })
    }

    fn record(&self, line: usize, row: &[String]) -> Result<RawRecord, ReadError> {
        let field = |i: usize| row.get(i).map(|s| s.trim()).filter(|s| !s.is_empty());

        Ok(RawRecord {
            position: line,
            name: field(self.name).map(str::to_string),
            calories: parse_number(line, field(self.calories))?,
            price: parse_number(line, field(self.price))?,
        })
    }
}

fn parse_number(line: usize, text: Option<&str>) -> Result<Option<i64>, ReadError> {
    let Some(text) = text else {
        return Ok(None);
    };
    if let Ok(value) = text.parse::<i64>() {
        return Ok(Some(value));
    }
    match text.parse::<f64>() {
        Ok(value) if !value.is_infinite() => Ok(truncate(value)),
        _ => Err(ReadError::InvalidNumber {
            line,
            text: text.to_string(),
        }),
    }
}

/// Reader for comma-separated catalogs with a `name,calories,price` header
pub struct CsvReader<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> CsvReader<'a> {
    pub fn new(source: &'a str) -> Self {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Self {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    /// Parse a whole CSV document into raw records, skipping blank lines
    pub fn parse(source: &str) -> Result<Vec<RawRecord>, ReadError> {
        let mut reader = CsvReader::new(source);

        let header = loop {
            match reader.next_row()? {
                None => return Ok(Vec::new()),
                Some((_, row)) if is_blank(&row) => continue,
                Some((_, row)) => break row,
            }
        };
        let columns = Columns::from_header(&header)?;

        let mut records = Vec::new();
        while let Some((line, row)) = reader.next_row()? {
            if is_blank(&row) {
                continue;
            }
            records.push(columns.record(line, &row)?);
        }
        Ok(records)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c == Some('\n') {
            self.line += 1;
        }
        c
    }

    /// Next row and the line it starts on; `None` at end of input
    pub fn next_row(&mut self) -> Result<Option<(usize, Vec<String>)>, ReadError> {
        if self.chars.peek().is_none() {
            return Ok(None);
        }

        let line = self.line;
        let mut fields = Vec::new();
        loop {
            let (field, terminator) = self.read_field()?;
            fields.push(field);
            if terminator != Some(',') {
                break;
            }
        }
        Ok(Some((line, fields)))
    }

    /// Read one field and consume its terminator (`,`, a line break, or end of input).
    ///
    /// A quote may only open a field (after optional whitespace); once closed, only
    /// whitespace may follow it before the terminator.
    fn read_field(&mut self) -> Result<(String, Option<char>), ReadError> {
        let mut text = String::new();
        let mut quoted = false;
        let mut closed = false;
        let mut quote_line = self.line;

        loop {
            match self.advance() {
                Some('"') if quoted => {
                    if self.chars.peek() == Some(&'"') {
                        self.advance();
                        text.push('"');
                    } else {
                        quoted = false;
                        closed = true;
                    }
                }
                Some('"') if !closed && text.trim().is_empty() => {
                    text.clear();
                    quoted = true;
                    quote_line = self.line;
                }
                Some('"') => return Err(ReadError::MalformedQuote { line: self.line }),
                Some(c) if quoted => text.push(c),
                Some(c) if closed && !matches!(c, ',' | '\r' | '\n') && !c.is_whitespace() => {
                    return Err(ReadError::MalformedQuote { line: self.line });
                }
                Some(',') => return Ok((text, Some(','))),
                Some('\r') => {
                    if self.chars.peek() == Some(&'\n') {
                        self.advance();
                    }
                    return Ok((text, Some('\n')));
                }
                Some('\n') => return Ok((text, Some('\n'))),
                Some(c) => text.push(c),
                None if quoted => return Err(ReadError::UnterminatedQuote { line: quote_line }),
                None => return Ok((text, None)),
            }
        }
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|field| field.trim().is_empty())
}
