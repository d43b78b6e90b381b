//! Tokenizer for information responses that `serde_at` cannot describe.
//!
//! Works on the raw response bytes handed to [`atat::AtatCmd::parse`], or on
//! a single URC line. Fields are separated by `,`, strings may be quoted and
//! contain commas, and bracketed elements like the `+COPS=?` operator list
//! are entered with [`ResponseReader::info_elem`].

use heapless::String;

pub struct ResponseReader<'a> {
    buf: &'a [u8],
    pos: usize,
    prefix: &'a [u8],
    /// The line found by `resp_start` has not been handed out yet
    matched: bool,
    in_elem: bool,
}

impl<'a> ResponseReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: buf.len(),
            prefix: &[],
            matched: false,
            in_elem: false,
        }
    }

    /// Position the reader after the first line starting with `prefix`.
    ///
    /// Returns `false` if no line carries the prefix, in which case every
    /// subsequent read yields `None`.
    pub fn resp_start(&mut self, prefix: &'a str) -> bool {
        self.prefix = prefix.as_bytes();
        self.in_elem = false;
        self.matched = self.seek_prefix(0);
        self.matched
    }

    /// Advance to the next information line carrying the prefix given to
    /// [`resp_start`](Self::resp_start). The line found by `resp_start` itself
    /// is returned first.
    pub fn info_resp(&mut self) -> bool {
        if self.matched {
            self.matched = false;
            return true;
        }

        self.in_elem = false;
        match self.buf[self.pos..].iter().position(|&b| b == b'\n') {
            Some(n) => self.seek_prefix(self.pos + n + 1),
            None => {
                self.pos = self.buf.len();
                false
            }
        }
    }

    /// Enter the next bracketed element opened by `open`, skipping whatever is
    /// left of the current one.
    pub fn info_elem(&mut self, open: u8) -> bool {
        self.matched = false;

        if self.in_elem {
            while !self.at_field_end() {
                self.next_field();
            }
            if self.peek() == Some(b')') {
                self.pos += 1;
            }
            if self.peek() == Some(b',') {
                self.pos += 1;
            }
            self.in_elem = false;
        }

        self.skip_spaces();
        if self.peek() == Some(open) {
            self.pos += 1;
            self.in_elem = true;
            true
        } else {
            false
        }
    }

    /// Read the next field as a signed integer. Empty or non numeric fields
    /// are absent.
    pub fn read_int(&mut self) -> Option<i32> {
        let field = self.next_field()?;
        core::str::from_utf8(field).ok()?.trim().parse().ok()
    }

    /// Read the next field as a string, dropping the surrounding quotes.
    ///
    /// The whole field is consumed, but only the first `N` bytes are kept. An
    /// empty field is absent.
    pub fn read_string<const N: usize>(&mut self) -> Option<String<N>> {
        let field = self.next_field()?;
        let field = core::str::from_utf8(field).ok()?;

        let mut s = String::new();
        for c in field.chars() {
            if s.push(c).is_err() {
                break;
            }
        }
        Some(s)
    }

    /// Skip `count` fields.
    pub fn skip_param(&mut self, count: usize) {
        for _ in 0..count {
            if self.at_field_end() {
                return;
            }
            self.next_field();
        }
    }

    fn seek_prefix(&mut self, mut line: usize) -> bool {
        while line < self.buf.len() {
            let rest = &self.buf[line..];
            if rest.starts_with(self.prefix) {
                self.pos = line + self.prefix.len();
                self.skip_spaces();
                return true;
            }
            match rest.iter().position(|&b| b == b'\n') {
                Some(n) => line += n + 1,
                None => break,
            }
        }
        self.pos = self.buf.len();
        false
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn at_field_end(&self) -> bool {
        match self.peek() {
            None | Some(b'\r') | Some(b'\n') => true,
            Some(b')') => self.in_elem,
            Some(_) => false,
        }
    }

    /// Consume one field and its trailing separator. `None` for an empty
    /// field, or when the line or element is exhausted.
    fn next_field(&mut self) -> Option<&'a [u8]> {
        if self.at_field_end() {
            return None;
        }

        self.skip_spaces();
        let field = if self.peek() == Some(b'"') {
            self.pos += 1;
            let start = self.pos;
            while !matches!(self.peek(), None | Some(b'"') | Some(b'\r') | Some(b'\n')) {
                self.pos += 1;
            }
            let end = self.pos;
            if self.peek() == Some(b'"') {
                self.pos += 1;
            }
            while !self.at_field_end() && self.peek() != Some(b',') {
                self.pos += 1;
            }
            &self.buf[start..end]
        } else {
            let start = self.pos;
            while !self.at_field_end() && self.peek() != Some(b',') {
                self.pos += 1;
            }
            trim_end(&self.buf[start..self.pos])
        };

        if self.peek() == Some(b',') {
            self.pos += 1;
        }

        (!field.is_empty()).then_some(field)
    }
}

fn trim_end(mut s: &[u8]) -> &[u8] {
    while let [rest @ .., b' '] = s {
        s = rest;
    }
    s
}
