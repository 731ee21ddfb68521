#![deny(warnings)]

/// A backtracking cursor over any iterator. Items are buffered until the
/// caller `extract`s or `ignore`s them, which starts a new lexeme.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
    // items already handed out through extract/ignore
    consumed: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1, consumed: 0}
    }

    /// Absolute index in the source of the first item of the current lexeme.
    pub fn lexeme_start(&self) -> usize { self.consumed }

    pub fn curr(&self) -> Option<I::Item> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).cloned()
    }

    // try to get enough elements in the buffer for self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
    }

    /// Items scanned since the lexeme started.
    fn view(&self) -> &[I::Item] {
        let n = ((self.pos + 1).max(0) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    pub fn ignore(&mut self) {
        let n = self.view().len();
        self.buf = self.buf.split_off(n);
        self.consumed += n;
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }

    /// Advance only if the next item satisfies `pred`.
    pub fn accept_if(&mut self, pred: impl Fn(&I::Item) -> bool) -> Option<I::Item> {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if pred(&next) { return Some(next); }
        }
        self.pos = backtrack;
        None
    }

    // Result is whether the scanner was advanced, after skipping
    // self.curr() returns the last matching item
    pub fn skip_all(&mut self, pred: impl Fn(&I::Item) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() { advanced = true; }
        advanced
    }
}

impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        self.accept_if(|c| any.contains(*c))
    }

    /// Drop leading whitespace so the next lexeme starts on a visible char.
    pub fn skip_ws(&mut self) -> bool {
        let skipped = self.skip_all(|c| c.is_whitespace());
        self.ignore();
        skipped
    }
}
