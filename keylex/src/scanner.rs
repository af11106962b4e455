#![deny(warnings)]

static WHITE: &str = " \n\r\t";

pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    buf: Vec<char>,
    pos: isize,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1 }
    }

    pub fn pos(&self) -> isize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<char> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos])
    }

    // pull enough chars from the source to make self.pos addressable
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            if let Some(c) = self.src.next() {
                self.buf.push(c);
            } else {
                break;
            }
        }
    }

    pub fn prev(&mut self) -> Option<char> {
        if self.pos >= 0 {
            self.pos -= 1;
        }
        self.curr()
    }

    pub fn peek(&mut self) -> Option<char> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    pub fn view(&self) -> &[char] {
        let n = (self.pos + 1) as usize;
        &self.buf[..n]
    }

    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = (self.pos + 1) as usize;
            self.buf = if self.buf.len() > n {
                self.buf[n..].to_vec()
            } else {
                Vec::new()
            }
        }
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<char> {
        let chars = self.view().to_vec();
        self.ignore();
        chars
    }

    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // Advance the scanner only if the next char is 'what',
    // self.curr() will return the matched char on success
    pub fn accept(&mut self, what: char) -> Option<char> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if next == what {
                return Some(next);
            }
        }
        self.set_pos(backtrack);
        None
    }

    // Advance the scanner only if the next char is in the 'any' set
    pub fn accept_any(&mut self, any: &str) -> Option<char> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if any.contains(next) {
                return Some(next);
            }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced,
    // after skip a call to self.curr() will return the last matching char
    pub fn skip_all(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // Find a char in the 'any' set or EOF, return if the scanner advanced,
    // after until a call to self.curr() returns the last non-matching char
    pub fn until_any(&mut self, any: &str) -> bool {
        let mut advanced = false;
        while let Some(next) = self.peek() {
            if any.contains(next) {
                break;
            }
            self.next();
            advanced = true;
        }
        advanced
    }

    // Drop whitespace preceding the next token
    pub fn ignore_ws(&mut self) {
        self.skip_all(WHITE);
        self.ignore();
    }
}
