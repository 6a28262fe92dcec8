use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::{Editor, Helper};

// None: input ended or was interrupted before an answer
pub trait Prompter {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

impl<H: Helper, I: History> Prompter for Editor<H, I> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        match self.readline(question) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::other(e.to_string())),
        }
    }
}

pub struct LinePrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        LinePrompter { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;

        // bytes that are not UTF-8 become U+FFFD instead of failing the read
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let answer = String::from_utf8_lossy(&raw);
        Ok(Some(answer.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
