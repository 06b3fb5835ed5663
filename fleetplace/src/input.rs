use std::io::{self, BufRead, Write};

/// Helper to read input from the player and write prompts and feedback back to them.
pub struct InputReader<B, W> {
    read: B,
    write: W,
    buf: String,
}

impl<B, W> InputReader<B, W> {
    pub fn new(read: B, write: W) -> Self {
        Self {
            read,
            write,
            buf: String::new(),
        }
    }

    /// Get the output the player sees.
    pub fn output(&mut self) -> &mut W {
        &mut self.write
    }

    /// Consume the reader, returning the output.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.write
    }
}

impl<B: BufRead, W: Write> InputReader<B, W> {
    /// Repeatedly tries to read input until the input checker returns `Ok`. Converts
    /// to ascii lower before running the checker. Messages returned by the checker are
    /// shown to the player before prompting again. Returns `None` once input runs out.
    pub fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            self.buf.make_ascii_lowercase();
            match checker(self.buf.trim()) {
                Ok(val) => return Ok(Some(val)),
                Err(msg) => writeln!(self.write, "{}", msg)?,
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.write, "{} ", prompt)?;
        self.write.flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            writeln!(self.write)?;
            return Ok(false);
        }
        Ok(true)
    }
}
