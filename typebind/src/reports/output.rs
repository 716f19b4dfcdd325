//! Output trait for rendering reports to different formats.

/// Where a rendered line belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Results, including previewed file contents.
    Out,
    /// Diagnostics.
    Err,
}

/// Target output for reports.
///
/// Reports describe *what* to output using the semantic methods; an
/// implementation only decides where each finished line goes.
pub trait Output {
    fn write_line(&mut self, stream: Stream, line: &str);

    fn section(&mut self, name: &str) {
        self.write_line(Stream::Out, &format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Out, &format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.write_line(Stream::Out, &format!("  - {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.write_line(Stream::Err, &format!("warning: {}", msg));
    }

    /// A labelled separator, used between previewed files.
    fn divider(&mut self, label: &str) {
        self.write_line(Stream::Out, &format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.write_line(Stream::Out, text);
    }

    fn newline(&mut self) {
        self.write_line(Stream::Out, "");
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, stream: Stream, line: &str) {
        match stream {
            Stream::Out => println!("{}", line),
            Stream::Err => eprintln!("{}", line),
        }
    }
}

/// Collects rendered lines for assertions, diagnostics interleaved.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn write_line(&mut self, _stream: Stream, line: &str) {
        self.lines.push(line.to_string());
    }
}
