use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    style::{PrintStyledContent, Stylize, style},
};

/// How a console line should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

/// Write `message` to `out` in the colour for `tone`, followed by a newline.
pub fn styled_line<W: Write>(out: &mut W, tone: Tone, message: &str) -> io::Result<()> {
    let content = match tone {
        Tone::Success => style(message).green(),
        Tone::Warning => style(message).yellow(),
        Tone::Error => style(message).red().bold(),
    };
    out.queue(PrintStyledContent(content))?;
    writeln!(out)?;
    out.flush()
}

pub fn success(message: &str) {
    let _ = styled_line(&mut io::stdout(), Tone::Success, message);
}

pub fn warn(message: &str) {
    let _ = styled_line(&mut io::stderr(), Tone::Warning, message);
}

pub fn error(message: &str) {
    let _ = styled_line(&mut io::stderr(), Tone::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_line_keeps_message() {
        let mut out = Vec::new();
        styled_line(&mut out, Tone::Warning, "some questions were dropped").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("some questions were dropped"));
        assert!(text.ends_with('\n'));
    }
}
