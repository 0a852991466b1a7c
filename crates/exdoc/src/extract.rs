//! Parsing of the leading description block in example sources.

/// A parsed example source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSource {
    /// The leading marker block, when present, terminated, and non-empty.
    pub description: Option<Description>,
    /// Everything after the close-marker line, trailing whitespace trimmed
    /// per line. Empty when no terminated block was found.
    pub code: String,
}

/// Prose extracted from a `/** ... */` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// First non-empty line of the block; becomes the page heading.
    pub title: String,
    /// Remaining prose. Blank comment lines split paragraphs; lines within
    /// a paragraph are joined with single spaces.
    pub paragraphs: Vec<String>,
}

impl ExampleSource {
    /// Parse an example source file.
    ///
    /// The description block opens at the first line starting with `/**` and
    /// closes at the next line starting with ` */`. Interior lines carry a
    /// `" * "` prefix that is stripped. An absent, unterminated, or empty
    /// block yields no description; parsing never fails.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();

        let mut found_open = false;
        for line in lines.by_ref() {
            if line.starts_with("/**") {
                found_open = true;
                break;
            }
        }
        if !found_open {
            return Self {
                description: None,
                code: String::new(),
            };
        }

        let mut interior: Vec<&str> = Vec::new();
        let mut terminated = false;
        for line in lines.by_ref() {
            if line.starts_with(" */") {
                terminated = true;
                break;
            }
            interior.push(strip_marker(line));
        }
        if !terminated {
            return Self {
                description: None,
                code: String::new(),
            };
        }

        let code = lines
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            description: Description::from_lines(&interior),
            code,
        }
    }
}

impl Description {
    /// Assemble a description from the stripped interior lines of a block.
    /// Returns `None` when the block holds no text at all.
    fn from_lines(lines: &[&str]) -> Option<Self> {
        let mut it = lines.iter().skip_while(|l| l.is_empty());
        let title = it.next()?.to_string();

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        for line in it {
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }

        Some(Self { title, paragraphs })
    }
}

/// Strip the `" * "` comment prefix from an interior block line.
///
/// Tolerates lines without the prefix (the text is kept as-is, trimmed).
fn strip_marker(line: &str) -> &str {
    line.strip_prefix(" *").unwrap_or(line).trim()
}
