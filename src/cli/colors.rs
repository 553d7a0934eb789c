//! Terminal color handling.
//!
//! A [`ColorScheme`] is an owned value constructed once by the top-level
//! orchestration layer and passed (or moved into colorizer closures) from
//! there; there is no global color state. The disabled scheme carries empty
//! codes, so call sites never branch on whether color is active.

/// When to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color when stdout is a terminal (default).
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Parse a `--color` argument value. Accepts the aliases recognized by
    /// common tools: `auto`/`tty`/`if-tty`, `always`/`yes`/`force`,
    /// `never`/`no`/`none`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "auto" | "tty" | "if-tty" => Ok(ColorMode::Auto),
            "always" | "yes" | "force" => Ok(ColorMode::Always),
            "never" | "no" | "none" => Ok(ColorMode::Never),
            _ => Err(format!(
                "Unknown color mode: '{}'. Valid modes: auto, always, never",
                s
            )),
        }
    }

    /// Resolve this mode into a concrete scheme, given whether the output
    /// stream is a terminal.
    pub fn resolve(self, is_terminal: bool) -> ColorScheme {
        match self {
            ColorMode::Always => ColorScheme::ansi(),
            ColorMode::Never => ColorScheme::plain(),
            ColorMode::Auto => {
                if is_terminal {
                    ColorScheme::ansi()
                } else {
                    ColorScheme::plain()
                }
            }
        }
    }
}

/// The set of ANSI style codes used throughout the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    primary: &'static str,
    group: &'static str,
    data: &'static str,
    data2: &'static str,
    warning: &'static str,
    error: &'static str,
    info: &'static str,
    reset: &'static str,
}

impl ColorScheme {
    /// The full ANSI scheme.
    pub fn ansi() -> Self {
        ColorScheme {
            primary: "\x1b[;37m",
            group: "\x1b[;94m",
            data: "\x1b[;32m",
            data2: "\x1b[;33m",
            warning: "\x1b[;1;33m",
            error: "\x1b[;1;31m",
            info: "\x1b[;1;34m",
            reset: "\x1b[0m",
        }
    }

    /// A scheme with every code empty, for non-terminal output.
    pub fn plain() -> Self {
        ColorScheme {
            primary: "",
            group: "",
            data: "",
            data2: "",
            warning: "",
            error: "",
            info: "",
            reset: "",
        }
    }

    /// Main color for regular output text.
    pub fn primary(&self) -> &'static str {
        self.primary
    }

    /// Color for groups of items (directories, tensor groups).
    pub fn group(&self) -> &'static str {
        self.group
    }

    /// Color for data values.
    pub fn data(&self) -> &'static str {
        self.data
    }

    /// Alternative shade for data values.
    pub fn data2(&self) -> &'static str {
        self.data2
    }

    pub fn warning(&self) -> &'static str {
        self.warning
    }

    pub fn error(&self) -> &'static str {
        self.error
    }

    pub fn info(&self) -> &'static str {
        self.info
    }

    /// Code that resets any applied style.
    pub fn reset(&self) -> &'static str {
        self.reset
    }

    /// Wrap `text` in `code` + reset. A no-op for the plain scheme.
    pub fn paint(&self, code: &'static str, text: &str) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", code, text, self.reset)
        }
    }
}
