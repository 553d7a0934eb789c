//! Single-token command line argument parser.
//!
//! An [`Argument`] decomposes one raw token (with lookahead at the following
//! token) into a name/value pair, abstracting over the three option
//! syntaxes: embedded values (`--option=value`), separate values
//! (`--option value`), and bare flags (`--option`).
//!
//! It is designed to be constructed fresh for each token inside a parse
//! loop; see [`crate::cli::args::Args::parse_from`] for the intended usage.

/// Consumption state of an argument's embedded value.
///
/// Only an embedded value (`--opt=value`) enters `ValuePending`; a separate
/// value never does, because a following token that turns out to be unused
/// is simply reinterpreted as the next argument by the parse loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueState {
    /// No embedded value was supplied.
    NoValue,
    /// An embedded value was supplied and has not been read yet.
    ValuePending,
    /// The embedded value was read via [`Argument::value`].
    ValueConsumed,
}

/// A single parsed command line token.
#[derive(Debug, Clone)]
pub struct Argument {
    name: String,
    value: String,
    embedded: bool,
    state: ValueState,
}

impl Argument {
    /// Parse the token at index `i` of `argv`, looking ahead at `argv[i+1]`
    /// for a separate-value candidate.
    ///
    /// # Panics
    ///
    /// Panics if `i >= argv.len()`; the parse loop guarantees the index is
    /// in bounds. The lookahead itself is bounds-checked.
    pub fn new(i: usize, argv: &[String]) -> Self {
        let curr = argv[i].as_str();
        let next = argv.get(i + 1).map(String::as_str).unwrap_or("");

        // by default, assume the associated value is the next token as long
        // as that token is not itself an option
        let mut name = curr.to_string();
        let mut value = String::new();
        let mut embedded = false;
        let mut state = ValueState::NoValue;
        if !next.starts_with('-') {
            value = next.to_string();
        }

        // if the current token is a long option containing an '=',
        // extract the embedded value (overriding the lookahead candidate)
        if curr.starts_with("--") {
            if let Some(pos) = curr.find('=') {
                name = curr[..pos].to_string();
                value = curr[pos + 1..].to_string();
                embedded = true;
                state = ValueState::ValuePending;
            }
        }

        // positional tokens never carry a value
        if !curr.starts_with('-') {
            value.clear();
        }

        Argument {
            name,
            value,
            embedded,
            state,
        }
    }

    /// The name of the argument (the token up to any embedded `=`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value associated with this argument, adjusting the
    /// caller's loop index.
    ///
    /// If the value was not embedded it was taken from the following token,
    /// so `*i` is advanced by one to keep the outer loop from reprocessing
    /// the consumed token. Embedded values leave the index untouched.
    pub fn value(&mut self, i: &mut usize) -> String {
        if !self.embedded {
            *i += 1;
        }
        if self.state == ValueState::ValuePending {
            self.state = ValueState::ValueConsumed;
        }
        self.value.clone()
    }

    /// Whether this argument has a non-empty associated value.
    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// Whether no unconsumed embedded value remains.
    ///
    /// After dispatching a flag that takes no argument, a `false` return
    /// here means the user supplied a value anyway (e.g. `--metadata=foo`);
    /// the caller treats that as a fatal usage error.
    pub fn was_value_consumed(&self) -> bool {
        self.state != ValueState::ValuePending
    }

    /// Whether this argument is an option (starts with `-`).
    pub fn is_option(&self) -> bool {
        self.name.starts_with('-')
    }

    /// Exact comparison against a single option name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Exact comparison against a short and a long option name.
    pub fn is_either(&self, shortname: &str, longname: &str) -> bool {
        self.name == shortname || self.name == longname
    }
}
