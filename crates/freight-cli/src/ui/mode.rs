//! Plain versus pretty output.

/// How menus, record lists and messages are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `ID n:` blocks and bare messages; what piped sessions see
    #[default]
    Plain,
    /// Tables and badges
    Pretty,
}

impl OutputMode {
    /// Pretty needs a real terminal on stdout that is not `TERM=dumb`.
    pub fn for_terminal(stdout_tty: bool, term_is_dumb: bool) -> Self {
        if stdout_tty && !term_is_dumb {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_table() {
        let cases = [
            (true, false, OutputMode::Pretty),
            (true, true, OutputMode::Plain),
            (false, false, OutputMode::Plain),
            (false, true, OutputMode::Plain),
        ];
        for (tty, dumb, expected) in cases {
            assert_eq!(OutputMode::for_terminal(tty, dumb), expected, "tty={tty} dumb={dumb}");
        }
    }
}
