//! Terminal detection for rendering decisions.

use std::io::IsTerminal;

use super::mode::OutputMode;

const DEFAULT_WIDTH: usize = 80;

/// Snapshot of the process environment, taken once at startup.
#[derive(Debug, Clone, Default)]
pub struct TermEnv {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub term_is_dumb: bool,
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl TermEnv {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            term_is_dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: columns_from_env().or_else(columns_from_tty),
        }
    }
}

/// Resolved rendering settings.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Both ends are terminals, so prompts can use line editing
    pub interactive: bool,
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Combine the environment with the `--no-color` and `--ascii` flags.
    pub fn new(env: &TermEnv, no_color_flag: bool, ascii_flag: bool) -> Self {
        Self {
            interactive: env.stdout_tty && env.stdin_tty,
            color: env.stdout_tty && !env.term_is_dumb && !env.no_color && !no_color_flag,
            unicode: !ascii_flag,
            width: env.columns.unwrap_or(DEFAULT_WIDTH),
            mode: OutputMode::for_terminal(env.stdout_tty, env.term_is_dumb),
        }
    }

    /// Plain, colorless context.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(&TermEnv::default(), true, true)
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|&width| width > 0)
}

#[cfg(unix)]
fn columns_from_tty() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into the provided winsize buffer
    let status = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if status != 0 {
        return None;
    }
    // SAFETY: ioctl returned success, so the buffer is filled
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then_some(size.ws_col as usize)
}

#[cfg(not(unix))]
fn columns_from_tty() -> Option<usize> {
    None
}
