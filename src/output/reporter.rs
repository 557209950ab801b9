use crate::engine::classify::Classification;

const RESET: &str = "\x1b[0m";
const PAD_WIDTH: usize = 50;

/// Formats one line per classified probe. Paths are width-padded so the
/// status column lines up no matter how the workers interleave.
#[derive(Debug, Clone)]
pub struct Reporter {
    quiet: bool,
    color: bool,
    width: usize,
}

impl Reporter {
    pub fn new(quiet: bool, color: bool) -> Self {
        Self { quiet, color, width: PAD_WIDTH }
    }

    /// Render the line for `path`, or None when quiet mode filters it out.
    /// Quiet mode keeps status-200 hits only.
    pub fn render(&self, path: &str, class: &Classification) -> Option<String> {
        if self.quiet && *class != Classification::Status(200) {
            return None;
        }
        let line = if self.color {
            format!(
                "{:<width$}: {}[{}]{}",
                path,
                class.color_code(),
                class.label(),
                RESET,
                width = self.width
            )
        } else {
            format!("{:<width$}: [{}]", path, class.label(), width = self.width)
        };
        Some(line)
    }

    pub fn emit(&self, path: &str, class: &Classification) {
        if let Some(line) = self.render(path, class) {
            println!("{line}");
        }
    }
}
