use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable detailed debug logging (global)
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging (global)
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Enumerate web paths on a target with a wordlist
    Scan {
        /// Target base URL (e.g. http://example.com/); a literal FUZZ marker is stripped
        target: String,

        /// Path to a newline-delimited wordlist
        #[arg(short, long)]
        wordlist: String,

        /// Number of concurrent workers (clamped to the wordlist length)
        #[arg(short = 'c', long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
        workers: u16,

        /// Quiet mode: only print status-200 hits
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Follow 301/302 redirects instead of reporting them
        #[arg(long, default_value_t = false)]
        follow_redirects: bool,

        /// Recurse into discovered directories
        #[arg(short, long, default_value_t = false)]
        recursive: bool,

        /// Maximum recursion depth below the top level
        #[arg(long, default_value_t = 1)]
        max_depth: usize,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        /// Disable ANSI colors in output
        #[arg(long, default_value_t = false)]
        no_color: bool,
    },
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
