use std::path::Path;
use std::time::Instant;

use path_hunter::config::{normalize_target, ScanConfig};
use path_hunter::engine::{effective_workers, ScanEngine};
use path_hunter::output::Reporter;
use path_hunter::wordlist;

use crate::cli::{Cli, Commands};

fn print_ascii_logo() {
    println!(
        r#"
         ____       _   _       _   _             _
        |  _ \ __ _| |_| |__   | | | |_   _ _ __ | |_ ___ _ __
        | |_) / _` | __| '_ \  | |_| | | | | '_ \| __/ _ \ '__|
        |  __/ (_| | |_| | | | |  _  | |_| | | | | ||  __/ |
        |_|   \__,_|\__|_| |_| |_| |_|\__,_|_| |_|\__\___|_|

                       Web Path Scanner v0.1.0
    "#
    );
}

fn absolute_display(path: &str) -> String {
    std::fs::canonicalize(path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.to_string())
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. Keep external crates
    // (reqwest/hyper) at INFO so probe chatter doesn't flood the CLI.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!(
        "path_hunter={level},reqwest=info,hyper=info,h2=info",
        level = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Scan {
            target,
            wordlist: wordlist_path,
            workers,
            quiet,
            follow_redirects,
            recursive,
            max_depth,
            timeout,
            no_color,
        } => {
            let target = normalize_target(&target)?;
            let words = wordlist::load(Path::new(&wordlist_path)).await?;

            let workers = workers as usize;
            let effective = effective_workers(workers, words.len());

            print_ascii_logo();
            println!("{}", "-".repeat(60));
            println!("[>] Method    : GET");
            println!("[>] Target    : {target}");
            println!("[>] Wordlist  : {} ({} words)", absolute_display(&wordlist_path), words.len());
            println!("[>] Handled   : 200, 204, 301, 302, 401, 404");
            println!("[>] Workers   : {effective}");
            if recursive {
                println!("[>] Recursive : max depth {max_depth}");
            }
            if quiet {
                println!("[·] Mode      : Quiet (200 only)");
            }
            println!("{}\n", "-".repeat(60));

            if words.is_empty() {
                println!("[!] Wordlist is empty, nothing to do");
                return Ok(());
            }
            if effective < workers {
                println!("[!] More workers than words, reducing pool to {effective}");
            }

            tracing::info!(target = %target, workers = effective, recursive, max_depth, timeout, "starting scan");

            let config = ScanConfig {
                target,
                workers,
                quiet,
                follow_redirects,
                recursive,
                max_depth,
                timeout_secs: timeout,
            };
            let reporter = Reporter::new(quiet, !no_color);
            let engine = ScanEngine::new(config, reporter);

            let start = Instant::now();
            let summary = engine.run(words).await;

            println!(
                "\n[*] {} probes, {} directories, {} hits, {} errors skipped in {:.2?}",
                summary.probes,
                summary.directories,
                summary.hits,
                summary.skipped_errors,
                start.elapsed()
            );
        }
    }
    Ok(())
}
