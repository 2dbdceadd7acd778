use clap::Parser;
use miette::Result;
use lqs::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Suppliers(cmd) => lqs::cli::commands::suppliers::run(cmd, &global),
        Commands::Orders(cmd) => lqs::cli::commands::orders::run(cmd, &global),
        Commands::Logistics(cmd) => lqs::cli::commands::logistics::run(cmd, &global),
        Commands::Items(cmd) => lqs::cli::commands::items::run(cmd, &global),
        Commands::Completions(args) => lqs::cli::commands::completions::run(args),
    }
}
