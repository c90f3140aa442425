use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use microlife::App;
use microlife::Config;

fn main() -> anyhow::Result<()> {
    // stdout carries the frames, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut app = App::new(&Config::default());

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    app.run(&mut stdin, &mut stdout)
        .context("Terminal session failed")
}
