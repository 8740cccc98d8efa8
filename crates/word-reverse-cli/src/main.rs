use std::io;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    match word_reverse_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("word-reverse error: {err:#}");
            process::exit(1);
        }
    }
}
