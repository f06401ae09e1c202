use std::io;

use simple_chess::game::Session;

#[cfg(feature = "logging")]
fn init_logging() {
    if let Err(err) = simple_chess::logging::init_from_env() {
        eprintln!("logger not installed: {err}");
    }
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn main() -> io::Result<()> {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
