use std::{env, io, process};

use anniversaries::{
    app::App,
    cli::{clock_from_env, help, Mode},
    errors::AppError,
    init,
    settings::Settings,
};

const PROGRAM: &str = "anniversaries";

fn main() {
    init();

    if let Err(err) = run() {
        if matches!(err, AppError::Usage { .. }) {
            eprintln!("Error: {err}\n");
            help::print_usage(PROGRAM);
        } else {
            eprintln!("Error: {err}");
        }
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let mode = Mode::from_args(env::args().skip(1))?;
    let settings = Settings::from_env()?;
    let app = App::new(settings, clock_from_env());
    let stdout = io::stdout();
    app.run(mode, &mut stdout.lock())
}
