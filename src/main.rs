//! wintertv main entrypoint.

use env_logger::Env;
use wintertv::run;

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or("WINTERTV_LOG", "warn")).init();

    if let Err(e) = run() {
        wintertv::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
