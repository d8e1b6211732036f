use anyhow::Result;

mod app;
mod state;
mod ui;

fn main() -> Result<()> {
    env_logger::init();
    app::run::run()
}
