mod cli;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run();
}
