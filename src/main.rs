use anyhow::Result;

fn main() -> Result<()> {
    rappel::init_logger();
    rappel::run()
}
