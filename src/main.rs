use anyhow::Result;

fn main() -> Result<()> {
    base_converter::cli::run()
}
