fn main() -> anyhow::Result<()> {
    courier::controller::Courier::load()?.run()?;
    Ok(())
}
