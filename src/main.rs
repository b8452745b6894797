fn main() -> anyhow::Result<()> {
    metagen::cli::run()
}
