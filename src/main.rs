fn main() -> anyhow::Result<()> {
    mbox_comments::cli::run()
}
