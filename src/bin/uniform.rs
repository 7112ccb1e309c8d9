use tsfixture::Config;

fn main() -> anyhow::Result<()> {
    tsfixture::emit(&Config::uniform_fixture())
}
