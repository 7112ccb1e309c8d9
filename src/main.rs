use tsfixture::Config;

fn main() -> anyhow::Result<()> {
    tsfixture::emit(&Config::normal_fixture())
}
