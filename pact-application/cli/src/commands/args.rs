//! 打印映射后的参数

use anyhow::Result;
use pact_verifier::ArgumentMapper;

use super::common::load_options;

pub fn handle(file: &str) -> Result<()> {
    let options = load_options(file)?;
    let args = ArgumentMapper::default().map(&options)?;

    for arg in args {
        println!("{}", arg);
    }

    Ok(())
}
