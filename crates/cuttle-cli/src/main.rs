//! cuttle - Fabric identity and enrollment batch derivation

use anyhow::Result;

fn main() -> Result<()> {
    cuttle_cli::run()
}
