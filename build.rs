use anyhow::Result;
use vergen::EmitBuilder;

// Short git sha for `bon2nmea --version`
fn main() -> Result<()> {
    EmitBuilder::builder().git_sha(true).emit()?;
    Ok(())
}
