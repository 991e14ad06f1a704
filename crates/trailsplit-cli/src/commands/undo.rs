use trailsplit_core::EngineError;

use crate::session;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = session::load()?;

    match engine.undo() {
        Ok(()) => {
            session::save(&engine)?;
            println!(
                "restored previous marker layout ({} markers)",
                engine.markers().len()
            );
        }
        // Benign: nothing was changed, nothing to persist.
        Err(EngineError::NothingToUndo) => println!("nothing to undo"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
