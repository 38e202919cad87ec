//! `archsketch structure` command.

use crate::structure::RepoStructure;

/// Execute the `structure` command, printing the listing to stdout.
///
/// # Errors
///
/// Returns the upstream message when no listing could be produced.
pub fn run(structure: &RepoStructure) -> Result<(), String> {
    match structure {
        Ok(listing) => {
            println!("{listing}");
            Ok(())
        }
        Err(e) => Err(e.message.clone()),
    }
}
