//! Paths command handler.

use crate::bootstrap::CliContext;
use stylemate_store::StoreFactory;

/// Print where stylemate keeps its data, in `key = value` form.
pub fn execute(ctx: &CliContext) {
    let paths = ctx.paths();
    println!("data_dir = {}", paths.data_dir.display());
    println!("source = {:?}", paths.source);
    println!("user = {}", ctx.user_id());
    for file in StoreFactory::store_files(&paths.data_dir) {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("{name} = {}", file.display());
    }
}
