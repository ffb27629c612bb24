//! `phishlex schema` – feature column names, one per line.

use phishlex_core::Feature;

pub fn run_schema(reduced: bool) {
    for name in Feature::column_names(reduced) {
        println!("{name}");
    }
}
