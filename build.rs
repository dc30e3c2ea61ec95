//! Build script: tracks the embedded dictionary resources so a TSV edit
//! triggers a rebuild even though `include_str!` already covers this on
//! recent rustc versions.

fn main() {
    println!("cargo:rerun-if-changed=dictionaries/endings.tsv");
    println!("cargo:rerun-if-changed=dictionaries/particles.tsv");
}
