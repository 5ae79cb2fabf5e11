//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `voicenote_core` linkage.
//! - Walk the add/search/remove flow once with deterministic output.

use voicenote_core::{filter_notes, Composer, MemoryKeyValueStore, NoteStore};

fn main() {
    println!("voicenote_core version={}", voicenote_core::core_version());

    let mut store = match NoteStore::load(MemoryKeyValueStore::new()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("store load failed: {err}");
            std::process::exit(1);
        }
    };

    let mut composer = Composer::open();
    for content in ["buy milk", "call the dentist"] {
        composer.begin_typing();
        composer.set_content(content);
        if let Err(err) = composer.submit(&mut store) {
            eprintln!("submit failed: {err}");
            std::process::exit(1);
        }
    }
    println!("notes count={}", store.notes().len());

    let hits = filter_notes(store.notes(), "milk");
    println!("search query=milk hits={}", hits.len());

    let newest = store.notes()[0].id;
    match store.remove(newest) {
        Ok(notes) => println!("remove ok count={}", notes.len()),
        Err(err) => {
            eprintln!("remove failed: {err}");
            std::process::exit(1);
        }
    }
}
