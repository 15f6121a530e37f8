pub mod kamus_entry;
