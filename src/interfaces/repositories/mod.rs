pub mod kamus_alay;
