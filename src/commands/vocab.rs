// Vocabulary listing

use colored::*;

use crate::vocabulary::Vocabulary;

pub fn handle_vocab() {
    for vocab in Vocabulary::ALL {
        println!("{} ({})", vocab.label().bold(), vocab.entries().len());
        for entry in vocab.entries() {
            println!("  {}", entry);
        }
        println!();
    }
    println!("Use \"random\" in any field to draw a value per headline.");
}
