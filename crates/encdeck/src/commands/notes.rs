use colored::Colorize;

use crate::deck;

/// Print the presenter notes for every slide to the terminal.
pub fn run() {
    let deck = deck::build();

    println!("{}", deck.title.bold());
    println!();

    for (i, slide) in deck.slides.iter().enumerate() {
        println!(
            "{} {}",
            format!("{:02}", i + 1).cyan(),
            slide.title.bold()
        );
        println!("   {}", slide.kicker.dimmed());
        match slide.notes.as_deref() {
            Some(notes) => println!("   {notes}"),
            None => println!("   -"),
        }
        println!();
    }

    println!(
        "{}",
        format!("{} slides", deck.len()).dimmed()
    );
}
