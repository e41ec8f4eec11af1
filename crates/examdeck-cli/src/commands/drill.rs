//! The `examdeck drill` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use examdeck_core::drill::DrillDeck;

pub fn execute(
    exam_ref: String,
    shuffle: bool,
    seed: Option<u64>,
    data_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let store = super::open_store(data_dir.as_deref(), config.as_deref())?;
    let exam = super::resolve_exam(&store, &exam_ref)?;

    let cards = exam.to_flashcards();
    anyhow::ensure!(
        !cards.is_empty(),
        "exam \"{}\" has no cards with answers to drill",
        exam.name
    );

    let mut deck = DrillDeck::new(cards);
    if shuffle || seed.is_some() {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        deck.shuffle(&mut rng);
    }

    println!("Drilling \"{}\" ({} cards)", exam.name, deck.card_count());
    println!("Commands: enter flip, k known, r repeat later, q quit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !deck.is_complete() {
        let Some(card) = deck.current_card() else {
            break;
        };
        println!(
            "[{}/{}] {}",
            deck.cursor() + 1,
            deck.card_count(),
            card.question
        );
        if deck.is_revealed() {
            println!("    -> {}", card.answer);
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let input = line?;
        match input.trim().to_lowercase().as_str() {
            "" | "f" => deck.flip(),
            "k" => deck.mark_known(),
            "r" => deck.mark_repeat(),
            "q" => break,
            other => println!("Unrecognized input: {other}"),
        }
    }

    if deck.is_complete() {
        println!("\nDeck complete: {} card(s) marked known.", deck.known_count());
    } else {
        println!(
            "\nStopped with {} of {} card(s) known.",
            deck.known_count(),
            deck.card_count()
        );
    }

    Ok(())
}
