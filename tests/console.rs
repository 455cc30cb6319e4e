//! Console, menu and interactive game tests driven by scripted input.

use std::io::Cursor;

use casino::games::{blackjack, guess, slots};
use casino::{
    Card, Casino, Color, Console, ConsoleError, GameError, GameOutcome, MenuChoice, Rank, Shoe,
    Suit, TableOptions,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type Scripted = Console<Cursor<&'static str>, Vec<u8>>;

fn console(input: &'static str) -> Scripted {
    Console::new(Cursor::new(input), Vec::new(), TableOptions::plain())
}

fn output(console: Scripted) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn prompt_parses_or_returns_none() {
    let mut console = console("7\nseven\n");
    assert_eq!(console.prompt::<u32>().unwrap(), Some(7));
    assert_eq!(console.prompt::<u32>().unwrap(), None);
    assert!(matches!(
        console.prompt::<u32>().unwrap_err(),
        ConsoleError::Closed
    ));
    assert_eq!(output(console), "> > > ");
}

#[test]
fn prompt_treats_invalid_utf8_as_bad_answer() {
    let mut console = Console::new(
        Cursor::new(&b"\xff\xfe\n3\n"[..]),
        Vec::<u8>::new(),
        TableOptions::plain(),
    );
    assert_eq!(console.prompt::<u32>().unwrap(), None);
    assert_eq!(console.prompt::<u32>().unwrap(), Some(3));
}

#[test]
fn paint_respects_color_option() {
    let plain = console("");
    assert_eq!(plain.paint("hi", Color::Red), "hi");

    let colored = Console::new(
        Cursor::new(""),
        Vec::<u8>::new(),
        TableOptions::plain().with_color(true),
    );
    assert_eq!(colored.paint("hi", Color::Red), "\x1b[31mhi\x1b[0m");
}

#[test]
fn clear_screen_respects_option() {
    let mut plain = console("");
    plain.clear().unwrap();
    assert_eq!(output(plain), "");

    let mut clearing = Console::new(
        Cursor::new(""),
        Vec::<u8>::new(),
        TableOptions::plain().with_clear_screen(true),
    );
    clearing.clear().unwrap();
    assert_eq!(
        String::from_utf8(clearing.into_output()).unwrap(),
        "\x1b[2J\x1b[1;1H"
    );
}

#[test]
fn menu_choice_numbers_are_one_based() {
    assert_eq!(MenuChoice::from_choice(1), Some(MenuChoice::GuessTheNumber));
    assert_eq!(MenuChoice::from_choice(4), Some(MenuChoice::Blackjack));
    assert_eq!(MenuChoice::from_choice(5), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::from_choice(0), None);
    assert_eq!(MenuChoice::from_choice(6), None);
    assert_eq!(MenuChoice::Roulette.label(), "Roulette");
}

#[test]
fn blackjack_natural_skips_prompt() {
    let mut console = console("");
    let shoe = Shoe::from_draws(&[
        card(Rank::Nine, Suit::Clubs),  // dealer
        card(Rank::Seven, Suit::Clubs), // dealer hole
        card(Rank::Ace, Suit::Spades),  // player
        card(Rank::King, Suit::Hearts), // player
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Win);

    let text = output(console);
    assert!(!text.contains("What would you like to do?"));
    assert!(text.contains(blackjack::DEALER_NOTICE));
    assert!(text.contains("You win! Your score is 21 and the dealer's score is 16."));
}

#[test]
fn blackjack_natural_against_dealer_natural_is_tie() {
    let mut console = console("");
    let shoe = Shoe::from_draws(&[
        card(Rank::Ace, Suit::Clubs),   // dealer
        card(Rank::Queen, Suit::Clubs), // dealer hole
        card(Rank::Ace, Suit::Spades),  // player
        card(Rank::King, Suit::Hearts), // player
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Win);

    let text = output(console);
    assert!(!text.contains("What would you like to do?"));
    assert!(text.contains("It's a tie! Your score is 21 and the dealer's score is 21."));
}

#[test]
fn blackjack_reprompts_on_invalid_choice() {
    let mut console = console("x\n5\n2\n");
    let shoe = Shoe::from_draws(&[
        card(Rank::Ten, Suit::Clubs),   // dealer
        card(Rank::Queen, Suit::Clubs), // dealer hole
        card(Rank::King, Suit::Spades), // player
        card(Rank::Jack, Suit::Hearts), // player
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Win);

    let text = output(console);
    assert_eq!(text.matches("Invalid choice. Please try again.").count(), 2);
    assert_eq!(text.matches("[1] Hit").count(), 3);
    assert!(text.contains("It's a tie! Your score is 20 and the dealer's score is 20."));
}

#[test]
fn blackjack_reprompts_on_invalid_utf8_choice() {
    let mut console = Console::new(
        Cursor::new(&b"\xff\xfe\n2\n"[..]),
        Vec::<u8>::new(),
        TableOptions::plain(),
    );
    let shoe = Shoe::from_draws(&[
        card(Rank::Ten, Suit::Clubs),    // dealer
        card(Rank::Nine, Suit::Clubs),   // dealer hole
        card(Rank::Ten, Suit::Spades),   // player
        card(Rank::Eight, Suit::Hearts), // player
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Loss);

    let text = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(text.matches("Invalid choice. Please try again.").count(), 1);
    assert!(text.contains("You lost. Your score is 18 and the dealer's score is 19."));
}

#[test]
fn blackjack_hit_to_21_wins_without_dealer_draw() {
    let mut console = console("1\n");
    let shoe = Shoe::from_draws(&[
        card(Rank::Ten, Suit::Clubs),    // dealer
        card(Rank::Two, Suit::Clubs),    // dealer hole
        card(Rank::Ten, Suit::Spades),   // player
        card(Rank::Five, Suit::Hearts),  // player
        card(Rank::Six, Suit::Diamonds), // player hit
        card(Rank::King, Suit::Hearts),  // never drawn
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Win);

    let text = output(console);
    assert_eq!(text.matches("What would you like to do?").count(), 1);
    assert!(text.contains("You win! Your score is 21 and the dealer's score is 12."));

    let reveal = &text[text.rfind("Dealer's Hand:").unwrap()..];
    assert!(reveal.contains("│2       │"));
    assert!(!reveal.contains("│K       │"));
}

#[test]
fn blackjack_bust_reveals_hole_card() {
    let mut console = console("1\n");
    let shoe = Shoe::from_draws(&[
        card(Rank::Nine, Suit::Clubs),   // dealer
        card(Rank::Seven, Suit::Clubs),  // dealer hole
        card(Rank::Ten, Suit::Spades),   // player
        card(Rank::Six, Suit::Hearts),   // player
        card(Rank::Six, Suit::Diamonds), // player hit
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Loss);

    let text = output(console);
    assert!(text.contains("You busted! Your score is 22."));

    let (opening, reveal) = text.split_at(text.rfind("Dealer's Hand:").unwrap());
    assert!(opening.contains('░'));
    assert!(!reveal.contains('░'));
    assert!(reveal.contains("│7       │"));
}

#[test]
fn blackjack_hit_then_stand_against_dealer_draws() {
    let mut console = console("1\n2\n");
    let shoe = Shoe::from_draws(&[
        card(Rank::Ten, Suit::Clubs),    // dealer
        card(Rank::Five, Suit::Clubs),   // dealer hole
        card(Rank::Five, Suit::Spades),  // player
        card(Rank::Six, Suit::Hearts),   // player
        card(Rank::Two, Suit::Diamonds), // player hit
        card(Rank::Queen, Suit::Hearts), // dealer draw
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Win);
    assert!(output(console).contains("You win! Dealer busted! Their score is 25."));
}

#[test]
fn blackjack_dealer_higher_is_loss() {
    let mut console = console("2\n");
    let shoe = Shoe::from_draws(&[
        card(Rank::Ten, Suit::Clubs),    // dealer
        card(Rank::Nine, Suit::Clubs),   // dealer hole
        card(Rank::Ten, Suit::Spades),   // player
        card(Rank::Eight, Suit::Hearts), // player
    ]);

    let outcome = blackjack::play_with_shoe(&mut console, shoe).unwrap();
    assert_eq!(outcome, GameOutcome::Loss);
    assert!(output(console).contains("You lost. Your score is 18 and the dealer's score is 19."));
}

#[test]
fn blackjack_closed_input_is_reported() {
    let mut console = console("");
    let shoe = Shoe::from_draws(&[
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Eight, Suit::Hearts),
    ]);

    let err = blackjack::play_with_shoe(&mut console, shoe).unwrap_err();
    assert!(err.is_closed());
}

#[test]
fn guess_matches_secret() {
    let mut console = console("abc\n42\n");
    let outcome = guess::play_with_secret(&mut console, 42).unwrap();
    assert_eq!(outcome, GameOutcome::Win);

    let text = output(console);
    assert!(text.contains("Please enter a number."));
    assert!(text.contains("You guessed: 42"));
    assert!(text.contains("Congratulations! You guessed the number!"));
}

#[test]
fn guess_miss_reveals_secret() {
    let mut console = console("8\n");
    let outcome = guess::play_with_secret(&mut console, 7).unwrap();
    assert_eq!(outcome, GameOutcome::Loss);
    assert!(output(console).contains("You lost. The winning number was 7."));
}

#[test]
fn slot_reels_are_permutations_of_symbols() {
    let reels = slots::Reels::spin(&mut ChaCha8Rng::seed_from_u64(9));

    let mut expected = slots::SYMBOLS.to_vec();
    expected.sort_unstable();
    for index in 0..slots::REEL_COUNT {
        let mut reel = reels.reel(index).unwrap().to_vec();
        reel.sort_unstable();
        assert_eq!(reel, expected);
    }

    let frames: Vec<_> = reels.frames().collect();
    assert_eq!(frames.len(), slots::SYMBOLS.len());
    assert_eq!(frames[0][1], reels.reel(1).unwrap()[0]);
}

#[test]
fn slot_reel_out_of_range_is_none() {
    let reels = slots::Reels::spin(&mut ChaCha8Rng::seed_from_u64(9));
    assert!(reels.reel(slots::REEL_COUNT).is_none());
    assert!(reels.reel(usize::MAX).is_none());
}

#[test]
fn slot_animation_prints_every_frame() {
    let mut console = console("");
    let reels = slots::Reels::spin(&mut ChaCha8Rng::seed_from_u64(3));
    slots::animate(&mut console, &reels).unwrap();

    let text = output(console);
    assert_eq!(text.matches("┌─────┬─────┬─────┐").count(), slots::SYMBOLS.len());
    assert!(text.contains(&slots::render_frame(reels.frames().next().unwrap())[1]));
}

#[test]
fn casino_reprompts_and_exits() {
    let mut casino = Casino::new(console("9\nabc\n2\n5\n"));
    casino.run().unwrap();

    let text = output(casino.into_console());
    assert_eq!(text.matches("Welcome to the Casino!").count(), 4);
    assert!(text.contains("[4] Blackjack"));
    assert!(text.ends_with("Thanks for playing! Goodbye!\n"));
}

#[test]
fn casino_runs_slots_then_waits_for_enter() {
    let mut casino = Casino::new(console("3\n\n5\n"));
    casino.run().unwrap();

    let text = output(casino.into_console());
    assert!(text.contains("Press <ENTER> to continue playing..."));
    assert!(text.contains("┌─────┬─────┬─────┐"));
}

#[test]
fn casino_roulette_is_not_a_game() {
    let mut casino = Casino::new(console(""));
    assert_eq!(casino.play(MenuChoice::Roulette).unwrap(), None);
    assert_eq!(casino.play(MenuChoice::Exit).unwrap(), None);
}

#[test]
fn casino_stops_when_input_closes() {
    let mut casino = Casino::new(console("1\n"));
    let err = casino.run().unwrap_err();
    assert!(matches!(err, GameError::Console(ConsoleError::Closed)));
}
