//! Synthetic WhatsApp export generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_chat -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_chat -- 50000 big_chat.txt

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol Smith",
    "Иван",
    "María José",
    "+1 555 0100",
    "🔥FireUser🔥",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "💀", "🔥", "👍", "👍🏽", "❤️", "💔", "🎉",
    "🍕", "🌈",
];

const POSITIVE: &[&str] = &[
    "I love this, great job!",
    "Happy birthday!! have a wonderful day",
    "haha that is so funny :)",
    "Thanks a lot, really appreciate it",
    "Best pizza ever",
];

const NEGATIVE: &[&str] = &[
    "This is terrible, I hate waiting",
    "So tired and sad today",
    "The train is late again, worst service",
    "ugh my phone is broken :(",
    "not good at all",
];

const NEUTRAL: &[&str] = &[
    "Meet at the station at 6",
    "Where are the keys",
    "Call me when you arrive",
    "The meeting moved to Thursday",
    "Sending the documents now",
];

const FOREIGN: &[&str] = &[
    "Привет, как дела? Давно не виделись",
    "Hola, ¿cómo estás? Nos vemos mañana en la playa",
    "Bonjour à tous, on se retrouve ce soir au restaurant",
    "Guten Morgen, wir treffen uns um acht Uhr am Bahnhof",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);
    let output = args.get(2).map_or("synthetic_chat.txt", String::as_str);

    println!("Synthetic WhatsApp export");
    println!("   Messages: {count}");
    println!("   Output:   {output}");

    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;
    let mut timestamp = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid start date");

    for i in 0..count {
        timestamp += Duration::minutes(rng.gen_range(1..=240));
        let sender = SENDERS.choose(&mut rng).expect("non-empty senders");
        let body = generate_body(&mut rng, i);

        let mut lines = body.lines();
        let first = lines.next().unwrap_or_default();
        let mut chunk = format!("{} - {}: {}\n", format_timestamp(timestamp), sender, first);
        // Remaining lines become continuation lines, as in real exports
        for rest in lines {
            chunk.push_str(rest);
            chunk.push('\n');
        }

        if i % 500 == 250 {
            chunk.push_str(&format!(
                "{} - Messages and calls are end-to-end encrypted.\n",
                format_timestamp(timestamp)
            ));
        }

        bytes_written += chunk.len();
        writer
            .write_all(chunk.as_bytes())
            .expect("Failed to write output");
    }

    writer.flush().expect("Failed to flush output");

    let elapsed = start.elapsed();
    println!("\nDone!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
}

/// Formats like an Android export in a US locale: `3/31/25, 3:54 PM`.
fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%-m/%-d/%y, %-I:%M %p").to_string()
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=2 => pick(rng, NEUTRAL),
        3 | 4 => pick(rng, POSITIVE),
        5 => pick(rng, NEGATIVE),
        6 => "<Media omitted>".to_string(),
        7 => format!("check this out https://example.com/item/{index}"),
        8 => {
            let emojis: String = (0..rng.gen_range(1..6))
                .map(|_| EMOJIS[rng.gen_range(0..EMOJIS.len())])
                .collect();
            format!("{} {emojis}", pick(rng, POSITIVE))
        }
        9 => pick(rng, FOREIGN),
        10 => format!("{}\nand one more thing\nsee you", pick(rng, NEUTRAL)),
        _ => format!("ok #{index}: time is 10:30"),
    }
}

fn pick(rng: &mut impl Rng, pool: &[&str]) -> String {
    pool[rng.gen_range(0..pool.len())].to_string()
}
