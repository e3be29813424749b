//! Property-based tests for chatlens.
//!
//! These tests generate random exports and record tables to find edge cases.

use proptest::prelude::*;

use chatlens::analysis::{
    Participant, activity_heatmap, basic_stats, busiest_senders, common_words, emoji_frequency,
    filter_records, is_emoji, monthly_timeline, participants,
};
use chatlens::config::MEDIA_OMITTED;
use chatlens::resources;
use chatlens::sentiment::SentimentAnalyzer;
use chatlens::{MessageRecord, parse};
use chrono::{NaiveDate, NaiveDateTime};

const SENDERS: &[&str] = &["Alice", "Bob", "Charlie", "Иван", "User 123", "🔥Fire🔥"];

const BODIES: &[&str] = &[
    "Hello",
    "Hi there!",
    "How are you?",
    "I love this so much",
    "this is terrible",
    "the and of to",
    "Привет мир",
    "<Media omitted>",
    "see https://example.com",
    "🎉🔥💀 emoji party 🎉",
    "👍🏽 ok",
    "go team 🇮🇳🇧🇷",
    "time: 10:30",
];

fn arb_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2015i32..2030, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    })
}

/// Generate a random record using fast strategies (no regex!)
fn arb_record() -> impl Strategy<Value = MessageRecord> {
    (
        prop::sample::select(SENDERS),
        prop::sample::select(BODIES),
        arb_timestamp(),
    )
        .prop_map(|(sender, body, ts)| MessageRecord::with_language(ts, sender, body, "en"))
}

fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<MessageRecord>> {
    prop::collection::vec(arb_record(), 0..max_len)
}

/// Formats a timestamp the way a US-locale Android export does.
fn export_line(ts: NaiveDateTime, sender: &str, body: &str) -> String {
    format!("{} - {}: {}", ts.format("%-m/%-d/%y, %-I:%M %p"), sender, body)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// A valid line yields exactly one record carrying its groups verbatim
    #[test]
    fn single_line_round_trips(
        ts in arb_timestamp(),
        sender in prop::sample::select(SENDERS),
        body in prop::sample::select(BODIES),
    ) {
        let chat = parse(&export_line(ts, sender, body)).unwrap();
        prop_assert_eq!(chat.len(), 1);
        let record = &chat.records()[0];
        prop_assert_eq!(record.sender(), sender);
        prop_assert_eq!(record.body(), body);
        prop_assert_eq!(record.timestamp(), ts);
    }

    /// Every line of a generated export becomes a record, in order
    #[test]
    fn export_preserves_count_and_order(records in arb_records(30)) {
        let export: Vec<String> = records
            .iter()
            .map(|r| export_line(r.timestamp(), r.sender(), r.body()))
            .collect();
        let chat = parse(&export.join("\n")).unwrap();
        prop_assert_eq!(chat.len(), records.len());
        prop_assert_eq!(chat.dropped_lines(), 0);
        for (parsed, original) in chat.records().iter().zip(&records) {
            prop_assert_eq!(parsed.sender(), original.sender());
            prop_assert_eq!(parsed.body(), original.body());
        }
    }

    /// Hour buckets are always "<h>-<h+1>"
    #[test]
    fn hour_bucket_matches_hour(record in arb_record()) {
        let expected = format!("{}-{}", record.hour(), record.hour() + 1);
        prop_assert_eq!(record.hour_bucket(), expected.as_str());
    }

    // ============================================
    // AGGREGATOR PROPERTIES
    // ============================================

    /// Overall sees every record; a sender filter sees only that sender
    #[test]
    fn filter_partitions_table(records in arb_records(40)) {
        prop_assert_eq!(filter_records(&Participant::Overall, &records).len(), records.len());

        let mut total = 0;
        for participant in participants(&records).into_iter().skip(1) {
            let Participant::Sender(name) = &participant else { unreachable!() };
            let filtered = filter_records(&participant, &records);
            prop_assert!(filtered.iter().all(|r| r.sender() == name));
            total += filtered.len();
        }
        prop_assert_eq!(total, records.len());
    }

    /// Media count equals the number of exact placeholders
    #[test]
    fn media_count_matches(records in arb_records(40)) {
        let stats = basic_stats(&Participant::Overall, &records, MEDIA_OMITTED);
        let expected = records.iter().filter(|r| r.body() == MEDIA_OMITTED).count();
        prop_assert_eq!(stats.messages, records.len());
        prop_assert_eq!(stats.media, expected);
    }

    /// Common words never contain stopwords and never exceed N
    #[test]
    fn common_words_exclude_stopwords(records in arb_records(40), n in 1usize..25) {
        let common = common_words(&Participant::Overall, &records, MEDIA_OMITTED, n);
        prop_assert!(common.len() <= n);
        for (word, _) in &common {
            prop_assert!(!resources::is_stopword(word));
        }
        prop_assert!(common.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    /// Sender shares sum to 100, however many senders there are
    #[test]
    fn busiest_shares_sum_to_100(senders in prop::collection::vec(0usize..80, 1..200)) {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let records: Vec<MessageRecord> = senders
            .iter()
            .map(|i| MessageRecord::with_language(ts, format!("user{i}"), "hi", "en"))
            .collect();
        let busiest = busiest_senders(&records, 5);
        let total: f64 = busiest.shares.iter().map(|(_, p)| p).sum();
        prop_assert!((total - 100.0).abs() < 1e-9, "total = {}", total);
        prop_assert!(busiest.top.len() <= 5);
    }

    /// Heatmap cells sum to the filtered record count
    #[test]
    fn heatmap_sums_to_count(records in arb_records(40)) {
        for participant in participants(&records) {
            let heatmap = activity_heatmap(&participant, &records);
            prop_assert_eq!(heatmap.total(), filter_records(&participant, &records).len());
        }
    }

    /// Monthly timeline labels are chronological
    #[test]
    fn monthly_timeline_is_chronological(records in arb_records(40)) {
        let timeline = monthly_timeline(&Participant::Overall, &records);
        let keys: Vec<(i32, u32)> = timeline
            .iter()
            .map(|(label, _)| {
                let (month, year) = label.split_once('-').unwrap();
                let month = (1..=12)
                    .find(|m| chatlens::record::month_name(*m) == month)
                    .unwrap();
                (year.parse().unwrap(), month)
            })
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        let total: usize = timeline.iter().map(|(_, c)| c).sum();
        prop_assert_eq!(total, records.len());
    }

    /// Emoji counts sum to the emoji code points in the bodies
    #[test]
    fn emoji_counts_match_code_points(records in arb_records(40)) {
        let freq = emoji_frequency(&Participant::Overall, &records);
        let counted: usize = freq.iter().map(|(_, c)| c).sum();
        let expected = records
            .iter()
            .flat_map(|r| r.body().chars())
            .filter(|c| is_emoji(*c))
            .count();
        prop_assert_eq!(counted, expected);
    }

    /// Sentiment scoring is deterministic and bounded
    #[test]
    fn sentiment_is_deterministic(body in prop::sample::select(BODIES)) {
        let scorer = SentimentAnalyzer::new();
        let a = scorer.polarity_scores(body);
        let b = scorer.polarity_scores(body);
        prop_assert_eq!(a, b);
        prop_assert!((-1.0..=1.0).contains(&a.compound));
        prop_assert_eq!(scorer.classify(body), scorer.classify(body));
    }
}
