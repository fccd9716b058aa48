use std::sync::Arc;

use plume::engine::cta::CTA_EXAMPLES;
use plume::engine::lexicon::{DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS, DEFAULT_STOP_WORDS};
use plume::engine::{
    self, ContentEngine, EngagementTier, FixedCtaSelector, ReadabilityLevel, ReadabilityResult,
    SentimentLabel, SentimentResult, SuggestionKind,
};
use plume::error::Result;

const SAMPLE_POSTS: &[&str] = &[
    "",
    "   ",
    "?!",
    "Hi. Bye.",
    "This is great, amazing, wonderful!",
    "This update is terrible. Everything feels broken and slow.",
    "cats cats dogs dogs dogs birds",
    "Huge news 🚀 #launch today! What do you think?",
    "Ünïcödé wörds ånd naïve café résumé... still counted?",
    "one two three four five six seven eight nine ten eleven twelve thirteen fourteen \
     fifteen sixteen seventeen eighteen nineteen twenty twentyone twentytwo twentythree \
     twentyfour twentyfive twentysix",
    "I love it. I hate it. Love, hate, love!!! ...",
];

fn deterministic_engine() -> Result<ContentEngine> {
    Ok(ContentEngine::new(Default::default())?.with_cta_selector(Arc::new(FixedCtaSelector(0))))
}

fn kinds(suggestions: &[engine::EngagementSuggestion]) -> Vec<SuggestionKind> {
    suggestions.iter().map(|s| s.kind).collect()
}

#[test]
fn sentiment_counts_every_lexicon_hit() {
    let sentiment = engine::analyze_sentiment("This is great, amazing, wonderful!");

    assert_eq!(sentiment.positive_count, 3);
    assert_eq!(sentiment.negative_count, 0);
    assert_eq!(sentiment.score, 1.0);
    assert_eq!(sentiment.label, SentimentLabel::Positive);
}

#[test]
fn readability_of_two_short_sentences() {
    let readability = engine::analyze_readability("Hi. Bye.");

    assert_eq!(readability.total_sentences, 2);
    assert_eq!(readability.avg_words_per_sentence, 1.0);
    assert!(readability.long_sentences.is_empty());
    assert_eq!(readability.readability_level, ReadabilityLevel::Easy);
}

#[test]
fn hashtags_ranked_by_frequency() {
    assert_eq!(
        engine::extract_hashtags("cats cats dogs dogs dogs birds", 2),
        vec!["#dogs", "#cats"]
    );
}

#[test]
fn negative_hard_short_post_scores_fifteen() -> Result<()> {
    let engine = deterministic_engine()?;
    let text = "one two three four five six seven eight nine ten";
    let sentiment = SentimentResult::from_counts(0, 2);
    let readability = ReadabilityResult {
        avg_words_per_sentence: 21.0,
        long_sentences: vec!["a sentence that ran on".to_string()],
        total_sentences: 1,
        readability_level: ReadabilityLevel::Hard,
    };
    let hashtags = vec!["#three".to_string()];

    let engagement = engine.calculate_engagement(text, &sentiment, &readability, &hashtags);

    assert_eq!(engagement.score, 15);
    assert_eq!(engagement.tier(), EngagementTier::NeedsWork);
    assert_eq!(
        kinds(&engagement.suggestions),
        vec![
            SuggestionKind::Hashtag,
            SuggestionKind::Cta,
            SuggestionKind::Shorten,
            SuggestionKind::Readability,
            SuggestionKind::Emoji,
        ]
    );
    assert_eq!(engagement.suggestions[1].description, CTA_EXAMPLES[0]);

    // Without hashtags or long sentences those two suggestions disappear.
    let readability = ReadabilityResult {
        long_sentences: Vec::new(),
        ..readability
    };
    let engagement = engine.calculate_engagement(text, &sentiment, &readability, &[]);
    assert_eq!(engagement.score, 15);
    assert_eq!(
        kinds(&engagement.suggestions),
        vec![
            SuggestionKind::Cta,
            SuggestionKind::Readability,
            SuggestionKind::Emoji,
        ]
    );
    Ok(())
}

#[test]
fn blank_input_is_not_analyzed() {
    assert!(engine::analyze("").is_none());
    assert!(engine::analyze(" \t\n ").is_none());
}

#[test]
fn negative_post_end_to_end() -> Result<()> {
    let engine = deterministic_engine()?;
    let result = engine
        .analyze("This update is terrible. Everything feels broken and slow.")
        .expect("non-blank text is analyzed");

    assert_eq!(result.word_count, 9);
    assert_eq!(result.sentiment.negative_count, 2);
    assert_eq!(result.sentiment.label, SentimentLabel::Negative);
    assert_eq!(result.readability.total_sentences, 2);
    assert_eq!(result.readability.avg_words_per_sentence, 4.5);
    assert_eq!(
        result.hashtags,
        vec!["#update", "#terrible", "#everything", "#feels", "#broken"]
    );
    // 50 - 10 (negative) + 10 (easy) - 15 (short) = 35
    assert_eq!(result.engagement.score, 35);
    assert_eq!(
        kinds(&result.engagement.suggestions),
        vec![SuggestionKind::Hashtag, SuggestionKind::Cta, SuggestionKind::Emoji]
    );
    assert_eq!(
        result.engagement.suggestions[0].description,
        "Boost discoverability with: #update #terrible #everything"
    );
    Ok(())
}

#[test]
fn polished_post_reaches_the_ceiling() -> Result<()> {
    let engine = deterministic_engine()?;
    let mut text = "We shipped a great new feature today. ".repeat(8);
    text.push_str("#launch 🚀 What do you think?");

    let result = engine.analyze(&text).expect("non-blank text is analyzed");

    assert_eq!(result.word_count, 61);
    assert_eq!(result.readability.total_sentences, 9);
    assert_eq!(result.readability.readability_level, ReadabilityLevel::Easy);
    assert_eq!(result.sentiment.label, SentimentLabel::Positive);
    // 50 + 15 + 10 + 10 + 5 + 5 + 5 = 100
    assert_eq!(result.engagement.score, 100);
    assert_eq!(result.engagement.tier(), EngagementTier::Strong);
    assert!(result.engagement.suggestions.is_empty());
    Ok(())
}

#[test]
fn word_count_is_zero_for_empty_text() {
    assert_eq!(engine::word_count(""), 0);
    assert_eq!(engine::word_count("?!..."), 0);
    assert_eq!(engine::word_count("snake_case counts once"), 3);
}

#[test]
fn sentiment_label_follows_score() {
    for text in SAMPLE_POSTS {
        let sentiment = engine::analyze_sentiment(text);
        assert!((-1.0..=1.0).contains(&sentiment.score), "{text:?}");
        assert_eq!(sentiment.label, SentimentLabel::from_score(sentiment.score));

        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        let positive = words.iter().filter(|w| DEFAULT_POSITIVE_WORDS.contains(**w)).count();
        let negative = words.iter().filter(|w| DEFAULT_NEGATIVE_WORDS.contains(**w)).count();
        assert_eq!(sentiment.positive_count, positive, "{text:?}");
        assert_eq!(sentiment.negative_count, negative, "{text:?}");
    }
}

#[test]
fn analyzers_are_idempotent() -> Result<()> {
    let engine = deterministic_engine()?;
    for text in SAMPLE_POSTS {
        assert_eq!(engine.analyze(text), engine.analyze(text));
        assert_eq!(engine.analyze_sentiment(text), engine.analyze_sentiment(text));
        assert_eq!(engine.analyze_readability(text), engine.analyze_readability(text));
        assert_eq!(engine.extract_hashtags(text, 5), engine.extract_hashtags(text, 5));
    }
    Ok(())
}

#[test]
fn random_cta_only_varies_description() {
    let text = "No question here";
    for _ in 0..10 {
        let a = engine::analyze(text).expect("non-blank text is analyzed");
        let b = engine::analyze(text).expect("non-blank text is analyzed");
        assert_eq!(a.engagement.score, b.engagement.score);
        assert_eq!(kinds(&a.engagement.suggestions), kinds(&b.engagement.suggestions));

        let cta = &a.engagement.suggestions[1];
        assert_eq!(cta.kind, SuggestionKind::Cta);
        assert!(CTA_EXAMPLES.contains(&cta.description.as_str()));
    }
}

#[test]
fn no_sentences_means_easy_and_zero_average() {
    for text in SAMPLE_POSTS {
        let readability = engine::analyze_readability(text);
        if readability.total_sentences == 0 {
            assert_eq!(readability.avg_words_per_sentence, 0.0);
            assert_eq!(readability.readability_level, ReadabilityLevel::Easy);
        }
    }
}

#[test]
fn zero_hashtags_requested() {
    for text in SAMPLE_POSTS {
        assert!(engine::extract_hashtags(text, 0).is_empty());
    }
}

#[test]
fn hashtags_skip_short_and_stop_words() {
    for text in SAMPLE_POSTS {
        for tag in engine::extract_hashtags(text, 50) {
            let term = tag.strip_prefix('#').expect("hashtags start with #");
            assert!(term.len() >= 3, "{tag}");
            assert!(!DEFAULT_STOP_WORDS.contains(term), "{tag}");
            assert!(term.chars().all(|c| c.is_ascii_lowercase()), "{tag}");
        }
    }
}

#[test]
fn engagement_score_stays_in_range() -> Result<()> {
    let engine = deterministic_engine()?;
    let labels = [
        SentimentResult::from_counts(5, 0),
        SentimentResult::from_counts(0, 5),
        SentimentResult::default(),
    ];
    let levels = [
        ReadabilityLevel::Easy,
        ReadabilityLevel::Moderate,
        ReadabilityLevel::Hard,
    ];
    let long_text = "word ".repeat(400);
    let texts = [
        "",
        "tiny",
        "#tag 🚀 question?",
        long_text.as_str(),
    ];

    for text in texts {
        for sentiment in &labels {
            for level in levels {
                let readability = ReadabilityResult {
                    readability_level: level,
                    ..ReadabilityResult::default()
                };
                let engagement = engine.calculate_engagement(text, sentiment, &readability, &[]);
                assert!(engagement.score <= 100);
            }
        }
    }
    Ok(())
}

#[test]
fn shorten_suggestion_quotes_long_sentence_count() -> Result<()> {
    let engine = deterministic_engine()?;
    let long = "word ".repeat(30);
    let text = format!("{long}. {long}. Short one.");

    let result = engine.analyze(&text).expect("non-blank text is analyzed");

    assert_eq!(result.readability.long_sentences.len(), 2);
    let shorten = result
        .engagement
        .suggestions
        .iter()
        .find(|s| s.kind == SuggestionKind::Shorten)
        .expect("shorten suggestion present");
    assert_eq!(
        shorten.description,
        "2 sentence(s) exceed 25 words. Break them up for better readability."
    );
    assert_eq!(shorten.icon, "Scissors");
    Ok(())
}
