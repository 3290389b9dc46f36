// End-to-end summarization scenarios.
//
// Each test drives the public API the way the crawler layer does: raw post
// text in, summary string (or full Summary) out.

use rapid_summarizer::{
    pair_similarity, summarize, PostSummarizer, RecordingObserver, Summarizer, SummarizerConfig,
    Tokenizer,
};

fn summarizer(k: usize) -> Summarizer {
    Summarizer::with_config(SummarizerConfig::default().with_num_sentences(k))
}

// ============================================================
// Scenario A: fewer sentences than requested
// ============================================================

#[test]
fn three_sentences_with_k_five_returned_unchanged() {
    let text = "Volcanoes erupt lava.  Guitars need tuning!\nBakers knead dough?";
    assert_eq!(summarize(text, 5), text);
}

#[test]
fn exactly_k_sentences_returned_unchanged() {
    let text = "Volcanoes erupt. Guitars hum. Bakers knead.";
    assert_eq!(summarize(text, 3), text);
}

#[test]
fn text_without_punctuation_is_one_sentence() {
    let text = "just a long run of words with no ending punctuation at all";
    assert_eq!(summarize(text, 1), text);
}

// ============================================================
// Scenario B: a hub sentence wins
// ============================================================

const HUB_DOC: [&str; 6] = [
    "Volcanoes erupt molten lava near villages.",
    "Guitarists tune strings before concerts.",
    "Volcanoes erupt molten lava while astronomers photograph distant comets.",
    "Bakers knead sourdough each morning.",
    "Astronomers photograph distant comets through telescopes.",
    "Sailors navigate stormy oceans carefully.",
];

#[test]
fn hub_sentence_scores_highest() {
    let text = HUB_DOC.join(" ");
    let mut observer = RecordingObserver::new();
    summarizer(3).summarize_with_observer(&text, &mut observer);

    let scores = observer.scores.expect("document should be ranked");
    assert_eq!(scores.len(), 6);
    for (i, &score) in scores.iter().enumerate() {
        if i != 2 {
            assert!(scores[2] > score, "sentence {i} outranks the hub");
        }
    }
}

#[test]
fn hub_sentence_and_neighbors_selected() {
    let text = HUB_DOC.join(" ");
    let summary = summarizer(3).summarize(&text);

    assert_eq!(summary.indices(), vec![0, 2, 4]);
    assert_eq!(
        summary.text,
        format!("{} {} {}", HUB_DOC[0], HUB_DOC[2], HUB_DOC[4])
    );
    assert!(summary.converged);
}

// ============================================================
// Scenario C: nothing in common
// ============================================================

const DISJOINT_DOC: &str = "Volcanoes erupt. Guitars hum. Bakers knead. \
                            Sailors navigate. Comets streak. Tomatoes ripen.";

#[test]
fn disjoint_sentences_get_uniform_scores() {
    let mut observer = RecordingObserver::new();
    summarizer(2).summarize_with_observer(DISJOINT_DOC, &mut observer);

    let scores = observer.scores.unwrap();
    for &score in &scores {
        assert!((score - 1.0 / 6.0).abs() < 1e-12);
    }
}

#[test]
fn disjoint_sentences_select_first_k() {
    assert_eq!(summarize(DISJOINT_DOC, 2), "Volcanoes erupt. Guitars hum.");
    assert_eq!(
        summarize(DISJOINT_DOC, 4),
        "Volcanoes erupt. Guitars hum. Bakers knead. Sailors navigate."
    );
}

#[test]
fn shared_stopwords_do_not_link_sentences() {
    // Sentences 1 and 2 only have "the" and "is" in common
    let text = "Volcanoes erupt lava. The guitar is here. The bread is there. \
                Volcanoes erupt lava again. Comets fly.";
    let summary = summarizer(2).summarize(text);
    assert_eq!(summary.indices(), vec![0, 3]);
}

#[test]
fn shared_content_words_link_sentences() {
    let tokenizer = Tokenizer::new("en");
    let a = tokenizer.tokenize("Our case shows the same problem again");
    let b = tokenizer.tokenize("This case is a real problem for everyone");
    assert!(pair_similarity(&a, &b) > 0.0);
}

#[test]
fn first_person_posts_split_after_i() {
    let text = "I asked for a refund and so did I. Then they refused. \
                Support never replied. I filed a complaint.";
    let summary = summarizer(3).summarize(text);
    assert_eq!(summary.num_input_sentences, 4);
}

// ============================================================
// Scenario D: empty input
// ============================================================

#[test]
fn empty_input_returns_empty() {
    for k in [0, 1, 5, 100] {
        assert_eq!(summarize("", k), "");
        assert_eq!(summarize("   \n\t", k), "");
    }
}

#[test]
fn zero_sentences_requested_returns_empty() {
    assert_eq!(summarize(DISJOINT_DOC, 0), "");
}

// ============================================================
// Determinism and formatting
// ============================================================

#[test]
fn repeated_runs_are_identical() {
    let text = HUB_DOC.join("\n\n");
    let first = summarize(&text, 2);
    for _ in 0..5 {
        assert_eq!(summarize(&text, 2), first);
    }
}

#[test]
fn selected_sentences_joined_with_single_space() {
    let text = HUB_DOC.join("\n\n   ");
    let summary = summarize(&text, 3);
    assert!(!summary.contains('\n'));
    assert!(!summary.contains("  "));
}

#[test]
fn summary_serializes_to_json() {
    let summary = summarizer(3).summarize(&HUB_DOC.join(" "));
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["num_input_sentences"], 6);
    assert_eq!(json["passthrough"], false);
    assert_eq!(json["sentences"].as_array().unwrap().len(), 3);
}

// ============================================================
// Post policy
// ============================================================

#[test]
fn post_policy_end_to_end() {
    let posts = PostSummarizer::new();

    assert_eq!(posts.summarize_post(""), "[No text content]");
    assert_eq!(posts.summarize_post(" \n"), " \n");

    let short = "Volcanoes erupt. Guitars hum. Bakers knead. Sailors navigate. \
                 Comets streak. Tomatoes ripen. Rivers flood.";
    assert_eq!(posts.summarize_post(short), short);

    let long = [HUB_DOC.join(" "), HUB_DOC.join(" ")].join(" ");
    assert!(posts.needs_summary(&long));
    let summary = posts.summarize_post(&long);
    assert!(summary.len() < long.len());
    assert!(summary.contains(HUB_DOC[2]));
}
