use std::path::Path;

use tweetsent::io::read_table;
use tweetsent::pipelines::{
    Pipeline, Preprocess, PreprocessConfig, Score, ScoreConfig, Tokenize, TokenizeConfig,
};
use tweetsent::types::columns::{
    CREATED_AT, DATETIME, EMOJIS, EMOTICONS, MIX, PLAIN_TEXT, RETWEET, SWN, TEXT, TWEETID, VADER,
};

const DUMP: &str = "scraped on 2018-10-12\n\
TextTW : I love this movie :)\n\
Tweetid : 1\n\
Created_At : Wed Oct 10 20:19:24 +0000 2018\n\
Lang : en\n\
TextTW : RT @bob: great day 😂\n\
Tweetid : 2\n\
Created_At : Thu Oct 11 10:00:00 +0000 2018\n\
User_Author : bob\n\
Lang : en\n\
TextTW : truncated chunk without id\n";

const VADER_LEXICON: &str = "love\t3.2\t0.4\t[3, 3, 3, 4, 3]\n\
great\t3.1\t0.7\t[3, 3, 4, 2, 4]\n\
joy\t2.8\t0.7\t[3, 2, 3, 4, 3]\n";

const SWN_LEXICON: &str = "# POS\tID\tPosScore\tNegScore\tSynsetTerms\tGloss\n\
n\t07543288\t0.5\t0\tlove#1 passion#1\ta strong positive emotion\n\
a\t01123148\t0.75\t0\tgreat#1\trelatively large in size\n\
n\t15155220\t0\t0\tday#1 twenty-four_hours#1\ttime for earth to rotate\n";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn preprocess(dir: &Path) -> std::path::PathBuf {
    let src = write(dir, "dump.txt", DUMP);
    let dst = dir.join("csv").join("tweets.csv");
    Preprocess::new(PreprocessConfig {
        src,
        dst: dst.clone(),
    })
    .run()
    .unwrap();
    dst
}

#[test_log::test]
fn preprocess_writes_indexed_table() {
    let dir = tempfile::tempdir().unwrap();
    let dst = preprocess(dir.path());

    let table = read_table(&dst).unwrap();
    assert_eq!(table.index(), Some(TWEETID));
    assert_eq!(table.column(TWEETID), vec!["1", "2"]);
    assert_eq!(
        table.column(TEXT),
        vec!["i love this movie :)", "great day 😂"]
    );
    assert_eq!(table.column(RETWEET), vec!["False", "True"]);
    assert_eq!(table.column("User"), vec!["", "bob"]);
    assert!(table.columns().iter().all(|c| !c.ends_with("_Author")));
}

#[test]
fn dump_without_ids_gives_header_only_table() {
    let dir = tempfile::tempdir().unwrap();
    let src = write(dir.path(), "dump.txt", "TextTW : no id\nLang : en\n");
    let dst = dir.path().join("tweets.csv");
    Preprocess::new(PreprocessConfig {
        src,
        dst: dst.clone(),
    })
    .run()
    .unwrap();

    let table = read_table(&dst).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.index(), Some(TWEETID));
}

#[test]
fn missing_dump() {
    let dir = tempfile::tempdir().unwrap();
    let p = Preprocess::new(PreprocessConfig {
        src: dir.path().join("nope.txt"),
        dst: dir.path().join("tweets.csv"),
    });
    assert!(p.run().is_err());
}

#[test]
fn tokenize_then_score() {
    let dir = tempfile::tempdir().unwrap();
    let tweets = preprocess(dir.path());

    let tokenized = dir.path().join("tkn_tweets.csv");
    Tokenize::new(TokenizeConfig {
        src: tweets,
        dst: tokenized.clone(),
    })
    .run()
    .unwrap();

    let table = read_table(&tokenized).unwrap();
    assert_eq!(table.index(), Some(TWEETID));
    assert_eq!(
        table.column(PLAIN_TEXT),
        vec!["i love this movie :)", "great day"]
    );
    assert_eq!(table.column(EMOJIS), vec!["", "😂"]);
    assert_eq!(table.column(EMOTICONS), vec![":)", ""]);
    assert!(table.has_column(CREATED_AT));

    let scores = dir.path().join("score.csv");
    Score::new(ScoreConfig {
        src: tokenized,
        dst: scores.clone(),
        vader: write(dir.path(), "vader_lexicon.txt", VADER_LEXICON),
        swn: write(dir.path(), "swn.txt", SWN_LEXICON),
        emojis: None,
    })
    .run()
    .unwrap();

    let table = read_table(&scores).unwrap();
    assert_eq!(table.index(), Some(DATETIME));
    assert_eq!(table.columns(), &[DATETIME, SWN, VADER, MIX]);
    assert_eq!(
        table.column(DATETIME),
        vec!["2018-10-10 20:19:24+00:00", "2018-10-11 10:00:00+00:00"]
    );
    // love: 0.5; great: 0.75 and day: 0.0
    assert_eq!(table.column(SWN), vec!["0.5", "0.375"]);

    let vader: Vec<f64> = table
        .column(VADER)
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();
    assert!(vader.iter().all(|v| *v > 0.0 && *v <= 1.0));
}

#[test]
fn score_requires_tokenized_table() {
    let dir = tempfile::tempdir().unwrap();
    let tweets = preprocess(dir.path());

    let score = Score::new(ScoreConfig {
        src: tweets,
        dst: dir.path().join("score.csv"),
        vader: write(dir.path(), "vader_lexicon.txt", VADER_LEXICON),
        swn: write(dir.path(), "swn.txt", SWN_LEXICON),
        emojis: None,
    });
    assert!(score.run().is_err());
}
