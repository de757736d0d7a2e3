/*! Tweet tokenizer

Decodes HTML entities in [TEXT], then splits it into four channels:

- [HASHTAGS]: `#hashtags`,
- [PLAIN_TEXT]: words, including split hashtags and emoticons, without mentions and links,
- [EMOJIS]: emojis,
- [EMOTICONS]: known happy/sad emoticons.

Each channel is stored as a space-separated column.
!*/
use std::collections::HashSet;

use lazy_static::lazy_static;
use log::info;
use rayon::prelude::*;
use regex::Regex;

use crate::error::Error;
use crate::types::columns::{EMOJIS, EMOTICONS, HASHTAGS, PLAIN_TEXT, TEXT};
use crate::types::TweetTable;

use super::emoji::find_emojis;
use super::hashtag::split_hashtag;
use super::html::html2unicode;
use super::Transform;

lazy_static! {
    /// Tokens, tried in order: emoticons, html tags, retweet marker, links,
    /// mentions, hashtags, then words, numbers, ellipses and any other character.
    static ref TOKEN: Regex = Regex::new(
        r#"(?xi)
        (?:
          [<>]?
          [:;=8]                       # eyes
          [\-o\*']?                    # optional nose
          [\)\]\(\[dDpP/:\}\{@\|\\]    # mouth
          |
          [\)\]\(\[dDpP/:\}\{@\|\\]    # mouth
          [\-o\*']?                    # optional nose
          [:;=8]                       # eyes
          [<>]?
        )
        | (?:<[^>]+>)
        | RT
        | (?:http[s]?://t.co/[a-zA-Z0-9]+)
        | (?:@[\w_]+:?)
        | (?:\#+[\w_]+[\w'_\-]*[\w_]+)
        | (?:[a-z][a-z'\-_]+[a-z])
        | (?:[+\-]?\d+[,/.:-]\d+[+\-]?)
        | (?:[\w_]+)
        | (?:\.(?:\s*\.){1,})
        | (?:\S)
        "#
    )
    .unwrap();
    static ref WORD_SEPARATOR: Regex = Regex::new(r"[_\-]").unwrap();
    static ref HAPPY: HashSet<&'static str> = [
        ":-)", ":)", ";)", ":o)", ":]", ":3", ":c)", ":>", "=]", "8)", "=)", ":}", ":^)",
        ":-D", ":D", "8-D", "8D", "x-D", "xD", "X-D", "XD", "=-D", "=D", "=-3", "=3", ":-))",
        ":'-)", ":')", ":*", ":^*", ">:P", ":-P", ":P", "X-P", "x-p", "xp", "XP", ":-p", ":p",
        "=p", ":-b", ":b", ">:)", ">;)", ">:-)", "<3",
    ]
    .into_iter()
    .collect();
    static ref SAD: HashSet<&'static str> = [
        ":L", ":-/", ">:/", ":S", ">:[", ":@", ":-(", ":[", ":-||", "=L", ":<", ":-[", ":-<",
        "=\\", "=/", ">:(", ":(", ">.<", ":'-(", ":'(", ":\\", ":-c", ":c", ":{", ">:\\", ";(",
    ]
    .into_iter()
    .collect();
}

/// Token channels of a text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokens {
    pub hashtags: Vec<String>,
    pub plain: Vec<String>,
    pub emojis: Vec<String>,
    pub emoticons: Vec<String>,
}

pub fn is_emoticon(token: &str) -> bool {
    HAPPY.contains(token) || SAD.contains(token)
}

/// Split an (already decoded) text into channels.
pub fn tokenize(text: &str) -> Tokens {
    let (text, emojis) = find_emojis(text);
    let mut tokens = Tokens {
        emojis,
        ..Default::default()
    };

    for token in TOKEN.find_iter(&text).map(|m| m.as_str()) {
        if token.starts_with('#') {
            tokens.hashtags.push(token.to_string());
            tokens
                .plain
                .extend(split_hashtag(&token.replace('#', "")));
        } else if token.starts_with('@') || token.starts_with("http") {
            continue;
        } else if is_emoticon(token) {
            tokens.emoticons.push(token.to_string());
            tokens.plain.push(token.to_string());
        } else {
            tokens
                .plain
                .push(WORD_SEPARATOR.replace_all(token, " ").to_lowercase());
        }
    }

    tokens
}

#[derive(Debug, Default)]
pub struct Tokenizer;

impl Transform for Tokenizer {
    fn transform_own(&self, mut table: TweetTable) -> Result<TweetTable, Error> {
        table.require(&[TEXT])?;
        info!("tokenizing {} tweets", table.len());

        let decoded: Vec<String> = table
            .column(TEXT)
            .into_par_iter()
            .map(html2unicode)
            .collect();
        let tokens: Vec<Tokens> = decoded.par_iter().map(|t| tokenize(t)).collect();

        let hashtags = tokens.iter().map(|t| t.hashtags.join(" ")).collect();
        let plain = tokens.iter().map(|t| t.plain.join(" ")).collect();
        let emojis = tokens.iter().map(|t| t.emojis.join(" ")).collect();
        let emoticons = tokens.iter().map(|t| t.emoticons.join(" ")).collect();

        table.insert_column(TEXT, decoded)?;
        table.insert_column(HASHTAGS, hashtags)?;
        table.insert_column(PLAIN_TEXT, plain)?;
        table.insert_column(EMOJIS, emojis)?;
        table.insert_column(EMOTICONS, emoticons)?;

        Ok(table)
    }
}
