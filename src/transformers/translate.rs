/*! Text translation and lemmatization

Adds [TRANSLATED_TEXT] (tweet text in the destination language) and
[STEMMED_TEXT] (lemmatized translated text).

Tweets already in the destination language are not sent to the translator.
A failed translation keeps the original text: one bad row never stops the batch.
!*/
use log::{info, warn};
use oxilangtag::LanguageTag;

use crate::error::Error;
use crate::lexicon::Lemmatizer;
use crate::translation::Translator;
use crate::types::columns::{LANG, STEMMED_TEXT, TEXT, TRANSLATED_TEXT};
use crate::types::TweetTable;

use super::Transform;

pub struct TextTranslator {
    translator: Box<dyn Translator>,
    lemmatizer: Box<dyn Lemmatizer>,
    dest: String,
    limit: Option<usize>,
}

impl TextTranslator {
    pub fn new(
        translator: Box<dyn Translator>,
        lemmatizer: Box<dyn Lemmatizer>,
        dest: String,
    ) -> Self {
        Self {
            translator,
            lemmatizer,
            dest,
            limit: None,
        }
    }

    /// Only process the first `limit` rows.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Translate `text` from `lang`, falling back to `text` on failure.
    pub fn translate(&self, text: &str, lang: &str) -> String {
        if text.is_empty() || lang == self.dest {
            return text.to_string();
        }
        if lang == "und" || LanguageTag::parse(lang).is_err() {
            warn!("not translating from unknown language {:?}", lang);
            return text.to_string();
        }

        match self.translator.translate(text, lang, &self.dest) {
            Ok(translated) => translated,
            Err(e) => {
                warn!("translation from {:?} failed: {}", lang, e);
                text.to_string()
            }
        }
    }

    /// Lemmatize each whitespace-separated word.
    pub fn lemmatize(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.lemmatizer.lemmatize(word))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl Transform for TextTranslator {
    fn transform_own(&self, mut table: TweetTable) -> Result<TweetTable, Error> {
        table.require(&[TEXT, LANG])?;
        if let Some(limit) = self.limit {
            table.truncate(limit);
        }
        info!("translating {} tweets to {}", table.len(), self.dest);

        let translated: Vec<String> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                if idx > 0 && idx % 100 == 0 {
                    info!("translated {}/{} tweets", idx, table.len());
                }
                self.translate(row.get_or_empty(TEXT), row.get_or_empty(LANG))
            })
            .collect();
        let stemmed: Vec<String> = translated.iter().map(|t| self.lemmatize(t)).collect();

        table.insert_column(TRANSLATED_TEXT, translated)?;
        table.insert_column(STEMMED_TEXT, stemmed)?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::types::Record;

    /// Upper-cases text, fails on `"boom"`, and records calls.
    #[derive(Default)]
    struct Shouting {
        calls: RefCell<Vec<String>>,
    }

    impl Translator for Shouting {
        fn translate(&self, text: &str, src: &str, _dest: &str) -> Result<String, Error> {
            self.calls.borrow_mut().push(src.to_string());
            if text == "boom" {
                return Err(Error::Translation("boom".to_string()));
            }
            Ok(text.to_uppercase())
        }
    }

    impl Translator for std::rc::Rc<Shouting> {
        fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String, Error> {
            (**self).translate(text, src, dest)
        }
    }

    /// Drops a trailing `s`.
    struct Singular;

    impl Lemmatizer for Singular {
        fn lemmatize(&self, word: &str) -> String {
            word.strip_suffix('s').unwrap_or(word).to_string()
        }
    }

    fn translator() -> (TextTranslator, std::rc::Rc<Shouting>) {
        let shouting = std::rc::Rc::new(Shouting::default());
        let t = TextTranslator::new(
            Box::new(shouting.clone()),
            Box::new(Singular),
            "en".to_string(),
        );
        (t, shouting)
    }

    #[test]
    fn english_is_kept() {
        let (t, calls) = translator();
        assert_eq!(t.translate("cats", "en"), "cats");
        assert!(calls.calls.borrow().is_empty());
    }

    #[test]
    fn other_languages_are_translated() {
        let (t, calls) = translator();
        assert_eq!(t.translate("chats", "fr"), "CHATS");
        assert_eq!(*calls.calls.borrow(), vec!["fr"]);
    }

    #[test_log::test]
    fn failures_keep_original() {
        let (t, _) = translator();
        assert_eq!(t.translate("boom", "fr"), "boom");
        assert_eq!(t.translate("hola", "und"), "hola");
        assert_eq!(t.translate("hola", ""), "hola");
    }

    #[test]
    fn transform() {
        let table = TweetTable::from_records(vec![
            [(TEXT, "two cats"), (LANG, "en")].into_iter().collect::<Record>(),
            [(TEXT, "deux chats"), (LANG, "fr")].into_iter().collect(),
            [(TEXT, "drei katzen"), (LANG, "de")].into_iter().collect(),
        ]);
        let (t, _) = translator();
        let table = t.with_limit(Some(2)).transform_own(table).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.column(TRANSLATED_TEXT), vec!["two cats", "DEUX CHATS"]);
        assert_eq!(table.column(STEMMED_TEXT), vec!["two cat", "DEUX CHATS"]);
    }
}
