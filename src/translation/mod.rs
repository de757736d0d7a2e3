/*! Translation services

Holds a [Translator] trait for implementing other ones.

The current translator used is Google's public translation endpoint ([GoogleTranslate]). !*/
mod google;

pub use google::GoogleTranslate;

use crate::error::Error;

pub trait Translator {
    /// Translate `text` from `src` to `dest` (both language codes).
    fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String, Error>;
}
