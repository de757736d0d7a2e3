/*!
# tweetsent

Turns scraped tweet dumps into sentiment-scored tables.

Stages, each reading the previous stage's output:

1. [processing]: raw dump to tweet table (field extraction, deduplication, retweet collapsing),
1. tokenization, translation and scoring, implemented as [transformers].

[pipelines] wires each stage to file inputs and outputs.
!*/
pub mod error;
pub mod io;
pub mod lexicon;
pub mod pipelines;
pub mod processing;
pub mod transformers;
pub mod translation;
pub mod types;
