pub mod normalizer;
pub mod passage_aligner;
pub mod reference_passage;
pub mod tokenizer;
pub mod word_status;
