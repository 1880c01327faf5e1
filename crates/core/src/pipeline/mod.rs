pub mod follow_passage_use_case;
