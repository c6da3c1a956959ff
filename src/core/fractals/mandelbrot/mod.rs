pub mod algorithm;
