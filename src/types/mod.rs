pub mod answer;
pub mod quiz;
