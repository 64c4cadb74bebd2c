pub mod day_key;
