pub mod process_outcome;
